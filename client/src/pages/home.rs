//! Landing page introducing the moderation tool.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__section" lang="fr">
                <h1>"🇫🇷 Découvrez Nutripatrol : l'outil de modération en cours de développement pour Open Food Facts."</h1>
                <p>
                    "Nutripatrol simplifie la modération des produits alimentaires en proposant une plateforme de ticketing intuitive. "
                    "Vous pouvez signaler rapidement les erreurs, incohérences ou informations manquantes sur les produits alimentaires répertoriés."
                </p>
                <p>
                    "Rejoignez-nous pour contribuer à l'amélioration de la base de données Open Food Facts et aider les consommateurs "
                    "du monde entier à prendre des décisions éclairées sur leur alimentation."
                </p>
            </section>
            <section class="home-page__section" lang="en">
                <h1>"🇺🇸 / 🇬🇧 Discover Nutripatrol: the moderation tool currently in development for Open Food Facts."</h1>
                <p>
                    "Nutripatrol simplifies the moderation of food products by offering an intuitive ticketing platform. "
                    "You can quickly report errors, inconsistencies, or missing information on listed food products."
                </p>
                <p>
                    "Join us in contributing to the improvement of the Open Food Facts database and helping consumers worldwide "
                    "make informed decisions about their diet."
                </p>
            </section>
        </div>
    }
}
