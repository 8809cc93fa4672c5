use super::*;

#[test]
fn signed_in_message_names_the_moderator() {
    assert_eq!(signed_in_message(&AuthState::logged_in("alice")), "You are signed in as alice.");
}

#[test]
fn signed_in_message_without_username() {
    assert_eq!(signed_in_message(&AuthState::logged_in("")), "You are signed in.");
}
