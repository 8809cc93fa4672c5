use super::*;

#[test]
fn logged_out_shows_login() {
    assert_eq!(gate_view(&AuthState::logged_out()), GateView::Login);
}

#[test]
fn logged_in_shows_protected_view() {
    assert_eq!(gate_view(&AuthState::logged_in("alice")), GateView::Protected);
}

#[test]
fn username_does_not_affect_gate() {
    assert_eq!(gate_view(&AuthState::logged_in("")), GateView::Protected);
    let named_but_out = AuthState { user_name: "alice".to_owned(), is_logged_in: false };
    assert_eq!(gate_view(&named_but_out), GateView::Login);
}
