use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    AuthState {
        token: Some("tok".into()),
        user: Some(User { id: "1".into(), first_name: "A".into(), last_name: "B".into(), email: "a@b.com".into() }),
    }
}

#[test]
fn guest_cannot_enter_protected() {
    assert!(!can_enter_protected(&AuthState::default()));
}

#[test]
fn token_holder_can_enter_protected() {
    assert!(can_enter_protected(&signed_in()));
}

#[test]
fn token_without_user_still_passes_gate() {
    let state = AuthState { token: Some("expired-or-forged".into()), user: None };
    assert!(can_enter_protected(&state));
}

#[test]
fn guest_pages_let_visitors_without_token_stay() {
    assert!(!should_redirect_guest(&AuthState::default()));
    assert_eq!(guest_redirect_target(&AuthState::default(), false), None);
}

#[test]
fn guest_pages_send_signed_in_user_to_dashboard() {
    assert!(should_redirect_guest(&signed_in()));
    assert_eq!(guest_redirect_target(&signed_in(), false), Some(DASHBOARD_ROUTE));
}

#[test]
fn held_guest_redirect_never_fires() {
    assert_eq!(guest_redirect_target(&signed_in(), true), None);
    assert_eq!(guest_redirect_target(&AuthState::default(), true), None);
}

#[test]
fn unknown_path_login_view_holds_redirect() {
    let hold = crate::pages::login::redirect_held(true, false);
    assert_eq!(guest_redirect_target(&signed_in(), hold), None);
}

#[test]
fn login_route_redirects_unless_splash_is_up() {
    use crate::pages::login::redirect_held;
    assert_eq!(guest_redirect_target(&signed_in(), redirect_held(false, false)), Some(DASHBOARD_ROUTE));
    assert_eq!(guest_redirect_target(&signed_in(), redirect_held(false, true)), None);
}
