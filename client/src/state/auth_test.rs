use super::*;

fn user() -> User {
    User { id: "u1".into(), first_name: "Ada".into(), last_name: "Lovelace".into(), email: "ada@b.com".into() }
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("k"), None);
    storage.set_item("k", "v");
    assert_eq!(storage.get_item("k").as_deref(), Some("v"));
    storage.remove_item("k");
    assert_eq!(storage.get_item("k"), None);
}

// =============================================================
// localStorage write reporting
// =============================================================

#[test]
fn storage_write_success_is_reported() {
    assert!(report_storage_write::<String>("write", TOKEN_KEY, Some(Ok(()))));
}

#[test]
fn storage_write_error_is_reported_as_failure() {
    assert!(!report_storage_write("write", USER_KEY, Some(Err("QuotaExceededError"))));
    assert!(!report_storage_write("remove", TOKEN_KEY, Some(Err("SecurityError"))));
}

#[test]
fn missing_storage_handle_is_reported_as_failure() {
    assert!(!report_storage_write::<String>("write", TOKEN_KEY, None));
}

// =============================================================
// AuthState load
// =============================================================

#[test]
fn load_from_empty_storage_is_signed_out() {
    let state = AuthState::load(&MemoryStorage::new());
    assert_eq!(state, AuthState::default());
    assert!(!state.is_authenticated());
}

#[test]
fn load_reads_token_and_user() {
    let storage = MemoryStorage::new();
    storage.set_item(TOKEN_KEY, "tok");
    storage.set_item(USER_KEY, &serde_json::to_string(&user()).unwrap());

    let state = AuthState::load(&storage);
    assert_eq!(state.token.as_deref(), Some("tok"));
    assert_eq!(state.user, Some(user()));
}

#[test]
fn load_treats_corrupt_user_as_absent() {
    let storage = MemoryStorage::new();
    storage.set_item(TOKEN_KEY, "tok");
    storage.set_item(USER_KEY, "{not json");

    let state = AuthState::load(&storage);
    assert_eq!(state.token.as_deref(), Some("tok"));
    assert!(state.user.is_none());
}

#[test]
fn load_treats_empty_token_as_absent() {
    let storage = MemoryStorage::new();
    storage.set_item(TOKEN_KEY, "");
    assert!(!AuthState::load(&storage).is_authenticated());
}

// =============================================================
// set_auth / logout
// =============================================================

#[test]
fn set_auth_persists_exactly_what_was_set() {
    let storage = MemoryStorage::new();
    let mut state = AuthState::default();
    state.set_auth(&storage, "tok".into(), user());

    assert!(state.is_authenticated());
    assert_eq!(AuthState::load(&storage), state);
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("tok"));
}

#[test]
fn set_auth_replaces_previous_session() {
    let storage = MemoryStorage::new();
    let mut state = AuthState::default();
    state.set_auth(&storage, "old".into(), user());

    let other = User { id: "u2".into(), email: "b@b.com".into(), ..user() };
    state.set_auth(&storage, "new".into(), other.clone());

    let reloaded = AuthState::load(&storage);
    assert_eq!(reloaded.token.as_deref(), Some("new"));
    assert_eq!(reloaded.user, Some(other));
}

#[test]
fn logout_clears_memory_and_storage() {
    let storage = MemoryStorage::new();
    let mut state = AuthState::default();
    state.set_auth(&storage, "tok".into(), user());
    state.logout(&storage);

    assert_eq!(state, AuthState::default());
    assert_eq!(storage.get_item(TOKEN_KEY), None);
    assert_eq!(storage.get_item(USER_KEY), None);
}

#[test]
fn authenticated_is_token_presence_only() {
    let state = AuthState { token: Some("garbage".into()), user: None };
    assert!(state.is_authenticated());
}

// =============================================================
// AuthContext
// =============================================================

#[test]
fn context_seeds_from_storage_and_writes_through() {
    let owner = leptos::reactive::owner::Owner::new();
    owner.set();

    let storage = Arc::new(MemoryStorage::new());
    storage.set_item(TOKEN_KEY, "seed");
    let ctx = AuthContext::new(storage.clone());
    assert!(ctx.is_authenticated());

    ctx.set_auth("tok".into(), user());
    assert_eq!(ctx.state.get_untracked().token.as_deref(), Some("tok"));
    assert_eq!(AuthState::load(storage.as_ref()).user, Some(user()));

    ctx.logout();
    assert!(!ctx.is_authenticated());
    assert_eq!(storage.get_item(TOKEN_KEY), None);
}
