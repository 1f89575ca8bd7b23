//! Session Holder
//!
//! The only state shared across views: the auth token and display name,
//! held in a reactive store provided via context and mirrored to
//! `localStorage` (keys `token` / `username`) so it survives reloads.

use leptos::prelude::*;
use reactive_stores::Store;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

/// Current session, if any. Views read it; only login/logout write it.
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    pub token: Option<String>,
    pub display_name: Option<String>,
}

pub type SessionStore = Store<SessionState>;

fn storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

/// Read the persisted session at startup.
pub fn load_session() -> SessionState {
    let Some(storage) = storage() else {
        return SessionState::default();
    };
    SessionState {
        token: storage.get_item(TOKEN_KEY).ok().flatten(),
        display_name: storage.get_item(USERNAME_KEY).ok().flatten(),
    }
}

/// Get the session store from context.
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Current bearer token, if a session exists.
pub fn current_token(store: &SessionStore) -> Option<String> {
    store.token().get()
}

/// Current display name, if a session exists.
pub fn current_display_name(store: &SessionStore) -> Option<String> {
    store.display_name().get()
}

/// Establish a session after login: update the store and persist.
pub fn set_session(store: &SessionStore, token: String, display_name: String) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, &token);
        let _ = storage.set_item(USERNAME_KEY, &display_name);
    }
    store.token().set(Some(token));
    store.display_name().set(Some(display_name));
}

/// Drop the session: clear the store and the persisted keys.
pub fn clear_session(store: &SessionStore) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
    store.token().set(None);
    store.display_name().set(None);
}
