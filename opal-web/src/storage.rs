//! Explicit persistence for the session cell.
//!
//! Kept separate from the store itself so state changes and storage writes
//! stay distinct steps: the auth client persists after each successful
//! mutation, and the app shell restores once at startup.

use gloo_storage::{SessionStorage, Storage};
use shared::models::AuthState;

/// Session-storage key the token pair is persisted under.
pub const AUTH_STORAGE_KEY: &str = "auth";

/// Persistence seam for the session token pair.
pub trait SessionPersistence {
    /// Writes the token pair under the session key.
    fn save(&self, state: &AuthState);
    /// Reads the persisted pair, if any.
    fn restore(&self) -> Option<AuthState>;
    /// Removes the persisted pair.
    fn clear(&self);
}

/// Browser-backed persistence over `sessionStorage`.
#[derive(Debug, Default, Clone)]
pub struct BrowserSession;

impl SessionPersistence for BrowserSession {
    fn save(&self, state: &AuthState) {
        // A failed storage write is not actionable here; the session still
        // works for the lifetime of the page.
        let _ = SessionStorage::set(AUTH_STORAGE_KEY, state);
    }

    fn restore(&self) -> Option<AuthState> {
        SessionStorage::get(AUTH_STORAGE_KEY).ok()
    }

    fn clear(&self) {
        SessionStorage::delete(AUTH_STORAGE_KEY);
    }
}
