use shared::models::AuthState;
use yewdux::Store;

/// Reactive cell holding the current token pair.
///
/// Persistence is not a side effect of setting this store. Whoever mutates
/// the session (login, refresh, logout) persists it explicitly through a
/// [`crate::storage::SessionPersistence`] afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct SessionStore {
    /// Current token pair; empty when signed out.
    pub tokens: AuthState,
}

/// Reactive cell backing the global loading indicator, toggled at the start
/// and end of every network-bearing call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Store)]
pub struct LoadingState {
    /// Whether a network call is currently in flight.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use yewdux::{Context, Dispatch};

    /// Setting the cell and reading it back yields the same value.
    #[test]
    fn test_session_store_round_trip() {
        let cx = Context::new();
        let dispatch = Dispatch::<SessionStore>::new(&cx);
        assert_eq!(*dispatch.get(), SessionStore::default());

        let state = SessionStore {
            tokens: AuthState::new("access", "refresh"),
        };
        dispatch.set(state.clone());
        assert_eq!(*dispatch.get(), state);
    }

    /// Subscribers observe the current value immediately and every set.
    #[test]
    fn test_session_store_notifies_subscribers() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let cx = Context::new();
        let dispatch = Dispatch::<SessionStore>::new(&cx);
        let seen: Rc<RefCell<Vec<SessionStore>>> = Rc::default();
        let seen_handle = seen.clone();
        // subscribe consumes its dispatch, so subscribe on a clone.
        let _subscription = dispatch
            .clone()
            .subscribe(move |state: std::rc::Rc<SessionStore>| {
                seen_handle.borrow_mut().push((*state).clone());
            });

        dispatch.set(SessionStore {
            tokens: AuthState::new("a", "r"),
        });

        let seen = seen.borrow();
        assert_eq!(seen.first(), Some(&SessionStore::default()));
        assert_eq!(
            seen.last().map(|state| state.tokens.clone()),
            Some(AuthState::new("a", "r"))
        );
    }

    #[test]
    fn test_loading_state_defaults_inactive() {
        let cx = Context::new();
        let dispatch = Dispatch::<LoadingState>::new(&cx);
        assert!(!dispatch.get().active);
    }
}
