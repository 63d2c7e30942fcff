use api::ApiClient;
use console::{Session, SessionStore};
use dioxus::prelude::*;
use shared_types::ConsoleSettings;

/// Reactive copy of the [`SessionStore`] state.
///
/// The store is the owner; this signal is refreshed on every store change
/// so components re-render and guards re-evaluate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session>,
}

impl AuthState {
    pub fn new(initial: Session) -> Self {
        Self {
            session: Signal::new(initial),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn email(&self) -> Option<String> {
        self.session.read().identity().map(|i| i.email.clone())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_settings() -> ConsoleSettings {
    use_context::<ConsoleSettings>()
}
