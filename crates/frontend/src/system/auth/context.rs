use leptos::prelude::*;

use super::session::Session;
use super::storage::BrowserStorage;
use crate::shared::api_utils::{api_base, ApiClient};

/// App-wide session handle provided at the root of the component tree
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
}

impl SessionContext {
    /// Restores the session persisted by a previous visit
    pub fn init() -> Self {
        let session = Session::load(&BrowserStorage);
        log::debug!(
            "session restored: authenticated={}",
            session.is_authenticated()
        );
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn get(&self) -> Session {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.session.with(Session::is_admin)
    }

    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.username.clone())
    }

    /// Request factory carrying the current bearer token
    pub fn api_client(&self) -> ApiClient {
        let token = self.session.with_untracked(|s| s.token.clone());
        ApiClient::new(api_base(), token)
    }

    pub fn sign_in(&self, session: Session) {
        session.persist(&BrowserStorage);
        log::info!("signed in as {}", session.username.as_deref().unwrap_or("?"));
        self.session.set(session);
    }

    pub fn sign_out(&self) {
        Session::clear(&BrowserStorage);
        log::info!("signed out");
        self.session.set(Session::default());
    }
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not provided in component tree")
}
