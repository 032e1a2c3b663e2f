// session.rs
use std::sync::{Arc, RwLock};

use tracing::info;

use crate::models::Publisher;

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub publisher: Option<Publisher>,
}

/// Shared login state. Opened by a successful login, torn down by logout,
/// consulted by every authenticated request for the bearer token.
///
/// In-memory only; callers that want the session to outlive the process
/// persist the token themselves and rehydrate through
/// `AuthService::hydrate`.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    pub fn open(&self, token: impl Into<String>) {
        let mut guard = self.inner.write().unwrap();
        *guard = Some(Session {
            token: token.into(),
            publisher: None,
        });
        info!("Session opened");
    }

    /// Cache the profile fetched after login or hydrate.
    pub fn attach_publisher(&self, publisher: Publisher) {
        let mut guard = self.inner.write().unwrap();
        if let Some(session) = guard.as_mut() {
            session.publisher = Some(publisher);
        }
    }

    pub fn close(&self) {
        let mut guard = self.inner.write().unwrap();
        if guard.take().is_some() {
            info!("Session closed");
        }
    }

    pub fn token(&self) -> Option<String> {
        let guard = self.inner.read().unwrap();
        guard.as_ref().map(|session| session.token.clone())
    }

    pub fn publisher(&self) -> Option<Publisher> {
        let guard = self.inner.read().unwrap();
        guard.as_ref().and_then(|session| session.publisher.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        let guard = self.inner.read().unwrap();
        guard.is_some()
    }
}
