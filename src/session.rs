//! Session management for portal authentication

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// An authenticated session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The bearer access token
    pub access_token: String,

    /// The token type, always "bearer"
    pub token_type: String,
}

impl Session {
    /// Create a new session from an access token
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Shared holder for the current session.
///
/// One store is created per [`Portal`](crate::Portal) and cloned into
/// every sub-client, so a login through the auth client is immediately
/// visible to all of them. While the store is empty, requests go out
/// without an `Authorization` header and the server answers 401.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Option<Session>>>,
}

impl SessionStore {
    /// Create an empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a session, replacing any previous one
    pub fn set(&self, session: Session) {
        let mut current = self.inner.lock().unwrap();
        *current = Some(session);
        log::info!("session established");
    }

    /// Tear down the current session, if any
    pub fn clear(&self) {
        let mut current = self.inner.lock().unwrap();
        if current.take().is_some() {
            log::info!("session cleared");
        }
    }

    /// The current access token, if a session is active
    pub fn token(&self) -> Option<String> {
        let current = self.inner.lock().unwrap();
        current.as_ref().map(|s| s.access_token.clone())
    }

    /// Whether a session is currently active
    pub fn is_active(&self) -> bool {
        self.inner.lock().unwrap().is_some()
    }
}
