use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::models::AuthUser;

/// An authenticated user and their bearer token. Serializable so hosts can
/// persist it across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

/// Shared handle to the current session, if any. Clones point at the same
/// slot, so a client clearing the session after a 401 is immediately visible
/// to the planner that handed the store out.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, session: Session) {
        *self.inner.write().unwrap() = Some(session);
    }

    pub fn get(&self) -> Option<Session> {
        self.inner.read().unwrap().clone()
    }

    /// Bearer token of the current session, if any.
    pub fn token(&self) -> Option<String> {
        self.inner.read().unwrap().as_ref().map(|s| s.token.clone())
    }

    pub fn clear(&self) {
        *self.inner.write().unwrap() = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().unwrap().is_some()
    }
}
