//! # Session model and storage trait
//!
//! A [`Session`] is the pair of JWT tokens the API hands back on login. The
//! client keeps no other authentication state: a stored session means
//! "logged in", an empty store means "anonymous". Tokens are opaque strings
//! owned by the remote API; the client never inspects or refreshes them.
//!
//! [`SessionStore`] abstracts over where the pair lives so the same UI code
//! runs against browser `localStorage` on the web ([`crate::BrowserStore`])
//! and a plain in-memory slot everywhere else ([`crate::MemoryStore`]).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Bearer credentials returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Access token sent as `Authorization: Bearer <access>` on every request.
    pub access: String,
    /// Refresh token, persisted alongside the access token.
    pub refresh: String,
}

impl Session {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

/// Where the session pair is persisted.
///
/// Implementations must never panic on storage failure: an unreadable or
/// unavailable backend reads as "no session".
pub trait SessionStore: Send + Sync {
    /// The currently stored session, if any.
    fn load(&self) -> Option<Session>;
    /// Persist a session, replacing any previous one.
    fn save(&self, session: &Session);
    /// Remove the stored session.
    fn clear(&self);
}

/// Shared handle to a session store, cheap to clone into components.
pub type SharedStore = Arc<dyn SessionStore>;
