//! # Browser session store — `localStorage`
//!
//! [`BrowserStore`] is the [`SessionStore`] implementation used on the
//! **web platform**. It persists the token pair as two plain strings in
//! `window.localStorage`, so a login survives page reloads and browser
//! restarts until the user logs out.
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `inkwell.access_token` | JWT access token |
//! | `inkwell.refresh_token` | JWT refresh token |
//!
//! ## Error handling
//!
//! Every operation silently swallows storage errors (returning `None` for
//! reads, doing nothing for writes). A blocked or unavailable
//! `localStorage` degrades to "not logged in" rather than crashing; the
//! authoritative session always lives on the API side.

use crate::session::{Session, SessionStore};

const ACCESS_KEY: &str = "inkwell.access_token";
const REFRESH_KEY: &str = "inkwell.refresh_token";

/// `localStorage`-backed SessionStore for the web platform.
///
/// A zero-size struct: the storage handle is re-fetched from `window` on
/// every operation, so the store itself stays `Send + Sync` and trivially
/// cloneable.
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserStore {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let access = storage.get_item(ACCESS_KEY).ok().flatten()?;
        let refresh = storage.get_item(REFRESH_KEY).ok().flatten()?;
        Some(Session { access, refresh })
    }

    fn save(&self, session: &Session) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(ACCESS_KEY, &session.access);
            let _ = storage.set_item(REFRESH_KEY, &session.refresh);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(ACCESS_KEY);
            let _ = storage.remove_item(REFRESH_KEY);
        }
    }
}
