use std::sync::{Arc, Mutex};

use crate::session::{Session, SessionStore};

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Option<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        self.inner.lock().unwrap().clone()
    }

    fn save(&self, session: &Session) {
        *self.inner.lock().unwrap() = Some(session.clone());
    }

    fn clear(&self) {
        *self.inner.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_no_session() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = MemoryStore::new();
        let session = Session::new("access-abc", "refresh-xyz");

        store.save(&session);

        let loaded = store.load().expect("session should be stored");
        assert_eq!(loaded.access, "access-abc");
        assert_eq!(loaded.refresh, "refresh-xyz");
    }

    #[test]
    fn test_save_replaces_previous_session() {
        let store = MemoryStore::new();
        store.save(&Session::new("first", "r1"));
        store.save(&Session::new("second", "r2"));

        assert_eq!(store.load().unwrap().access, "second");
    }

    #[test]
    fn test_clear_removes_session() {
        let store = MemoryStore::new();
        store.save(&Session::new("access", "refresh"));

        store.clear();

        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.save(&Session::new("shared", "r"));

        assert_eq!(other.load().unwrap().access, "shared");
    }
}
