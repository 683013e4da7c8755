//! Session Token Storage
//!
//! The session is a single opaque token. `SessionProvider` hides where it lives.

use std::cell::RefCell;
use std::rc::Rc;

/// Get/set/clear access to the persisted session token
pub trait SessionProvider {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// Token kept in the browser's `localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorageSession {
    key: String,
}

impl LocalStorageSession {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionProvider for LocalStorageSession {
    fn token(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn set_token(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(&self.key, token) {
                    log::error!("[SESSION] Failed to persist token: {:?}", e);
                }
            }
            None => log::error!("[SESSION] localStorage unavailable, token not persisted"),
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                log::error!("[SESSION] Failed to remove token: {:?}", e);
            }
        }
    }
}

/// In-memory token, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    token: Rc<RefCell<Option<String>>>,
}

impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        let session = Self::default();
        session.set_token(token);
        session
    }
}

impl SessionProvider for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}
