//! Key/value persistence boundary.
//!
//! The browser implementation lives in the frontend crate and wraps
//! `localStorage`. Values are opaque strings written as whole-value
//! overwrites; there is no schema version.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// String key/value store with `localStorage` semantics.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_items() {
        let a = InMemoryStorage::new();
        let b = a.clone();
        a.set_item("darkMode", "true").unwrap();
        assert_eq!(b.get_item("darkMode").unwrap().as_deref(), Some("true"));
        b.set_item("darkMode", "false").unwrap();
        assert_eq!(a.get_item("darkMode").unwrap().as_deref(), Some("false"));
        assert_eq!(a.get_item("crimeReports").unwrap(), None);
    }
}
