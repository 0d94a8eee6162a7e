//! Persistence driver: an opaque key-value store.
//!
//! The production deployment backs this with the host's own storage; the
//! crate ships an in-memory store and a JSON-file store. Keys changed since
//! the last drain are reported through `take_changed_keys` so hosts can
//! observe external edits.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::StoreError;

pub trait StateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Drain and return the keys written since the last call.
    fn take_changed_keys(&mut self) -> Vec<String> {
        Vec::new()
    }
}

// A store is commonly shared between the manager and host code on the same
// event loop; Rc<RefCell<_>> keeps one backend behind both handles.
impl<S: StateStore> StateStore for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.borrow_mut().remove(key)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.borrow_mut().clear()
    }

    fn take_changed_keys(&mut self) -> Vec<String> {
        self.borrow_mut().take_changed_keys()
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    changed: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// New store pre-wrapped for sharing with a manager.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.changed.push(key.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.changed.push(key.to_string());
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.changed.extend(self.entries.keys().cloned());
        self.entries.clear();
        Ok(())
    }

    fn take_changed_keys(&mut self) -> Vec<String> {
        std::mem::take(&mut self.changed)
    }
}

/// Key-value store persisted as a single JSON object on disk.
///
/// Every write rewrites the file; layout writes are already coalesced to
/// session settles by the state manager, so write volume stays small.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    changed: Vec<String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            entries,
            changed: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()?;
        self.changed.push(key.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
            self.changed.push(key.to_string());
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.changed.extend(self.entries.keys().cloned());
        self.entries.clear();
        self.persist()
    }

    fn take_changed_keys(&mut self) -> Vec<String> {
        std::mem::take(&mut self.changed)
    }
}
