//! Seams to the external collaborators: the host surface that renders the
//! widget containers and the key-value store that persists layout.

pub mod host;
pub mod store;

pub use host::{ElementState, HeadlessElement, HostElement};
pub use store::{FileStore, MemoryStore, StateStore};
