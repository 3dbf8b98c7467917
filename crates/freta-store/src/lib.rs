//! Persistent store for transport requests

mod requests;
mod storage;

pub use requests::{RequestStore, REQUESTS_KEY};
pub use storage::{MemoryStorage, StorageBackend};
