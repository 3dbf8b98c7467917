//! Infrastructure layer
//!
//! Concrete persistence for the storage contracts defined in `freta-store`.

pub mod persistence;

pub use persistence::FileStorage;
