//! Repository adapters for the persistence layer

use std::path::PathBuf;

use freta_infra::FileStorage;
use freta_store::RequestStore;
use freta_types::Result;

use crate::config::Config;

/// Open the file-backed request store under the configured data directory
pub fn open_request_store(config: &Config) -> Result<RequestStore<FileStorage>> {
    open_request_store_at(config.data_dir()?)
}

/// Open the request store at a custom directory
pub fn open_request_store_at(data_dir: PathBuf) -> Result<RequestStore<FileStorage>> {
    let storage = FileStorage::open(data_dir)?;
    Ok(RequestStore::open(storage))
}
