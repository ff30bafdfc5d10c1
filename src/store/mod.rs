//! Embedded persistence for match and commentary records.
//!
//! The fan-out hub never reads the store; HTTP handlers write here first and
//! broadcast second.

pub mod sled_store;

pub use sled_store::MatchStore;

use thiserror::Error;

/// Failures raised by the embedded store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Db(#[from] sled::Error),
    #[error("corrupt record: {0}")]
    Codec(#[from] serde_json::Error),
}
