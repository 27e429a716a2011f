//! Tab layout error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab position {index} out of range for {len} tabs")]
    PositionOutOfRange { index: usize, len: usize },

    #[error("Tab appears more than once in order: {0}")]
    DuplicateTab(String),

    #[error("Tab missing from order: {0}")]
    MissingTab(String),

    #[error("Storage error: {0}")]
    Storage(#[from] uiprefs_storage::StorageError),
}
