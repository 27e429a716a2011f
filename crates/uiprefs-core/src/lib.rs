//! uiprefs Core
//!
//! Application-facing entry point: configuration, the owned preferences
//! instance with its injected store, and logging setup.

mod config;
mod error;
mod preferences;

pub use config::{Config, DEFAULT_VISIBLE_TAB_SLOTS};
pub use error::CoreError;
pub use preferences::{Checkpoint, Preferences};

// Re-export core components
pub use uiprefs_storage::{DefaultsStore, MemoryStore, SqliteStore, StorageError};
pub use uiprefs_tabs::{SelectedTab, TabError, TabKind, TabLayoutSettings, TabType};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
