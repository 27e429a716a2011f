//! uiprefs Tab Layout
//!
//! Persisted layout of the main tab bar: the user's tab order and which tab
//! is selected. Tabs are addressed by stable tags so layouts survive tabs
//! being added or retired between releases.

mod error;
mod kind;
mod selection;
mod settings;

pub use error::TabError;
pub use kind::{registry_is_consistent, TabKind, TabType};
pub use selection::SelectedTab;
pub use settings::{reconcile_order, TabLayoutSettings, SELECTED_TAB_INDEX_KEY, TAB_ORDER_KEY};

pub type Result<T> = std::result::Result<T, TabError>;
