//! Preferences owner
//!
//! Holds the tab layout together with the store it is loaded from. The UI
//! layer owns one instance, mutates the layout in place and calls
//! [`Preferences::checkpoint`] whenever the application is about to lose
//! control (backgrounding, shutdown).

use uiprefs_storage::{DefaultsStore, SqliteStore};
use uiprefs_tabs::{TabLayoutSettings, TabType, SELECTED_TAB_INDEX_KEY, TAB_ORDER_KEY};

use crate::config::Config;
use crate::Result;

/// Lifecycle point at which preferences are flushed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    Background,
    Shutdown,
    Explicit,
}

impl Checkpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Checkpoint::Background => "background",
            Checkpoint::Shutdown => "shutdown",
            Checkpoint::Explicit => "explicit",
        }
    }
}

impl std::fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub struct Preferences {
    store: Box<dyn DefaultsStore>,
    tab_layout: TabLayoutSettings<TabType>,
    visible_tab_slots: usize,
}

impl Preferences {
    /// Open the on-disk store named by `config` and load from it
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;

        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let store = SqliteStore::open(&config.database_path)?;

        tracing::info!(path = %config.database_path.display(), "Opened defaults store");

        Ok(Self::with_store(Box::new(store), config.visible_tab_slots))
    }

    pub fn with_store(store: Box<dyn DefaultsStore>, visible_tab_slots: usize) -> Self {
        let tab_layout = TabLayoutSettings::loaded(&*store);

        Self {
            store,
            tab_layout,
            visible_tab_slots,
        }
    }

    pub fn tab_layout(&self) -> &TabLayoutSettings<TabType> {
        &self.tab_layout
    }

    pub fn tab_layout_mut(&mut self) -> &mut TabLayoutSettings<TabType> {
        &mut self.tab_layout
    }

    pub fn visible_tab_slots(&self) -> usize {
        self.visible_tab_slots
    }

    pub fn visible_tabs(&self) -> &[TabType] {
        self.tab_layout.visible_tabs(self.visible_tab_slots)
    }

    pub fn overflow_tabs(&self) -> &[TabType] {
        self.tab_layout.overflow_tabs(self.visible_tab_slots)
    }

    /// Flush the current layout to the store
    pub fn checkpoint(&self, reason: Checkpoint) -> Result<()> {
        self.tab_layout.save(&*self.store)?;

        tracing::info!(reason = %reason, "Saved preferences");

        Ok(())
    }

    /// Discard in-memory changes and reload from the store
    pub fn reload(&mut self) {
        self.tab_layout.load(&*self.store);
    }

    /// Forget the user's layout, both in memory and in the store
    pub fn reset_tab_layout(&mut self) -> Result<()> {
        self.tab_layout.reset();
        self.store.remove(SELECTED_TAB_INDEX_KEY)?;
        self.store.remove(TAB_ORDER_KEY)?;

        tracing::info!("Reset tab layout to defaults");

        Ok(())
    }
}
