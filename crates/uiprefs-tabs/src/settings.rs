//! Tab layout settings
//!
//! Which tab is selected and the order tabs appear in, loaded from and
//! flushed to a [`DefaultsStore`]. Load repairs whatever it finds; after
//! construction, load, or any mutator the order holds every known tab exactly
//! once and the selection is either the overflow sentinel or a valid position.

use uiprefs_storage::DefaultsStore;

use crate::error::TabError;
use crate::kind::{registry_is_consistent, TabKind, TabType};
use crate::selection::SelectedTab;
use crate::Result;

pub const SELECTED_TAB_INDEX_KEY: &str = "ui.selected_tab_index";
pub const TAB_ORDER_KEY: &str = "ui.tab_order";

/// Rebuild a complete tab order from stored tags.
///
/// Unknown tags and repeats are dropped, then any known tab still missing is
/// appended in canonical order. An empty input yields the canonical order.
pub fn reconcile_order<T: TabKind>(stored: &[i64]) -> Vec<T> {
    let mut order: Vec<T> = Vec::with_capacity(T::ALL.len());

    for &raw in stored {
        match T::from_stored_tag(raw) {
            Some(tab) if !order.contains(&tab) => order.push(tab),
            Some(tab) => tracing::debug!(tab = ?tab, "Dropping repeated tab from stored order"),
            None => tracing::debug!(tag = raw, "Dropping unknown tab from stored order"),
        }
    }

    for &tab in T::DEFAULT_ORDER {
        if !order.contains(&tab) {
            tracing::debug!(tab = ?tab, "Appending tab missing from stored order");
            order.push(tab);
        }
    }

    order
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLayoutSettings<T: TabKind = TabType> {
    selected: SelectedTab,
    tab_order: Vec<T>,
}

impl<T: TabKind> TabLayoutSettings<T> {
    /// Canonical order with the first tab selected
    pub fn new() -> Self {
        debug_assert!(
            registry_is_consistent::<T>(),
            "default tab order must list every known tab exactly once"
        );

        Self {
            selected: SelectedTab::default(),
            tab_order: T::DEFAULT_ORDER.to_vec(),
        }
    }

    /// Build an instance straight from the store
    pub fn loaded<S: DefaultsStore + ?Sized>(store: &S) -> Self {
        let mut settings = Self::new();
        settings.load(store);
        settings
    }

    /// Replace the in-memory state with what the store holds, repaired.
    ///
    /// Never fails: a read error is treated the same as an absent key.
    pub fn load<S: DefaultsStore + ?Sized>(&mut self, store: &S) {
        let stored_order = store
            .read_integer_sequence(TAB_ORDER_KEY)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to read tab order, using default");
                None
            });
        let stored_index = store
            .read_integer(SELECTED_TAB_INDEX_KEY)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to read selected tab, using default");
                None
            });

        let tab_order = reconcile_order::<T>(stored_order.as_deref().unwrap_or(&[]));
        let raw = stored_index.unwrap_or(0);
        let selected = SelectedTab::from_stored(raw, T::OVERFLOW_INDEX, tab_order.len());

        if selected.to_stored(T::OVERFLOW_INDEX) != raw {
            tracing::debug!(stored = raw, "Selected tab index out of range, selecting first tab");
        }

        self.tab_order = tab_order;
        self.selected = selected;

        tracing::debug!(
            selected = ?self.selected,
            tab_count = self.tab_order.len(),
            "Loaded tab layout"
        );
    }

    /// Write selection and order to the store
    pub fn save<S: DefaultsStore + ?Sized>(&self, store: &S) -> Result<()> {
        let tags: Vec<i64> = self.tab_order.iter().map(|tab| i64::from(tab.tag())).collect();

        store.write_integer(
            SELECTED_TAB_INDEX_KEY,
            self.selected.to_stored(T::OVERFLOW_INDEX),
        )?;
        store.write_integer_sequence(TAB_ORDER_KEY, &tags)?;

        tracing::debug!(selected = ?self.selected, "Saved tab layout");

        Ok(())
    }

    pub fn tab_order(&self) -> &[T] {
        &self.tab_order
    }

    pub fn selected(&self) -> SelectedTab {
        self.selected
    }

    /// Selection in its stored integer form
    pub fn selected_tab_index(&self) -> i64 {
        self.selected.to_stored(T::OVERFLOW_INDEX)
    }

    /// Tab at the selected position, `None` while the overflow container is active
    pub fn selected_tab(&self) -> Option<T> {
        self.selected
            .position()
            .and_then(|index| self.tab_order.get(index).copied())
    }

    pub fn position_of(&self, tab: T) -> Option<usize> {
        self.tab_order.iter().position(|t| *t == tab)
    }

    pub fn select(&mut self, selected: SelectedTab) -> Result<()> {
        if let SelectedTab::Position(index) = selected {
            if index >= self.tab_order.len() {
                return Err(TabError::PositionOutOfRange {
                    index,
                    len: self.tab_order.len(),
                });
            }
        }

        self.selected = selected;
        Ok(())
    }

    /// Select whatever position `tab` currently occupies
    pub fn select_tab(&mut self, tab: T) {
        if let Some(index) = self.position_of(tab) {
            self.selected = SelectedTab::Position(index);
        }
    }

    pub fn select_overflow(&mut self) {
        self.selected = SelectedTab::Overflow;
    }

    /// Move the tab at `from` to `to`, shifting the tabs in between.
    ///
    /// A selected position keeps pointing at the same tab after the move.
    pub fn move_tab(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.tab_order.len();
        for index in [from, to] {
            if index >= len {
                return Err(TabError::PositionOutOfRange { index, len });
            }
        }

        let selected_tab = self.selected_tab();
        let tab = self.tab_order.remove(from);
        self.tab_order.insert(to, tab);

        if let Some(selected_tab) = selected_tab {
            self.select_tab(selected_tab);
        }
        self.selected = self.selected.clamped(self.tab_order.len());

        tracing::debug!(tab = ?tab, from, to, "Moved tab");

        Ok(())
    }

    /// Replace the whole order at once, e.g. after a rearrange gesture ends.
    ///
    /// The selected position is kept and re-validated against the new order.
    pub fn set_tab_order(&mut self, order: Vec<T>) -> Result<()> {
        for (i, tab) in order.iter().enumerate() {
            if order[..i].contains(tab) {
                return Err(TabError::DuplicateTab(format!("{:?}", tab)));
            }
        }
        if let Some(missing) = T::ALL.iter().find(|tab| !order.contains(tab)) {
            return Err(TabError::MissingTab(format!("{:?}", missing)));
        }

        self.tab_order = order;
        self.selected = self.selected.clamped(self.tab_order.len());
        Ok(())
    }

    /// Back to the canonical order with the first tab selected
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// How many tabs get their own slot in a bar of `slots` slots.
    ///
    /// When the tabs do not all fit, one slot goes to the overflow entry.
    pub fn visible_count(&self, slots: usize) -> usize {
        let len = self.tab_order.len();
        if len <= slots {
            len
        } else {
            slots.saturating_sub(1)
        }
    }

    pub fn visible_tabs(&self, slots: usize) -> &[T] {
        &self.tab_order[..self.visible_count(slots)]
    }

    /// Tabs relegated to the overflow container, in display order
    pub fn overflow_tabs(&self, slots: usize) -> &[T] {
        &self.tab_order[self.visible_count(slots)..]
    }
}

impl<T: TabKind> Default for TabLayoutSettings<T> {
    fn default() -> Self {
        Self::new()
    }
}
