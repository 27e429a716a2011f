//! Selected tab
//!
//! The selection addresses a *position* in the tab order, not a tab identity.
//! Reordering the tabs changes which tab a given position refers to.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectedTab {
    /// A directly visible slot in the tab bar
    Position(usize),
    /// The overflow ("more") container
    Overflow,
}

impl SelectedTab {
    /// Integer form written to the store
    pub fn to_stored(self, overflow_index: i64) -> i64 {
        match self {
            SelectedTab::Position(index) => i64::try_from(index).unwrap_or(0),
            SelectedTab::Overflow => overflow_index,
        }
    }

    /// Interpret a stored integer against an order of `len` tabs.
    ///
    /// Anything that is neither the sentinel nor a valid position clamps to
    /// the first tab.
    pub fn from_stored(raw: i64, overflow_index: i64, len: usize) -> Self {
        if raw == overflow_index {
            return SelectedTab::Overflow;
        }

        match usize::try_from(raw) {
            Ok(index) if index < len => SelectedTab::Position(index),
            _ => SelectedTab::Position(0),
        }
    }

    /// Same clamp as [`SelectedTab::from_stored`], applied to an in-memory value
    pub fn clamped(self, len: usize) -> Self {
        match self {
            SelectedTab::Position(index) if index >= len => SelectedTab::Position(0),
            other => other,
        }
    }

    pub fn position(self) -> Option<usize> {
        match self {
            SelectedTab::Position(index) => Some(index),
            SelectedTab::Overflow => None,
        }
    }

    pub fn is_overflow(self) -> bool {
        matches!(self, SelectedTab::Overflow)
    }
}

impl Default for SelectedTab {
    fn default() -> Self {
        SelectedTab::Position(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTINEL: i64 = 0x7fff_ffff;

    #[test]
    fn test_from_stored() {
        assert_eq!(SelectedTab::from_stored(2, SENTINEL, 3), SelectedTab::Position(2));
        assert_eq!(SelectedTab::from_stored(SENTINEL, SENTINEL, 3), SelectedTab::Overflow);
        // Out of range and negative values clamp
        assert_eq!(SelectedTab::from_stored(7, SENTINEL, 3), SelectedTab::Position(0));
        assert_eq!(SelectedTab::from_stored(3, SENTINEL, 3), SelectedTab::Position(0));
        assert_eq!(SelectedTab::from_stored(-5, SENTINEL, 3), SelectedTab::Position(0));
    }

    #[test]
    fn test_to_stored() {
        assert_eq!(SelectedTab::Position(4).to_stored(SENTINEL), 4);
        assert_eq!(SelectedTab::Overflow.to_stored(SENTINEL), SENTINEL);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(SelectedTab::Position(5).clamped(5), SelectedTab::Position(0));
        assert_eq!(SelectedTab::Position(4).clamped(5), SelectedTab::Position(4));
        assert_eq!(SelectedTab::Overflow.clamped(0), SelectedTab::Overflow);
    }
}
