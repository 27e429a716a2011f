//! Tab registry
//!
//! Every tab the application knows about carries a stable `u8` tag. Stored
//! layouts reference tabs by tag across releases, so a shipped tag is never
//! reassigned; retired tabs leave a hole in the numbering.

use serde::{Deserialize, Serialize};

/// A closed set of tab identities that a layout can be built from.
pub trait TabKind: Copy + Eq + std::fmt::Debug + 'static {
    /// Every known tab
    const ALL: &'static [Self];

    /// Canonical display order for a fresh install
    const DEFAULT_ORDER: &'static [Self];

    /// Stored selection value meaning "the overflow container is active"
    const OVERFLOW_INDEX: i64 = 0x7fff_ffff;

    fn tag(self) -> u8;

    fn from_tag(tag: u8) -> Option<Self>;

    /// Map a raw stored integer back to a tab, if it names one
    fn from_stored_tag(raw: i64) -> Option<Self> {
        u8::try_from(raw).ok().and_then(Self::from_tag)
    }
}

/// Check that `DEFAULT_ORDER` lists every known tab exactly once and that
/// tags are unique and round-trip through `from_tag`.
pub fn registry_is_consistent<T: TabKind>() -> bool {
    if T::DEFAULT_ORDER.len() != T::ALL.len() {
        return false;
    }

    let every_tab_once = T::ALL
        .iter()
        .all(|tab| T::DEFAULT_ORDER.iter().filter(|t| *t == tab).count() == 1);

    let tags_unique = T::ALL.iter().enumerate().all(|(i, tab)| {
        T::ALL[i + 1..].iter().all(|other| other.tag() != tab.tag())
            && T::from_tag(tab.tag()) == Some(*tab)
    });

    every_tab_once && tags_unique
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabType {
    Play,
    Settings,
    Archive,
    Help,
    Diagnostics,
    About,
    SourceCode,
    Licenses,
    Credits,
    Changelog,
}

impl TabType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabType::Play => "play",
            TabType::Settings => "settings",
            TabType::Archive => "archive",
            TabType::Help => "help",
            TabType::Diagnostics => "diagnostics",
            TabType::About => "about",
            TabType::SourceCode => "source_code",
            TabType::Licenses => "licenses",
            TabType::Credits => "credits",
            TabType::Changelog => "changelog",
        }
    }
}

impl TabKind for TabType {
    const ALL: &'static [Self] = &[
        TabType::Play,
        TabType::Settings,
        TabType::Archive,
        TabType::Help,
        TabType::Diagnostics,
        TabType::About,
        TabType::SourceCode,
        TabType::Licenses,
        TabType::Credits,
        TabType::Changelog,
    ];

    const DEFAULT_ORDER: &'static [Self] = &[
        TabType::Play,
        TabType::Archive,
        TabType::Settings,
        TabType::Help,
        TabType::Diagnostics,
        TabType::About,
        TabType::SourceCode,
        TabType::Licenses,
        TabType::Credits,
        TabType::Changelog,
    ];

    // Frozen. Append new tabs with fresh tags only.
    fn tag(self) -> u8 {
        match self {
            TabType::Play => 0,
            TabType::Settings => 1,
            TabType::Archive => 2,
            TabType::Help => 3,
            TabType::Diagnostics => 4,
            TabType::About => 5,
            TabType::SourceCode => 6,
            TabType::Licenses => 7,
            TabType::Credits => 8,
            TabType::Changelog => 9,
        }
    }

    fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(TabType::Play),
            1 => Some(TabType::Settings),
            2 => Some(TabType::Archive),
            3 => Some(TabType::Help),
            4 => Some(TabType::Diagnostics),
            5 => Some(TabType::About),
            6 => Some(TabType::SourceCode),
            7 => Some(TabType::Licenses),
            8 => Some(TabType::Credits),
            9 => Some(TabType::Changelog),
            _ => None,
        }
    }
}

impl std::fmt::Display for TabType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        TabType::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == wanted)
            .ok_or_else(|| format!("Unknown tab type: {}", s))
    }
}
