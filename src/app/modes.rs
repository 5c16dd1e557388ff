//! Input mode and load state types for the application.
//!
//! # State Machine
//!
//! The dataset moves through [`LoadState`] exactly once per fetch:
//!
//! ```text
//! Loading ──(WebRequestResult ok)──► Loaded(Explorer)
//!    │
//!    └──(failure / permission denied)──► Failed(message) ──(r)──► Loading
//! ```
//!
//! While loaded, the user is either browsing cards ([`InputMode::Browse`]) or
//! choosing a value in one of the three selectors ([`InputMode::Picker`]).

use crate::domain::Explorer;

/// Which selector a picker stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    /// Continent selector ("All Continents" + scheme options).
    Continent,
    /// Subregion selector ("All Subregions" + dataset subregions).
    Subregion,
    /// Top-10 selector (off, population, area).
    Rank,
}

impl PickerKind {
    /// Title shown above the picker.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Continent => "Continent",
            Self::Subregion => "Subregion",
            Self::Rank => "Top 10",
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigating country cards.
    ///
    /// Available keybindings: j/k (navigate), c/s/t (pickers), a (sort),
    /// x (reset), enter (open map), q (quit).
    Browse,

    /// Choosing a value in a picker; typed characters narrow the options.
    Picker(PickerKind),
}

/// Lifecycle of the dataset.
///
/// One tagged value instead of separate loading/error flags, so the UI can
/// never be loading and failed at once.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The dataset has not arrived yet.
    Loading,
    /// The dataset is available and owned by the pipeline session.
    Loaded(Explorer),
    /// The load failed; the message is shown full-screen.
    Failed(String),
}

impl LoadState {
    /// Returns the pipeline session if the dataset is loaded.
    #[must_use]
    pub const fn explorer(&self) -> Option<&Explorer> {
        match self {
            Self::Loaded(explorer) => Some(explorer),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Mutable access to the pipeline session if the dataset is loaded.
    pub fn explorer_mut(&mut self) -> Option<&mut Explorer> {
        match self {
            Self::Loaded(explorer) => Some(explorer),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}
