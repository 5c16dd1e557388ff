//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState::compute_viewmodel()` and consumed
//! by the renderer. Numbers and placeholders are already formatted; the
//! components only fit each string to its column.
//!
//! # Example
//!
//! ```rust
//! use zatlas::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Country Explorer ".into(), badges: vec![], details: String::new() },
//!     footer: FooterInfo { keybindings: "q: quit".into() },
//!     cards: vec![],
//!     selected_index: 0,
//!     detail: None,
//!     picker: None,
//!     status: None,
//! };
//! assert!(vm.cards.is_empty());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar and active-filter badges.
    pub header: HeaderInfo,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Visible window of country cards.
    pub cards: Vec<CardRow>,

    /// Index of the selected card within `cards`.
    pub selected_index: usize,

    /// Expanded card for the selected country, when the pane is tall enough.
    pub detail: Option<DetailCard>,

    /// Open picker, replacing the card list while active.
    pub picker: Option<PickerInfo>,

    /// Full-body status message (loading, failure, no matches).
    pub status: Option<StatusInfo>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Centered title including the visible count.
    pub title: String,

    /// Active filter indicators, e.g. `Continent: Africa`, `A→Z`.
    pub badges: Vec<String>,

    /// Dimmed trailing note, e.g. `loaded 5m ago`.
    pub details: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// One country rendered as a single table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    pub name: String,
    pub capital: String,
    pub population: String,
    pub area: String,
    pub continent: String,
    pub subregion: String,
    pub is_selected: bool,
}

/// Expanded card for the selected country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    pub name: String,
    pub flag_url: String,
    pub capital: String,
    pub population: String,
    pub area: String,
    pub continent: String,
    pub subregion: String,
}

/// Picker overlay standing in for a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerInfo {
    /// Selector name, e.g. `Subregion`.
    pub title: String,

    /// Type-ahead query.
    pub query: String,

    /// Visible window of options matching the query.
    pub items: Vec<PickerItem>,

    /// Total options matching the query.
    pub match_count: usize,
}

/// One option in a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    pub label: String,

    /// Whether the picker cursor is on this option.
    pub is_selected: bool,

    /// Whether this option is the value currently applied.
    pub is_current: bool,

    /// Character ranges to highlight for the fuzzy match, `(start, end)`.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Tone of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Error,
}

/// Full-body status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    /// Primary message (e.g. "Loading countries…").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    pub tone: StatusTone,
}
