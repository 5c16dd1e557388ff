//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for transient plugin state: the
//! dataset lifecycle, the card cursor, the open picker, and fetch bookkeeping.
//! The filter/sort results themselves live in the [`Explorer`] owned by
//! [`LoadState::Loaded`]; this module only decides which slice of them is
//! visible and how it reads on screen.
//!
//! # Example
//!
//! ```rust
//! use zatlas::app::AppState;
//! use zatlas::ui::Theme;
//! use zatlas::ContinentScheme;
//!
//! let state = AppState::new(Theme::default(), ContinentScheme::default());
//! assert!(state.subregion_options().is_empty());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.status.is_some());
//! ```

use super::actions::Action;
use super::modes::{InputMode, LoadState, PickerKind};
use crate::domain::{ContinentScheme, Country, Explorer, FilterChange, FilterState, RankMetric};
use crate::infrastructure::{DEFAULT_ENDPOINT, DEFAULT_OPENER};
use crate::ui::helpers::{format_age, format_area, group_digits};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardRow, DetailCard, FooterInfo, HeaderInfo, PickerInfo, PickerItem, StatusInfo, StatusTone,
    UIViewModel,
};
use chrono::{DateTime, Utc};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Rows taken by header, column heading, and footer in browse mode.
const BROWSE_CHROME_ROWS: usize = 6;

/// Rows taken by the detail card, including its separator.
const DETAIL_ROWS: usize = 5;

/// Fewest card rows worth keeping before the detail card is dropped.
const MIN_CARD_ROWS: usize = 3;

/// Rows taken by header, picker frame, and footer in picker mode.
const PICKER_CHROME_ROWS: usize = 9;

/// One choice offered by a picker and the filter edit it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub label: String,
    pub change: FilterChange,
}

impl PickerOption {
    fn new(label: impl Into<String>, change: FilterChange) -> Self {
        Self { label: label.into(), change }
    }

    /// Whether this option is the value currently applied in `filter`.
    fn is_current(&self, filter: &FilterState) -> bool {
        match &self.change {
            FilterChange::Continent(value) => &filter.continent == value,
            FilterChange::Subregion(value) => &filter.subregion == value,
            FilterChange::Rank(metric) => &filter.rank == metric,
        }
    }
}

/// Central application state container.
///
/// Mutated only by [`handle_event`](super::handle_event). View models are
/// computed on demand from a snapshot.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dataset lifecycle; owns the pipeline session once loaded.
    pub load: LoadState,

    /// Zero-based cursor within the displayed countries.
    ///
    /// Reset to the top whenever the displayed list is recomputed.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Type-ahead query of the open picker.
    pub picker_query: String,

    /// Cursor within the picker options matching `picker_query`.
    pub picker_index: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Continent options offered by the continent picker.
    pub scheme: ContinentScheme,

    /// Dataset endpoint.
    pub endpoint: String,

    /// Host command used to open map links.
    pub opener: String,

    /// Whether a dataset request is outstanding.
    pub fetch_pending: bool,

    /// Whether the user granted the web access permission.
    pub web_access_granted: bool,

    /// When the current dataset arrived.
    pub loaded_at: Option<DateTime<Utc>>,

    /// Records refused while parsing the current dataset.
    pub rejected: usize,
}

impl AppState {
    /// Creates a state waiting for permissions, with default endpoint and opener.
    #[must_use]
    pub fn new(theme: Theme, scheme: ContinentScheme) -> Self {
        Self {
            load: LoadState::Loading,
            selected_index: 0,
            input_mode: InputMode::Browse,
            picker_query: String::new(),
            picker_index: 0,
            theme,
            scheme,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            opener: DEFAULT_OPENER.to_string(),
            fetch_pending: false,
            web_access_granted: false,
            loaded_at: None,
            rejected: 0,
        }
    }

    /// Countries currently displayed, empty until the dataset loads.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        self.load.explorer().map(Explorer::countries).unwrap_or_default()
    }

    /// Subregion options for the subregion picker, empty until the dataset loads.
    #[must_use]
    pub fn subregion_options(&self) -> &[String] {
        self.load.explorer().map(Explorer::subregions).unwrap_or_default()
    }

    /// Returns the country under the cursor, if any.
    #[must_use]
    pub fn selected_country(&self) -> Option<&Country> {
        self.countries().get(self.selected_index)
    }

    /// Moves the cursor down by one, wrapping to the top.
    ///
    /// Moves within the picker options while a picker is open.
    pub fn move_selection_down(&mut self) {
        let len = self.cursor_len();
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut();
        *cursor = (*cursor + 1) % len;
    }

    /// Moves the cursor up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.cursor_len();
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut();
        *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
    }

    fn cursor_len(&self) -> usize {
        match self.input_mode {
            InputMode::Browse => self.countries().len(),
            InputMode::Picker(kind) => self.matching_options(kind).len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.input_mode {
            InputMode::Browse => &mut self.selected_index,
            InputMode::Picker(_) => &mut self.picker_index,
        }
    }

    /// Every option of a picker, in display order.
    #[must_use]
    pub fn picker_options(&self, kind: PickerKind) -> Vec<PickerOption> {
        match kind {
            PickerKind::Continent => std::iter::once(PickerOption::new(
                "All Continents",
                FilterChange::Continent(None),
            ))
            .chain(self.scheme.options().iter().map(|option| {
                PickerOption::new(option.label, FilterChange::Continent(Some(option.label.to_string())))
            }))
            .collect(),
            PickerKind::Subregion => std::iter::once(PickerOption::new(
                "All Subregions",
                FilterChange::Subregion(None),
            ))
            .chain(self.subregion_options().iter().map(|subregion| {
                PickerOption::new(subregion.as_str(), FilterChange::Subregion(Some(subregion.clone())))
            }))
            .collect(),
            PickerKind::Rank => vec![
                PickerOption::new("Top 10 (off)", FilterChange::Rank(None)),
                PickerOption::new("By Population", FilterChange::Rank(Some(RankMetric::Population))),
                PickerOption::new("By Area", FilterChange::Rank(Some(RankMetric::Area))),
            ],
        }
    }

    /// Options matching the picker query, with character ranges to highlight.
    ///
    /// Options keep their display order; an empty query matches everything.
    #[must_use]
    pub fn matching_options(&self, kind: PickerKind) -> Vec<(PickerOption, Vec<(usize, usize)>)> {
        let options = self.picker_options(kind);
        let query = self.picker_query.trim();
        if query.is_empty() {
            return options.into_iter().map(|option| (option, vec![])).collect();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        options
            .into_iter()
            .filter_map(|option| {
                let (_score, indices) = matcher.fuzzy_indices(&option.label, query)?;
                Some((option, coalesce_ranges(&indices)))
            })
            .collect()
    }

    /// Filter edit under the picker cursor, if the open picker has any match.
    #[must_use]
    pub fn picker_selection(&self) -> Option<FilterChange> {
        let InputMode::Picker(kind) = self.input_mode else {
            return None;
        };
        self.matching_options(kind)
            .into_iter()
            .nth(self.picker_index)
            .map(|(option, _)| option.change)
    }

    /// Opens a picker with the cursor on the currently applied option.
    pub fn open_picker(&mut self, kind: PickerKind) {
        self.input_mode = InputMode::Picker(kind);
        self.picker_query.clear();
        self.picker_index = self.load.explorer().map_or(0, |explorer| {
            self.picker_options(kind)
                .iter()
                .position(|option| option.is_current(explorer.filter()))
                .unwrap_or(0)
        });
    }

    /// Closes the picker and returns to browsing.
    pub fn close_picker(&mut self) {
        self.input_mode = InputMode::Browse;
        self.picker_query.clear();
        self.picker_index = 0;
    }

    /// Whether a manual retry may start a new fetch.
    #[must_use]
    pub const fn can_retry(&self) -> bool {
        matches!(self.load, LoadState::Failed(_)) && self.web_access_granted && !self.fetch_pending
    }

    /// Marks a fetch as outstanding and returns the action issuing it.
    ///
    /// Returns `None` if a request is already outstanding.
    pub fn begin_fetch(&mut self) -> Option<Action> {
        if self.fetch_pending {
            return None;
        }
        self.fetch_pending = true;
        self.load = LoadState::Loading;
        Some(Action::FetchDataset { url: self.endpoint.clone() })
    }

    /// Installs a freshly loaded dataset and starts a new pipeline session.
    pub fn finish_load(&mut self, countries: Vec<Country>, rejected: usize) {
        self.fetch_pending = false;
        self.load = LoadState::Loaded(Explorer::new(countries, self.scheme));
        self.loaded_at = Some(Utc::now());
        self.rejected = rejected;
        self.selected_index = 0;
        self.close_picker();
    }

    /// Records a failed load.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.fetch_pending = false;
        self.load = LoadState::Failed(message.into());
        self.close_picker();
    }

    /// Computes a renderable view model for a pane of `rows` × `cols` cells.
    ///
    /// The card list is windowed around the cursor: the cursor sits mid-window
    /// until the list end is reached. The detail card is only included when the
    /// pane leaves room for at least a few card rows beneath it.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let mut viewmodel = UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            cards: vec![],
            selected_index: 0,
            detail: None,
            picker: None,
            status: None,
        };

        let explorer = match &self.load {
            LoadState::Loading => {
                viewmodel.status = Some(self.loading_status());
                return viewmodel;
            }
            LoadState::Failed(message) => {
                viewmodel.status = Some(self.failure_status(message));
                return viewmodel;
            }
            LoadState::Loaded(explorer) => explorer,
        };

        if let InputMode::Picker(kind) = self.input_mode {
            viewmodel.picker = Some(self.compute_picker(kind, explorer.filter(), rows));
            return viewmodel;
        }

        let countries = explorer.countries();
        if countries.is_empty() {
            viewmodel.status = Some(StatusInfo {
                message: "No countries match".to_string(),
                subtitle: "Press x to reset filters".to_string(),
                tone: StatusTone::Info,
            });
            return viewmodel;
        }

        let mut available_rows = rows.saturating_sub(BROWSE_CHROME_ROWS);
        if available_rows >= DETAIL_ROWS + MIN_CARD_ROWS {
            available_rows -= DETAIL_ROWS;
            viewmodel.detail = self.selected_country().map(compute_detail);
        }

        let (start, end) = visible_window(self.selected_index, countries.len(), available_rows);
        viewmodel.cards = countries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, country)| compute_card(country, start + offset == self.selected_index))
            .collect();
        viewmodel.selected_index = self.selected_index.saturating_sub(start);

        viewmodel
    }

    fn compute_picker(&self, kind: PickerKind, filter: &FilterState, rows: usize) -> PickerInfo {
        let matching = self.matching_options(kind);
        let available_rows = rows.saturating_sub(PICKER_CHROME_ROWS).max(1);
        let (start, end) = visible_window(self.picker_index, matching.len(), available_rows);

        let items = matching[start..end]
            .iter()
            .enumerate()
            .map(|(offset, (option, ranges))| PickerItem {
                label: option.label.clone(),
                is_selected: start + offset == self.picker_index,
                is_current: option.is_current(filter),
                highlight_ranges: ranges.clone(),
            })
            .collect();

        PickerInfo {
            title: kind.title().to_string(),
            query: self.picker_query.clone(),
            items,
            match_count: matching.len(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let Some(explorer) = self.load.explorer() else {
            return HeaderInfo {
                title: " Country Explorer ".to_string(),
                badges: vec![],
                details: String::new(),
            };
        };

        let filter = explorer.filter();
        let mut badges = Vec::new();
        if let Some(continent) = &filter.continent {
            badges.push(format!("Continent: {continent}"));
        }
        if let Some(subregion) = &filter.subregion {
            badges.push(format!("Subregion: {subregion}"));
        }
        if let Some(metric) = filter.rank {
            badges.push(format!("Top 10 by {metric}"));
        }
        if explorer.is_alphabetical() {
            badges.push("A→Z".to_string());
        }

        let mut details = self.loaded_at.map_or_else(String::new, |at| {
            format!("loaded {}", format_age((Utc::now() - at).num_seconds()))
        });
        if self.rejected > 0 {
            if !details.is_empty() {
                details.push_str(" · ");
            }
            details.push_str(&format!("{} skipped", self.rejected));
        }

        HeaderInfo {
            title: format!(
                " Country Explorer ({} of {}) ",
                explorer.countries().len(),
                explorer.dataset().len()
            ),
            badges,
            details,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.load, self.input_mode) {
            (LoadState::Loaded(_), InputMode::Picker(_)) => {
                "Type to filter  Ctrl+n/p: navigate  Enter: choose  Esc: cancel"
            }
            (LoadState::Loaded(_), InputMode::Browse) => {
                "j/k: navigate  c: continent  s: subregion  t: top 10  a: A→Z  x: reset  Enter: map  q: quit"
            }
            (LoadState::Failed(_), _) if self.can_retry() => "r: retry  q: quit",
            _ => "q: quit",
        };

        FooterInfo { keybindings: keybindings.to_string() }
    }

    fn loading_status(&self) -> StatusInfo {
        let subtitle = if self.fetch_pending {
            url::Url::parse(&self.endpoint)
                .ok()
                .and_then(|url| url.host_str().map(|host| format!("Fetching from {host}")))
                .unwrap_or_else(|| format!("Fetching from {}", self.endpoint))
        } else {
            "Waiting for web access permission".to_string()
        };

        StatusInfo {
            message: "Loading countries…".to_string(),
            subtitle,
            tone: StatusTone::Info,
        }
    }

    fn failure_status(&self, message: &str) -> StatusInfo {
        let subtitle = if self.can_retry() {
            "Press r to retry"
        } else {
            "Grant web access and reopen the plugin"
        };

        StatusInfo {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
            tone: StatusTone::Error,
        }
    }
}

/// Window `[start, end)` of `len` items showing `selected`, at most `available` long.
fn visible_window(selected: usize, len: usize, available: usize) -> (usize, usize) {
    let mut start = selected.saturating_sub(available / 2);
    let end = (start + available).min(len);

    if end - start.min(end) < available && len >= available {
        start = end.saturating_sub(available);
    }

    (start.min(end), end)
}

/// Coalesces sorted character indices into `(start, end)` runs, end exclusive.
fn coalesce_ranges(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

fn compute_card(country: &Country, is_selected: bool) -> CardRow {
    CardRow {
        name: country.common_name().to_string(),
        capital: country.capital_display().to_string(),
        population: group_digits(country.population),
        area: format_area(country.area),
        continent: country.continent_display().to_string(),
        subregion: country.subregion_display().to_string(),
        is_selected,
    }
}

fn compute_detail(country: &Country) -> DetailCard {
    DetailCard {
        name: country.common_name().to_string(),
        flag_url: country.flags.png.clone(),
        capital: country.capital_display().to_string(),
        population: group_digits(country.population),
        area: format_area(country.area),
        continent: country.continent_display().to_string(),
        subregion: country.subregion_display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default(), ContinentScheme::Combined);
        state.fetch_pending = true;
        state.finish_load(
            vec![
                Country::new("Chad", &["Africa"], 17_000_000, 1_284_000.0, Some("Middle Africa")),
                Country::new("Togo", &["Africa"], 8_000_000, 56_785.0, Some("Western Africa")),
                Country::new("Peru", &["South America"], 33_000_000, 1_285_216.0, Some("South America")),
            ],
            0,
        );
        state
    }

    #[test]
    fn before_load_shows_loading_and_no_subregions() {
        let state = AppState::new(Theme::default(), ContinentScheme::Combined);
        assert!(state.subregion_options().is_empty());

        let vm = state.compute_viewmodel(24, 80);
        let status = vm.status.unwrap();
        assert_eq!(status.message, "Loading countries…");
        assert_eq!(status.tone, StatusTone::Info);
        assert!(vm.cards.is_empty());
    }

    #[test]
    fn loading_status_names_endpoint_host() {
        let mut state = AppState::new(Theme::default(), ContinentScheme::Combined);
        assert!(state.begin_fetch().is_some());
        assert!(state.begin_fetch().is_none());

        let status = state.compute_viewmodel(24, 80).status.unwrap();
        assert_eq!(status.subtitle, "Fetching from restcountries.com");
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = loaded_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn continent_picker_lists_scheme_options() {
        let state = loaded_state();
        let labels: Vec<String> = state
            .picker_options(PickerKind::Continent)
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, ["All Continents", "Asia", "Africa", "Europe", "Oceania", "Americas"]);
    }

    #[test]
    fn picker_query_narrows_and_highlights() {
        let mut state = loaded_state();
        state.open_picker(PickerKind::Subregion);
        state.picker_query = "west".to_string();

        let matching = state.matching_options(PickerKind::Subregion);
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].0.label, "Western Africa");
        assert_eq!(matching[0].1, vec![(0, 4)]);
        assert_eq!(
            state.picker_selection(),
            Some(FilterChange::Subregion(Some("Western Africa".to_string())))
        );
    }

    #[test]
    fn picker_opens_on_current_value() {
        let mut state = loaded_state();
        if let LoadState::Loaded(explorer) = &mut state.load {
            explorer.apply(FilterChange::Rank(Some(RankMetric::Area)));
        }
        state.open_picker(PickerKind::Rank);
        assert_eq!(state.picker_index, 2);

        let picker = state.compute_viewmodel(24, 80).picker.unwrap();
        assert!(picker.items[2].is_current);
        assert!(picker.items[2].is_selected);
    }

    #[test]
    fn header_counts_and_badges() {
        let mut state = loaded_state();
        state.rejected = 2;
        if let LoadState::Loaded(explorer) = &mut state.load {
            explorer.apply(FilterChange::Continent(Some("Africa".to_string())));
            explorer.apply(FilterChange::Rank(Some(RankMetric::Population)));
        }

        let header = state.compute_viewmodel(24, 80).header;
        assert_eq!(header.title, " Country Explorer (2 of 3) ");
        assert_eq!(header.badges, ["Continent: Africa", "Top 10 by population"]);
        assert_eq!(header.details, "loaded just now · 2 skipped");
    }

    #[test]
    fn empty_result_shows_reset_hint() {
        let mut state = loaded_state();
        if let LoadState::Loaded(explorer) = &mut state.load {
            explorer.apply(FilterChange::Continent(Some("Oceania".to_string())));
        }

        let status = state.compute_viewmodel(24, 80).status.unwrap();
        assert_eq!(status.message, "No countries match");
    }

    #[test]
    fn detail_card_only_when_tall_enough() {
        let state = loaded_state();

        let tall = state.compute_viewmodel(24, 80);
        assert_eq!(tall.detail.unwrap().flag_url, "");
        assert_eq!(tall.cards.len(), 3);
        assert_eq!(tall.cards[0].population, "17,000,000");

        let short = state.compute_viewmodel(10, 80);
        assert!(short.detail.is_none());
        assert_eq!(short.cards.len(), 3);
    }

    #[test]
    fn window_follows_cursor() {
        assert_eq!(visible_window(0, 10, 4), (0, 4));
        assert_eq!(visible_window(5, 10, 4), (3, 7));
        assert_eq!(visible_window(9, 10, 4), (6, 10));
        assert_eq!(visible_window(1, 2, 4), (0, 2));
        assert_eq!(visible_window(0, 0, 4), (0, 0));
    }

    #[test]
    fn ranges_coalesce_runs() {
        assert_eq!(coalesce_ranges(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce_ranges(&[]).is_empty());
    }
}
