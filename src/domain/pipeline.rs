//! Filter/sort pipeline deriving the displayed country list.
//!
//! The free functions are pure: each takes the full dataset plus the current
//! selection and returns the next selection and list, never touching the
//! dataset itself. [`Explorer`] bundles them with the state they thread
//! through, for the application layer.
//!
//! # Pipeline
//!
//! ```text
//! full dataset ─► continent filter ─► subregion filter ─► top-10 rank ─► view
//!                                                             │
//!                              alphabetical toggle ◄──────────┘
//! ```
//!
//! Every filter change restarts from the full dataset, so filters are never
//! cumulative across calls, and cancels an active alphabetical sort.

use crate::domain::collate::compare_names;
use crate::domain::filter::{FilterChange, FilterState, TOP_N};
use crate::domain::{ContinentScheme, Country};
use std::collections::BTreeSet;

/// Result of a filter transition.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub filter: FilterState,
    pub countries: Vec<Country>,
}

/// Applies `change` on top of `current` and recomputes the list from `dataset`.
///
/// The alphabetical toggle is not an input: every filter change resets it to
/// off, which callers must mirror.
///
/// # Examples
///
/// ```
/// use zatlas::{apply_filter, ContinentScheme, Country, FilterChange, FilterState};
///
/// let dataset = vec![
///     Country::new("Chad", &["Africa"], 17_000_000, 1_284_000.0, Some("Middle Africa")),
///     Country::new("Peru", &["South America"], 33_000_000, 1_285_216.0, Some("South America")),
/// ];
/// let outcome = apply_filter(
///     &dataset,
///     ContinentScheme::Combined,
///     &FilterState::default(),
///     FilterChange::Continent(Some("Africa".into())),
/// );
/// assert_eq!(outcome.countries.len(), 1);
/// assert_eq!(outcome.countries[0].common_name(), "Chad");
/// ```
#[must_use]
pub fn apply_filter(
    dataset: &[Country],
    scheme: ContinentScheme,
    current: &FilterState,
    change: FilterChange,
) -> FilterOutcome {
    let filter = current.with(change);

    let _span = tracing::debug_span!(
        "apply_filter",
        dataset_len = dataset.len(),
        continent = ?filter.continent,
        subregion = ?filter.subregion,
        rank = ?filter.rank,
    )
    .entered();

    let mut countries: Vec<Country> = dataset
        .iter()
        .filter(|c| {
            filter
                .continent
                .as_deref()
                .map_or(true, |value| scheme.matches(value, c))
        })
        .filter(|c| {
            filter
                .subregion
                .as_deref()
                .map_or(true, |value| c.subregion() == Some(value))
        })
        .cloned()
        .collect();

    if let Some(metric) = filter.rank {
        // `sort_by` is stable, so equal values keep dataset order.
        countries.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)));
        countries.truncate(TOP_N);
    }

    tracing::debug!(filtered_count = countries.len(), "filter applied");

    FilterOutcome { filter, countries }
}

/// Toggles alphabetical order of the displayed list.
///
/// Turning the sort on orders `current` by name. Turning it off restores the
/// whole unfiltered dataset, not the list that was visible before sorting; the
/// caller's filter selection is left as it was.
///
/// Returns the new list and the new toggle value.
#[must_use]
pub fn toggle_alphabetical_sort(
    dataset: &[Country],
    current: &[Country],
    is_sorted: bool,
) -> (Vec<Country>, bool) {
    if is_sorted {
        tracing::debug!(dataset_len = dataset.len(), "alphabetical sort off, restoring full dataset");
        return (dataset.to_vec(), false);
    }

    let mut countries = current.to_vec();
    countries.sort_by(|a, b| compare_names(a.common_name(), b.common_name()));
    tracing::debug!(count = countries.len(), "alphabetical sort on");
    (countries, true)
}

/// Returns the empty selection, the full dataset, and the toggle turned off.
#[must_use]
pub fn reset_filters(dataset: &[Country]) -> (FilterState, Vec<Country>, bool) {
    (FilterState::default(), dataset.to_vec(), false)
}

/// Distinct non-empty subregions of `dataset`, sorted lexicographically.
#[must_use]
pub fn extract_subregions(dataset: &[Country]) -> Vec<String> {
    dataset
        .iter()
        .filter_map(Country::subregion)
        .map(ToString::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Pipeline session: the loaded dataset and everything derived from it.
///
/// Owned exclusively by the application state once the dataset has loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Explorer {
    dataset: Vec<Country>,
    scheme: ContinentScheme,
    filter: FilterState,
    countries: Vec<Country>,
    alphabetical: bool,
    subregions: Vec<String>,
}

impl Explorer {
    /// Starts a session showing the full dataset with no filter.
    ///
    /// Subregion options are computed here, once.
    #[must_use]
    pub fn new(dataset: Vec<Country>, scheme: ContinentScheme) -> Self {
        let subregions = extract_subregions(&dataset);
        Self {
            countries: dataset.clone(),
            dataset,
            scheme,
            filter: FilterState::default(),
            alphabetical: false,
            subregions,
        }
    }

    /// Applies a filter change.
    pub fn apply(&mut self, change: FilterChange) {
        let outcome = apply_filter(&self.dataset, self.scheme, &self.filter, change);
        self.filter = outcome.filter;
        self.countries = outcome.countries;
        self.alphabetical = false;
    }

    /// Toggles alphabetical order.
    pub fn toggle_sort(&mut self) {
        let (countries, alphabetical) =
            toggle_alphabetical_sort(&self.dataset, &self.countries, self.alphabetical);
        self.countries = countries;
        self.alphabetical = alphabetical;
    }

    /// Clears every filter and the sort toggle.
    pub fn reset(&mut self) {
        let (filter, countries, alphabetical) = reset_filters(&self.dataset);
        self.filter = filter;
        self.countries = countries;
        self.alphabetical = alphabetical;
    }

    #[must_use]
    pub fn dataset(&self) -> &[Country] {
        &self.dataset
    }

    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn is_alphabetical(&self) -> bool {
        self.alphabetical
    }

    #[must_use]
    pub fn subregions(&self) -> &[String] {
        &self.subregions
    }

    #[must_use]
    pub const fn scheme(&self) -> ContinentScheme {
        self.scheme
    }
}
