//! Filter selection value types.
//!
//! [`FilterState`] is immutable from the pipeline's point of view: every
//! [`FilterChange`] produces a fresh state through [`FilterState::with`], which
//! also enforces that continent and subregion are never both selected.

use crate::domain::error::AtlasError;
use crate::domain::Country;
use std::fmt;
use std::str::FromStr;

/// Maximum number of countries kept when a rank metric is active.
pub const TOP_N: usize = 10;

/// Numeric field used for the top-10 ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMetric {
    Population,
    Area,
}

impl RankMetric {
    /// Value of this metric for `country`, as a float for uniform ordering.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(self, country: &Country) -> f64 {
        match self {
            Self::Population => country.population as f64,
            Self::Area => country.area,
        }
    }

    /// Stable identifier, also accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::Area => "area",
        }
    }
}

impl fmt::Display for RankMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankMetric {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "population" => Ok(Self::Population),
            "area" => Ok(Self::Area),
            other => Err(AtlasError::Config(format!("unknown rank metric '{other}'"))),
        }
    }
}

/// Current continent/subregion/rank selection.
///
/// `None` means "no selection" for every field. At most one of `continent` and
/// `subregion` is `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub continent: Option<String>,
    pub subregion: Option<String>,
    pub rank: Option<RankMetric>,
}

/// A single user edit of one filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Continent(Option<String>),
    Subregion(Option<String>),
    Rank(Option<RankMetric>),
}

impl FilterChange {
    /// Builds a change from a textual field name and value.
    ///
    /// An empty `value` means "no selection".
    ///
    /// # Errors
    ///
    /// Returns [`AtlasError::Config`] for an unknown field or rank metric.
    ///
    /// # Examples
    ///
    /// ```
    /// use zatlas::{FilterChange, RankMetric};
    ///
    /// let change = FilterChange::parse("rankMetric", "area")?;
    /// assert_eq!(change, FilterChange::Rank(Some(RankMetric::Area)));
    /// assert_eq!(FilterChange::parse("continent", "")?, FilterChange::Continent(None));
    /// # Ok::<(), zatlas::AtlasError>(())
    /// ```
    pub fn parse(field: &str, value: &str) -> Result<Self, AtlasError> {
        let selection = (!value.is_empty()).then(|| value.to_string());
        match field {
            "continent" => Ok(Self::Continent(selection)),
            "subregion" => Ok(Self::Subregion(selection)),
            "rank" | "rankMetric" | "top10" => selection
                .map(|v| v.parse::<RankMetric>())
                .transpose()
                .map(Self::Rank),
            other => Err(AtlasError::Config(format!("unknown filter field '{other}'"))),
        }
    }
}

impl FilterState {
    /// Returns the state obtained by applying `change`.
    ///
    /// Selecting a continent clears the subregion and vice versa, even when
    /// the new selection is "none".
    #[must_use]
    pub fn with(&self, change: FilterChange) -> Self {
        let mut next = self.clone();
        match change {
            FilterChange::Continent(value) => {
                next.continent = value.filter(|v| !v.is_empty());
                next.subregion = None;
            }
            FilterChange::Subregion(value) => {
                next.subregion = value.filter(|v| !v.is_empty());
                next.continent = None;
            }
            FilterChange::Rank(metric) => next.rank = metric,
        }
        next
    }

    /// Returns `true` when no field is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.continent.is_none() && self.subregion.is_none() && self.rank.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subregion_clears_continent() {
        let state = FilterState::default()
            .with(FilterChange::Continent(Some("Africa".into())))
            .with(FilterChange::Subregion(Some("Western Africa".into())));
        assert_eq!(state.continent, None);
        assert_eq!(state.subregion.as_deref(), Some("Western Africa"));
    }

    #[test]
    fn continent_clears_subregion() {
        let state = FilterState::default()
            .with(FilterChange::Subregion(Some("Caribbean".into())))
            .with(FilterChange::Continent(Some("Europe".into())));
        assert_eq!(state.subregion, None);
        assert_eq!(state.continent.as_deref(), Some("Europe"));
    }

    #[test]
    fn clearing_continent_still_clears_subregion() {
        let state = FilterState {
            subregion: Some("Polynesia".into()),
            ..FilterState::default()
        }
        .with(FilterChange::Continent(None));
        assert!(state.is_empty());
    }

    #[test]
    fn rank_change_keeps_location_filter() {
        let state = FilterState::default()
            .with(FilterChange::Continent(Some("Asia".into())))
            .with(FilterChange::Rank(Some(RankMetric::Area)));
        assert_eq!(state.continent.as_deref(), Some("Asia"));
        assert_eq!(state.rank, Some(RankMetric::Area));
    }

    #[test]
    fn empty_string_is_no_selection() {
        let state = FilterState::default().with(FilterChange::Subregion(Some(String::new())));
        assert_eq!(state.subregion, None);
    }

    #[test]
    fn parse_rejects_unknown_field() {
        assert!(FilterChange::parse("language", "French").is_err());
        assert!(FilterChange::parse("rankMetric", "gdp").is_err());
    }
}
