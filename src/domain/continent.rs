//! Continent filter options.
//!
//! The dataset lists North and South America as separate continents, while the
//! continent selector may offer them either as one "Americas" option or as two
//! options. [`ContinentScheme`] fixes that choice through configuration, and
//! every option carries an explicit list of dataset continents it matches.

use crate::domain::error::AtlasError;
use crate::domain::Country;
use std::str::FromStr;

/// A selectable continent option and the dataset continents it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinentOption {
    /// Value shown in the picker and stored in the filter state.
    pub label: &'static str,
    /// Dataset continents that satisfy this option.
    pub matches: &'static [&'static str],
}

const ASIA: ContinentOption = ContinentOption { label: "Asia", matches: &["Asia"] };
const AFRICA: ContinentOption = ContinentOption { label: "Africa", matches: &["Africa"] };
const EUROPE: ContinentOption = ContinentOption { label: "Europe", matches: &["Europe"] };
const OCEANIA: ContinentOption = ContinentOption { label: "Oceania", matches: &["Oceania"] };

const COMBINED: [ContinentOption; 5] = [
    ASIA,
    AFRICA,
    EUROPE,
    OCEANIA,
    ContinentOption {
        label: "Americas",
        matches: &["North America", "South America"],
    },
];

const SPLIT: [ContinentOption; 6] = [
    ASIA,
    AFRICA,
    EUROPE,
    OCEANIA,
    ContinentOption { label: "North America", matches: &["North America"] },
    ContinentOption { label: "South America", matches: &["South America"] },
];

/// Set of continent options offered by the continent selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContinentScheme {
    /// "Americas" is one option matching North or South America.
    #[default]
    Combined,
    /// North America and South America are separate options.
    Split,
}

impl ContinentScheme {
    /// Options in selector order.
    #[must_use]
    pub const fn options(self) -> &'static [ContinentOption] {
        match self {
            Self::Combined => &COMBINED,
            Self::Split => &SPLIT,
        }
    }

    /// Looks up an option by its label.
    #[must_use]
    pub fn option(self, label: &str) -> Option<&'static ContinentOption> {
        self.options().iter().find(|o| o.label == label)
    }

    /// Returns `true` if `country` satisfies the continent selection `value`.
    ///
    /// A value naming one of the scheme's options matches any continent in
    /// that option's list; any other value must equal one of the country's
    /// continents exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use zatlas::{ContinentScheme, Country};
    ///
    /// let peru = Country::new("Peru", &["South America"], 33_000_000, 1_285_216.0, None);
    /// assert!(ContinentScheme::Combined.matches("Americas", &peru));
    /// assert!(!ContinentScheme::Split.matches("Americas", &peru));
    /// assert!(ContinentScheme::Split.matches("South America", &peru));
    /// ```
    #[must_use]
    pub fn matches(self, value: &str, country: &Country) -> bool {
        self.option(value).map_or_else(
            || country.continents.iter().any(|c| c == value),
            |option| country.is_on_any(option.matches),
        )
    }
}

impl FromStr for ContinentScheme {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "combined" => Ok(Self::Combined),
            "split" => Ok(Self::Split),
            other => Err(AtlasError::Config(format!(
                "unknown americas scheme '{other}' (expected 'combined' or 'split')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mexico() -> Country {
        Country::new("Mexico", &["North America"], 128_000_000, 1_964_375.0, Some("North America"))
    }

    #[test]
    fn combined_scheme_offers_single_americas_option() {
        let labels: Vec<&str> = ContinentScheme::Combined.options().iter().map(|o| o.label).collect();
        assert_eq!(labels, ["Asia", "Africa", "Europe", "Oceania", "Americas"]);
    }

    #[test]
    fn split_scheme_offers_both_americas() {
        let labels: Vec<&str> = ContinentScheme::Split.options().iter().map(|o| o.label).collect();
        assert_eq!(
            labels,
            ["Asia", "Africa", "Europe", "Oceania", "North America", "South America"]
        );
    }

    #[test]
    fn unknown_value_requires_exact_continent() {
        let country = Country::new("Antarctica", &["Antarctica"], 0, 14_000_000.0, None);
        assert!(ContinentScheme::Combined.matches("Antarctica", &country));
        assert!(!ContinentScheme::Combined.matches("antarctica", &country));
    }

    #[test]
    fn americas_matches_north_america_only_when_combined() {
        assert!(ContinentScheme::Combined.matches("Americas", &mexico()));
        assert!(!ContinentScheme::Split.matches("Americas", &mexico()));
    }

    #[test]
    fn parses_scheme_names() {
        assert_eq!("Split".parse::<ContinentScheme>().unwrap(), ContinentScheme::Split);
        assert_eq!(" combined ".parse::<ContinentScheme>().unwrap(), ContinentScheme::Combined);
        assert!("both".parse::<ContinentScheme>().is_err());
    }
}
