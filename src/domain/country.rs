//! Country record as delivered by the dataset endpoint.
//!
//! The wire shape mirrors the REST Countries v3.1 payload restricted to the
//! fields the explorer requests (`name`, `flags`, `capital`, `population`,
//! `area`, `continents`, `subregion`). Records are immutable once loaded.

use serde::{Deserialize, Serialize};

/// Placeholder shown for absent optional fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Nested `name` object of a country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    /// Common display name, e.g. "Chad".
    pub common: String,
}

/// Nested `flags` object of a country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryFlags {
    /// URL of the PNG rendition of the flag.
    pub png: String,
}

/// One entry of the country dataset.
///
/// `capital` and `subregion` are optional in the payload; `continents` is
/// required and must hold at least one entry (enforced by
/// [`Country::validate`] at load time, not by deserialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    pub flags: CountryFlags,
    #[serde(default)]
    pub capital: Vec<String>,
    pub population: u64,
    pub area: f64,
    pub continents: Vec<String>,
    #[serde(default)]
    pub subregion: Option<String>,
}

/// Reason a deserialized record is refused at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The record has no `continents` entry.
    NoContinent,
    /// The common name is blank.
    BlankName,
    /// The area is negative or not a finite number.
    InvalidArea,
}

impl Country {
    /// Builds a country with the fields the pipeline cares about.
    ///
    /// The flag URL is left empty; intended for fixtures and tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use zatlas::Country;
    ///
    /// let chad = Country::new("Chad", &["Africa"], 17_000_000, 1_284_000.0, Some("Middle Africa"));
    /// assert_eq!(chad.common_name(), "Chad");
    /// assert_eq!(chad.capital_display(), "N/A");
    /// ```
    #[must_use]
    pub fn new(
        name: &str,
        continents: &[&str],
        population: u64,
        area: f64,
        subregion: Option<&str>,
    ) -> Self {
        Self {
            name: CountryName { common: name.to_string() },
            flags: CountryFlags { png: String::new() },
            capital: Vec::new(),
            population,
            area,
            continents: continents.iter().map(ToString::to_string).collect(),
            subregion: subregion.map(ToString::to_string),
        }
    }

    /// Returns the common display name.
    #[must_use]
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// Returns the subregion, treating an empty string as absent.
    #[must_use]
    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns `true` if any of the country's continents is in `names`.
    #[must_use]
    pub fn is_on_any(&self, names: &[&str]) -> bool {
        self.continents.iter().any(|c| names.contains(&c.as_str()))
    }

    /// First capital city, or `"N/A"`.
    #[must_use]
    pub fn capital_display(&self) -> &str {
        self.capital
            .first()
            .map(String::as_str)
            .filter(|c| !c.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }

    /// First listed continent, or `"N/A"`.
    ///
    /// Validated records always have one; the fallback only covers records
    /// constructed by hand.
    #[must_use]
    pub fn continent_display(&self) -> &str {
        self.continents.first().map_or(NOT_AVAILABLE, String::as_str)
    }

    /// Subregion, or `"N/A"`.
    #[must_use]
    pub fn subregion_display(&self) -> &str {
        self.subregion().unwrap_or(NOT_AVAILABLE)
    }

    /// Checks the invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] found.
    pub fn validate(&self) -> std::result::Result<(), Rejection> {
        if self.name.common.trim().is_empty() {
            return Err(Rejection::BlankName);
        }
        if self.continents.is_empty() {
            return Err(Rejection::NoContinent);
        }
        if !self.area.is_finite() || self.area < 0.0 {
            return Err(Rejection::InvalidArea);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_rest_countries_shape() {
        let json = r#"{
            "name": {"common": "Togo", "official": "Togolese Republic", "nativeName": {}},
            "flags": {"png": "https://flagcdn.com/w320/tg.png", "svg": "x", "alt": "y"},
            "capital": ["Lomé"],
            "population": 8278737,
            "area": 56785.0,
            "continents": ["Africa"],
            "subregion": "Western Africa"
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.common_name(), "Togo");
        assert_eq!(country.capital_display(), "Lomé");
        assert_eq!(country.subregion(), Some("Western Africa"));
        assert!(country.validate().is_ok());
    }

    #[test]
    fn absent_optional_fields_display_placeholders() {
        let json = r#"{
            "name": {"common": "Antarctica"},
            "flags": {"png": "https://flagcdn.com/w320/aq.png"},
            "population": 1000,
            "area": 14000000,
            "continents": ["Antarctica"]
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.capital_display(), NOT_AVAILABLE);
        assert_eq!(country.subregion_display(), NOT_AVAILABLE);
        assert_eq!(country.continent_display(), "Antarctica");
    }

    #[test]
    fn empty_subregion_counts_as_absent() {
        let country = Country::new("Nowhere", &["Europe"], 0, 0.0, Some(""));
        assert_eq!(country.subregion(), None);
        assert_eq!(country.subregion_display(), NOT_AVAILABLE);
    }

    #[test]
    fn validate_rejects_missing_continent() {
        let country = Country::new("Atlantis", &[], 0, 1.0, None);
        assert_eq!(country.validate(), Err(Rejection::NoContinent));
    }

    #[test]
    fn validate_rejects_negative_area() {
        let country = Country::new("Oddland", &["Asia"], 0, -3.0, None);
        assert_eq!(country.validate(), Err(Rejection::InvalidArea));
    }
}
