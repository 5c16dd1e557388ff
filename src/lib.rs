//! zatlas: a Zellij plugin for browsing the countries of the world.
//!
//! The plugin fetches the REST Countries dataset once, then lets the user
//! narrow it by continent or subregion, keep the top 10 by population or area,
//! sort it alphabetically, and open any country on a map.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, pickers, fetch bookkeeping       │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────┐             ┌───────────────────┐
//! │ UI Layer (ui/)    │             │ Infrastructure    │
//! │ - Rendering       │             │ - Dataset decode  │
//! │ - Theming         │             │ - Map links       │
//! │ - Components      │             │ - Plugin paths    │
//! └───────────────────┘             └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Country model, continent schemes                 │
//! │  - Filter / rank / sort / reset pipeline            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zatlas.wasm" {
//!         americas "split"
//!         opener "open"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. `load` parses the configuration, initializes tracing, builds the
//!    [`AppState`], and requests the `WebAccess` and `RunCommands` permissions.
//! 2. Once permissions are granted, the handler emits one
//!    [`Action::FetchDataset`]; the shim turns it into a `web_request`.
//! 3. The `WebRequestResult` is decoded by
//!    [`infrastructure::interpret_response`] and fed back as
//!    `DatasetLoaded` or `DatasetFailed`.
//! 4. Every later key press is one reducer step over the loaded [`Explorer`].
//!
//! # Example
//!
//! ```rust
//! use zatlas::{apply_filter, Country, ContinentScheme, FilterChange, FilterState};
//!
//! let dataset = vec![
//!     Country::new("Chad", &["Africa"], 17_000_000, 1_284_000.0, Some("Middle Africa")),
//!     Country::new("Peru", &["South America"], 33_000_000, 1_285_216.0, Some("South America")),
//! ];
//!
//! let outcome = apply_filter(
//!     &dataset,
//!     ContinentScheme::Combined,
//!     &FilterState::default(),
//!     FilterChange::Continent(Some("Americas".to_string())),
//! );
//! assert_eq!(outcome.countries[0].common_name(), "Peru");
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, LoadState, PickerKind};
pub use domain::{
    apply_filter, extract_subregions, reset_filters, toggle_alphabetical_sort, AtlasError,
    ContinentScheme, Country, Explorer, FilterChange, FilterOutcome, FilterState, RankMetric,
    Result, TOP_N,
};
pub use ui::Theme;

use infrastructure::{expand_tilde, DEFAULT_ENDPOINT, DEFAULT_OPENER};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/zatlas.wasm" {
///     endpoint "https://restcountries.com/v3.1/all?fields=name,flags,capital,population,area,continents,subregion"
///     americas "combined"
///     opener "xdg-open"
///     theme "catppuccin-mocha"
///     theme_file "~/.config/zatlas/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Dataset endpoint. Default: [`DEFAULT_ENDPOINT`].
    pub endpoint: String,

    /// Whether North and South America are one continent option or two.
    pub scheme: ContinentScheme,

    /// Host command receiving map links. Default: `xdg-open`.
    pub opener: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, with `~` expanded.
    pub theme_file: Option<String>,

    /// Tracing filter for OpenTelemetry spans, e.g. `debug`. Default: `info`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            scheme: ContinentScheme::default(),
            opener: DEFAULT_OPENER.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset. An unrecognised `americas` value falls
    /// back to the combined scheme.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zatlas::{Config, ContinentScheme};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("americas".to_string(), "split".to_string());
    /// map.insert("opener".to_string(), "open".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.scheme, ContinentScheme::Split);
    /// assert_eq!(config.opener, "open");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let scheme = get("americas").map_or_else(ContinentScheme::default, |value| {
            value.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid americas setting, using combined");
                ContinentScheme::default()
            })
        });

        Self {
            endpoint: get("endpoint").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            scheme,
            opener: get("opener").unwrap_or_else(|| DEFAULT_OPENER.to_string()),
            theme_name: get("theme"),
            theme_file: get("theme_file").map(|path| expand_tilde(&path)),
            trace_level: get("trace_level"),
        }
    }
}

/// Builds the initial application state from configuration.
///
/// A theme that fails to load is logged and replaced by the default theme.
///
/// # Example
///
/// ```rust
/// use zatlas::{initialize, Config, LoadState};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.load, LoadState::Loading);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, scheme = ?config.scheme, "initializing zatlas plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme, config.scheme);
    state.endpoint.clone_from(&config.endpoint);
    state.opener.clone_from(&config.opener);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.scheme, ContinentScheme::Combined);
        assert_eq!(config.opener, "xdg-open");
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[("opener", "  "), ("americas", "merged")]));
        assert_eq!(config.opener, "xdg-open");
        assert_eq!(config.scheme, ContinentScheme::Combined);
    }

    #[test]
    fn initialize_carries_endpoint_and_opener() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "http://localhost:8080/all"),
            ("opener", "open"),
            ("theme", "catppuccin-frappe"),
        ]));
        let state = initialize(&config);
        assert_eq!(state.endpoint, "http://localhost:8080/all");
        assert_eq!(state.opener, "open");
        assert_eq!(state.theme.name, "catppuccin-frappe");
    }

    #[test]
    fn missing_theme_file_falls_back_to_default() {
        let config = Config::from_zellij(&map(&[("theme_file", "/nonexistent/zatlas-theme.toml")]));
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }
}
