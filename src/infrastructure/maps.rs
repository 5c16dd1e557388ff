//! External map search links.
//!
//! Choosing a country opens a map search for its common name in the user's
//! browser. The plugin has no browser of its own, so the link is handed to a
//! configurable opener command (`xdg-open` by default) through Zellij's
//! `run_command`; the result is never awaited by the explorer.

use url::Url;

/// Base URL of the map search.
pub const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Default command used to open links on the host.
pub const DEFAULT_OPENER: &str = "xdg-open";

/// Context value tagging opener commands, under the dataset request's context key.
pub const REQUEST_CONTEXT_OPENER: &str = "opener";

/// Builds the map search link for a country name.
///
/// The name is form-urlencoded into the `query` parameter.
///
/// # Examples
///
/// ```
/// use zatlas::infrastructure::maps::map_search_url;
///
/// assert_eq!(
///     map_search_url("Côte d'Ivoire"),
///     "https://www.google.com/maps/search/?api=1&query=C%C3%B4te+d%27Ivoire"
/// );
/// ```
#[must_use]
pub fn map_search_url(name: &str) -> String {
    match Url::parse_with_params(MAP_SEARCH_BASE, &[("api", "1"), ("query", name)]) {
        Ok(url) => url.into(),
        Err(e) => {
            // Only reachable if MAP_SEARCH_BASE itself stops parsing.
            tracing::warn!(error = %e, "failed to build map search url");
            MAP_SEARCH_BASE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_is_appended_as_query() {
        assert_eq!(
            map_search_url("Chad"),
            "https://www.google.com/maps/search/?api=1&query=Chad"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let url = map_search_url("Bosnia & Herzegovina");
        assert!(url.ends_with("query=Bosnia+%26+Herzegovina"));
    }
}
