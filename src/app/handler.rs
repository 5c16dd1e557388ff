//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single reducer of the plugin. It receives events
//! translated from Zellij input and host callbacks, mutates [`AppState`], and
//! returns whether a re-render is needed plus the side effects to run.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Pickers**: `OpenPicker`, `Char`, `Backspace`, `ConfirmPicker`, `CancelPicker`
//! - **Pipeline**: `ToggleSort`, `ResetFilters`
//! - **Commands**: `OpenSelected`, `Retry`, `CloseFocus`
//! - **Host**: `PermissionsGranted`, `PermissionsDenied`, `DatasetLoaded`,
//!   `DatasetFailed`, `OpenerFinished`
//!
//! # Example
//!
//! ```rust
//! use zatlas::app::{handle_event, Action, AppState, Event};
//! use zatlas::ui::Theme;
//! use zatlas::ContinentScheme;
//!
//! let mut state = AppState::new(Theme::default(), ContinentScheme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions[0], Action::FetchDataset { .. }));
//! # Ok::<(), zatlas::AtlasError>(())
//! ```

use super::modes::{InputMode, PickerKind};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Country;
use crate::infrastructure::map_search_url;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the cursor down by one position (wraps to top).
    KeyDown,
    /// Moves the cursor up by one position (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Opens the picker standing in for one selector.
    OpenPicker(PickerKind),
    /// Appends a character to the picker query.
    Char(char),
    /// Removes the last character from the picker query.
    Backspace,
    /// Applies the option under the picker cursor.
    ConfirmPicker,
    /// Closes the picker without changing the filter.
    CancelPicker,

    /// Toggles alphabetical order of the displayed countries.
    ToggleSort,
    /// Clears every filter and the sort toggle.
    ResetFilters,
    /// Opens a map search for the selected country.
    OpenSelected,
    /// Re-issues the dataset request after a failure.
    Retry,

    /// The user granted web access.
    PermissionsGranted,
    /// The user refused web access; the dataset can never load.
    PermissionsDenied,

    /// The dataset request succeeded.
    DatasetLoaded {
        /// Validated countries in payload order.
        countries: Vec<Country>,
        /// Records refused during validation.
        rejected: usize,
    },

    /// The dataset request failed.
    DatasetFailed {
        /// Human-readable failure, shown full-screen.
        message: String,
    },

    /// The map opener command exited.
    OpenerFinished {
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl Event {
    /// Short variant name for spans, without payloads.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::KeyDown => "KeyDown",
            Self::KeyUp => "KeyUp",
            Self::CloseFocus => "CloseFocus",
            Self::OpenPicker(_) => "OpenPicker",
            Self::Char(_) => "Char",
            Self::Backspace => "Backspace",
            Self::ConfirmPicker => "ConfirmPicker",
            Self::CancelPicker => "CancelPicker",
            Self::ToggleSort => "ToggleSort",
            Self::ResetFilters => "ResetFilters",
            Self::OpenSelected => "OpenSelected",
            Self::Retry => "Retry",
            Self::PermissionsGranted => "PermissionsGranted",
            Self::PermissionsDenied => "PermissionsDenied",
            Self::DatasetLoaded { .. } => "DatasetLoaded",
            Self::DatasetFailed { .. } => "DatasetFailed",
            Self::OpenerFinished { .. } => "OpenerFinished",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. Events that do not apply in the current
/// state (e.g. opening a picker before the dataset loads) are ignored and
/// request no render.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the plugin shim's error path in
/// one place.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::OpenPicker(kind) => {
            if state.load.explorer().is_none() {
                tracing::debug!(picker = ?kind, "dataset not loaded, ignoring picker");
                return Ok((false, vec![]));
            }
            state.open_picker(*kind);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Picker(_)) {
                return Ok((false, vec![]));
            }
            state.picker_query.push(*c);
            state.picker_index = 0;
            tracing::trace!(query = %state.picker_query, "picker query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Picker(_)) {
                return Ok((false, vec![]));
            }
            state.picker_query.pop();
            state.picker_index = 0;
            Ok((true, vec![]))
        }
        Event::ConfirmPicker => {
            let Some(change) = state.picker_selection() else {
                tracing::debug!(query = %state.picker_query, "no picker option to confirm");
                return Ok((false, vec![]));
            };
            let Some(explorer) = state.load.explorer_mut() else {
                return Ok((false, vec![]));
            };

            tracing::debug!(change = ?change, "applying filter change");
            explorer.apply(change);
            state.close_picker();
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::CancelPicker => {
            if !matches!(state.input_mode, InputMode::Picker(_)) {
                return Ok((false, vec![]));
            }
            state.close_picker();
            Ok((true, vec![]))
        }
        Event::ToggleSort => {
            let Some(explorer) = state.load.explorer_mut() else {
                return Ok((false, vec![]));
            };
            explorer.toggle_sort();
            tracing::debug!(
                alphabetical = explorer.is_alphabetical(),
                shown = explorer.countries().len(),
                "sort toggled"
            );
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::ResetFilters => {
            let Some(explorer) = state.load.explorer_mut() else {
                return Ok((false, vec![]));
            };
            explorer.reset();
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::OpenSelected => {
            let Some(country) = state.selected_country() else {
                tracing::debug!("no country selected");
                return Ok((false, vec![]));
            };

            let url = map_search_url(country.common_name());
            tracing::debug!(country = %country.common_name(), url = %url, "opening map");
            Ok((false, vec![Action::OpenMap { url, opener: state.opener.clone() }]))
        }
        Event::Retry => {
            if !state.can_retry() {
                return Ok((false, vec![]));
            }
            tracing::info!(endpoint = %state.endpoint, "retrying dataset request");
            Ok((true, state.begin_fetch().into_iter().collect()))
        }
        Event::PermissionsGranted => {
            state.web_access_granted = true;
            if state.load.explorer().is_some() || state.fetch_pending {
                return Ok((false, vec![]));
            }
            Ok((true, state.begin_fetch().into_iter().collect()))
        }
        Event::PermissionsDenied => {
            tracing::warn!("web access permission denied");
            state.web_access_granted = false;
            state.fail_load("Web access permission was denied");
            Ok((true, vec![]))
        }
        Event::DatasetLoaded { countries, rejected } => {
            if !state.fetch_pending {
                tracing::warn!("dataset arrived with no request outstanding, ignoring");
                return Ok((false, vec![]));
            }
            tracing::info!(countries = countries.len(), rejected, "dataset loaded");
            state.finish_load(countries.clone(), *rejected);
            Ok((true, vec![]))
        }
        Event::DatasetFailed { message } => {
            if !state.fetch_pending {
                tracing::warn!(message = %message, "failure arrived with no request outstanding, ignoring");
                return Ok((false, vec![]));
            }
            tracing::error!(message = %message, "dataset load failed");
            state.fail_load(message.clone());
            Ok((true, vec![]))
        }
        Event::OpenerFinished { exit_code, stderr } => {
            if *exit_code == Some(0) {
                tracing::debug!("map opener finished");
            } else {
                tracing::warn!(
                    opener = %state.opener,
                    exit_code = ?exit_code,
                    stderr = %stderr.trim(),
                    "map opener failed"
                );
            }
            Ok((false, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadState;
    use crate::domain::{ContinentScheme, RankMetric};
    use crate::ui::Theme;

    fn chad_and_togo() -> Vec<Country> {
        vec![
            Country::new("Chad", &["Africa"], 17_000_000, 1_284_000.0, Some("Middle Africa")),
            Country::new("Togo", &["Africa"], 8_000_000, 56_785.0, Some("Western Africa")),
            Country::new("France", &["Europe"], 68_000_000, 551_695.0, Some("Western Europe")),
        ]
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn loaded() -> AppState {
        let mut state = AppState::new(Theme::default(), ContinentScheme::Combined);
        send(&mut state, Event::PermissionsGranted);
        send(&mut state, Event::DatasetLoaded { countries: chad_and_togo(), rejected: 0 });
        state
    }

    fn shown(state: &AppState) -> Vec<&str> {
        state.countries().iter().map(Country::common_name).collect()
    }

    fn pick(state: &mut AppState, kind: PickerKind, query: &str) {
        send(state, Event::OpenPicker(kind));
        for c in query.chars() {
            send(state, Event::Char(c));
        }
        send(state, Event::ConfirmPicker);
    }

    #[test]
    fn permission_grant_issues_one_fetch() {
        let mut state = AppState::new(Theme::default(), ContinentScheme::Combined);
        let (render, actions) = send(&mut state, Event::PermissionsGranted);
        assert!(render);
        assert_eq!(actions.len(), 1);
        assert!(state.fetch_pending);

        let (_, again) = send(&mut state, Event::PermissionsGranted);
        assert!(again.is_empty());
    }

    #[test]
    fn pickers_refused_before_load() {
        let mut state = AppState::new(Theme::default(), ContinentScheme::Combined);
        let (render, _) = send(&mut state, Event::OpenPicker(PickerKind::Subregion));
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.subregion_options().is_empty());
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut state = AppState::new(Theme::default(), ContinentScheme::Combined);
        let (render, _) = send(&mut state, Event::DatasetLoaded { countries: chad_and_togo(), rejected: 0 });
        assert!(!render);
        assert_eq!(state.load, LoadState::Loading);
    }

    #[test]
    fn continent_then_rank_via_pickers() {
        let mut state = loaded();
        pick(&mut state, PickerKind::Continent, "afr");
        assert_eq!(shown(&state), ["Chad", "Togo"]);

        pick(&mut state, PickerKind::Rank, "pop");
        assert_eq!(shown(&state), ["Chad", "Togo"]);
        let filter = state.load.explorer().unwrap().filter();
        assert_eq!(filter.rank, Some(RankMetric::Population));
        assert_eq!(state.input_mode, InputMode::Browse);
    }

    #[test]
    fn subregion_pick_clears_continent() {
        let mut state = loaded();
        pick(&mut state, PickerKind::Continent, "eur");
        pick(&mut state, PickerKind::Subregion, "western af");

        let filter = state.load.explorer().unwrap().filter();
        assert_eq!(filter.continent, None);
        assert_eq!(filter.subregion.as_deref(), Some("Western Africa"));
        assert_eq!(shown(&state), ["Togo"]);
    }

    #[test]
    fn confirm_with_no_match_keeps_picker_open() {
        let mut state = loaded();
        send(&mut state, Event::OpenPicker(PickerKind::Rank));
        send(&mut state, Event::Char('z'));
        let (render, _) = send(&mut state, Event::ConfirmPicker);
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Picker(PickerKind::Rank));

        send(&mut state, Event::CancelPicker);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.picker_query.is_empty());
    }

    #[test]
    fn sort_toggle_twice_shows_whole_dataset() {
        let mut state = loaded();
        pick(&mut state, PickerKind::Continent, "afr");

        send(&mut state, Event::ToggleSort);
        assert_eq!(shown(&state), ["Chad", "Togo"]);
        send(&mut state, Event::ToggleSort);
        assert_eq!(shown(&state), ["Chad", "Togo", "France"]);
    }

    #[test]
    fn reset_restores_dataset_and_cursor() {
        let mut state = loaded();
        pick(&mut state, PickerKind::Continent, "eur");
        send(&mut state, Event::ResetFilters);
        assert_eq!(shown(&state), ["Chad", "Togo", "France"]);
        assert_eq!(state.selected_index, 0);
        assert!(state.load.explorer().unwrap().filter().is_empty());
    }

    #[test]
    fn open_selected_builds_map_action() {
        let mut state = loaded();
        send(&mut state, Event::KeyDown);
        let (_, actions) = send(&mut state, Event::OpenSelected);
        assert_eq!(
            actions,
            vec![Action::OpenMap {
                url: "https://www.google.com/maps/search/?api=1&query=Togo".to_string(),
                opener: "xdg-open".to_string(),
            }]
        );
    }

    #[test]
    fn failure_then_retry() {
        let mut state = AppState::new(Theme::default(), ContinentScheme::Combined);
        send(&mut state, Event::PermissionsGranted);
        send(&mut state, Event::DatasetFailed { message: "Dataset request failed with HTTP status 503".into() });
        assert!(matches!(state.load, LoadState::Failed(_)));
        assert!(!state.fetch_pending);

        let (_, actions) = send(&mut state, Event::Retry);
        assert_eq!(actions.len(), 1);
        assert_eq!(state.load, LoadState::Loading);

        let (_, none) = send(&mut state, Event::Retry);
        assert!(none.is_empty());
    }

    #[test]
    fn denied_permission_cannot_retry() {
        let mut state = AppState::new(Theme::default(), ContinentScheme::Combined);
        send(&mut state, Event::PermissionsDenied);
        assert!(matches!(state.load, LoadState::Failed(_)));
        let (_, actions) = send(&mut state, Event::Retry);
        assert!(actions.is_empty());
    }
}
