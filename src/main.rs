//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the zatlas library and the Zellij plugin
//! system: it translates Zellij events into library events, runs the reducer,
//! and turns the returned actions into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess` (dataset) and `RunCommands` (map opener)
//! 3. **Fetch**: Once granted, issue the single dataset `web_request`
//! 4. **Update**: Translate events, delegate to `handle_event`, execute actions
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key` → navigation, picker, and pipeline events (see below)
//! - `PermissionRequestResult` → `PermissionsGranted` / `PermissionsDenied`
//! - `WebRequestResult` → `DatasetLoaded` / `DatasetFailed`
//! - `RunCommandResult` → `OpenerFinished`
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Down`: Move down
//! - `Ctrl+p` / `Up`: Move up
//!
//! Browsing:
//! - `j`/`k`: Move down/up
//! - `c`/`s`/`t`: Continent, subregion, top-10 picker
//! - `a`: Toggle alphabetical sort
//! - `x`: Reset filters
//! - `Enter`: Open the selected country on a map
//! - `r`: Retry a failed load
//! - `q`: Close plugin
//!
//! In a picker:
//! - Characters: Type-ahead filter
//! - `Enter`: Choose
//! - `Esc`: Cancel

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zatlas::infrastructure::{
    interpret_response, REQUEST_CONTEXT_DATASET, REQUEST_CONTEXT_KEY, REQUEST_CONTEXT_OPENER,
};
use zatlas::{handle_event, Action, Config, Event, InputMode, PickerKind};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: zatlas::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zatlas::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Requests `WebAccess` for the dataset and `RunCommands` for the map
    /// opener. The dataset is only fetched after the permission result arrives.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zatlas::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(endpoint = %config.endpoint, opener = %config.opener, "parsed configuration");
        self.app = zatlas::initialize(&config);

        request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);
        subscribe(&[
            EventType::Key,
            EventType::PermissionRequestResult,
            EventType::WebRequestResult,
            EventType::RunCommandResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events; returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                if context.get(REQUEST_CONTEXT_KEY).map(String::as_str) != Some(REQUEST_CONTEXT_OPENER) {
                    return false;
                }
                Event::OpenerFinished {
                    exit_code,
                    stderr: String::from_utf8_lossy(&stderr).into_owned(),
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zatlas::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        match self.app.input_mode {
            InputMode::Picker(_) => Some(match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Enter => Event::ConfirmPicker,
                BareKey::Esc => Event::CancelPicker,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if key.has_no_modifiers() => Event::Char(c),
                _ => return None,
            }),
            InputMode::Browse => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('c') => Event::OpenPicker(PickerKind::Continent),
                BareKey::Char('s') => Event::OpenPicker(PickerKind::Subregion),
                BareKey::Char('t') => Event::OpenPicker(PickerKind::Rank),
                BareKey::Char('a') => Event::ToggleSort,
                BareKey::Char('x') => Event::ResetFilters,
                BareKey::Char('r') => Event::Retry,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Enter => Event::OpenSelected,
                _ => return None,
            }),
        }
    }

    /// Maps the dataset request result to a load event.
    ///
    /// Results without the dataset context tag belong to someone else and are
    /// dropped.
    fn map_web_request_result(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<Event> {
        if context.get(REQUEST_CONTEXT_KEY).map(String::as_str) != Some(REQUEST_CONTEXT_DATASET) {
            tracing::debug!(status, "ignoring web request result without dataset context");
            return None;
        }

        Some(match interpret_response(status, body) {
            Ok(dataset) => Event::DatasetLoaded {
                countries: dataset.countries,
                rejected: dataset.rejected,
            },
            Err(e) => Event::DatasetFailed { message: e.to_string() },
        })
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchDataset { url } => {
                tracing::debug!(url = %url, "requesting dataset");
                let context = BTreeMap::from([(REQUEST_CONTEXT_KEY.to_string(), REQUEST_CONTEXT_DATASET.to_string())]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
            Action::OpenMap { url, opener } => {
                tracing::debug!(url = %url, opener = %opener, "opening map");
                let context = BTreeMap::from([(REQUEST_CONTEXT_KEY.to_string(), REQUEST_CONTEXT_OPENER.to_string())]);
                run_command(&[opener.as_str(), url.as_str()], context);
            }
        }
    }
}
