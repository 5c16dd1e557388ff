//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain pipeline:
//!
//! ```text
//! Key / host event → Event → handle_event → AppState mutation → Actions
//!                                                  │                │
//!                                          compute_viewmodel   web_request,
//!                                                  ↓           run_command
//!                                              renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode and dataset lifecycle types
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, LoadState, PickerKind};
pub use state::{AppState, PickerOption};
