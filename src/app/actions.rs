//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls Zellij itself. It returns a `Vec<Action>`
//! after each event and the plugin shim (`main.rs`) turns every action into
//! the matching host call, keeping the reducer pure and testable.
//!
//! # Example
//!
//! ```rust
//! use zatlas::Action;
//!
//! let actions = vec![Action::FetchDataset {
//!     url: zatlas::infrastructure::DEFAULT_ENDPOINT.to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the one outstanding dataset request via `web_request`.
    FetchDataset {
        /// Endpoint to `GET`.
        url: String,
    },

    /// Opens a map search for a country on the host.
    ///
    /// Fire-and-forget: the opener's exit status is only logged.
    OpenMap {
        /// Map search link.
        url: String,
        /// Host command receiving the link as its single argument.
        opener: String,
    },
}
