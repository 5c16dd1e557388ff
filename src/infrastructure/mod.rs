//! Infrastructure layer for host interactions.
//!
//! Everything that touches the world outside the plugin lives here: the
//! dataset endpoint and its response decoding, map links handed to the host
//! opener, and sandbox path handling.

pub mod dataset;
pub mod maps;
pub mod paths;

pub use dataset::{
    interpret_response, Dataset, DEFAULT_ENDPOINT, REQUEST_CONTEXT_DATASET, REQUEST_CONTEXT_KEY,
};
pub use maps::{map_search_url, DEFAULT_OPENER, REQUEST_CONTEXT_OPENER};
pub use paths::{expand_tilde, get_data_dir};
