//! Domain layer for the zatlas plugin.
//!
//! Holds the country model and the filter/sort pipeline, independent of
//! Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`country`]: Country record as received from the dataset
//! - [`continent`]: Configurable continent filter options
//! - [`filter`]: Filter selection value types
//! - [`collate`]: Locale-aware name ordering
//! - [`pipeline`]: Filter, rank, sort, and reset operations
//!
//! # Examples
//!
//! ```
//! use zatlas::domain::{Country, ContinentScheme, Explorer, FilterChange};
//!
//! let mut explorer = Explorer::new(
//!     vec![Country::new("Chad", &["Africa"], 17_000_000, 1_284_000.0, Some("Middle Africa"))],
//!     ContinentScheme::default(),
//! );
//! explorer.apply(FilterChange::Continent(Some("Africa".into())));
//! assert_eq!(explorer.countries().len(), 1);
//! ```

pub mod collate;
pub mod continent;
pub mod country;
pub mod error;
pub mod filter;
pub mod pipeline;

pub use continent::{ContinentOption, ContinentScheme};
pub use country::{Country, Rejection};
pub use error::{AtlasError, Result};
pub use filter::{FilterChange, FilterState, RankMetric, TOP_N};
pub use pipeline::{
    apply_filter, extract_subregions, reset_filters, toggle_alphabetical_sort, Explorer,
    FilterOutcome,
};
