//! Fuzzy resolution of free-text queries to reference codes.
//!
//! The crate is layered leaf-first:
//!
//! - [`score`]: similarity ratio of two strings, based on matching blocks
//! - [`search`]: ranks every entry of a [`CodeMapping`] against a query
//! - [`CodeResolver`]: numeric and exact-name short-circuits, then the best
//!   fuzzy candidate
//!
//! # Example
//!
//! ```
//! use trade_match::{Resolution, resolve};
//! use trade_model::{Code, CodeMapping, ItemKind};
//!
//! let countries = CodeMapping::from_entries([
//!     (Code::new(36), "Australia"),
//!     (Code::new(40), "Austria"),
//! ])
//! .unwrap();
//!
//! let resolution = resolve("austra", &countries, ItemKind::Country);
//! assert_eq!(resolution.code(), Some(Code::new(40)));
//! assert_eq!(resolution.candidates().len(), 2);
//! ```
//!
//! [`CodeMapping`]: trade_model::CodeMapping

#![deny(unsafe_code)]

mod options;
mod resolve;
mod search;
mod similarity;

pub use options::{
    DEFAULT_MAX_RESULTS, DEFAULT_PARTIAL_MATCH_SCORE, MatchThresholds, SearchOptions,
};
pub use resolve::{CodeResolver, Resolution, resolve};
pub use search::search;
pub use similarity::score;
