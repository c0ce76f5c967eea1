//! Reference-data loading for trade extraction.
//!
//! Two reference tables label trade records and resolve user queries:
//!
//! - **Countries**: a CSV table keyed by UN M49 code (`countries_codes.csv`)
//! - **Products**: the HS classification as JSON (`H5.json`)
//!
//! Malformed entries are skipped while loading, so the mappings handed to
//! the resolver only contain valid codes with non-blank names.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use trade_ingest::ReferenceData;
//!
//! let reference = ReferenceData::load(Path::new("data"));
//! println!("{} countries", reference.countries.len());
//! ```

mod code;
mod countries;
mod error;
mod products;
mod reference;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loaders ===
pub use countries::{COUNTRY_NAME_COLUMN, M49_CODE_COLUMN, load_country_codes};
pub use products::{TOTAL_ID, load_hs_codes};

// === Reference Data ===
pub use reference::{COUNTRY_CODES_FILE, HS_CODES_FILE, ReferenceData, default_mapping};
