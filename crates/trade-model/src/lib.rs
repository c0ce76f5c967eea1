//! Data model shared by the trade extraction crates.

pub mod candidate;
pub mod code;
pub mod columns;
pub mod error;
pub mod mapping;
pub mod record;

pub use candidate::MatchCandidate;
pub use code::{Code, ItemKind};
pub use columns::{
    DISPLAY_COLUMNS, EXPORT_COLUMNS, NO_DESCRIPTION, column_description,
};
pub use error::{ModelError, Result};
pub use mapping::CodeMapping;
pub use record::{ExtractedRow, TradeRecord};
