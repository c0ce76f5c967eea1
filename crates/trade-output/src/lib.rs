//! Export of extracted trade data.
//!
//! An export is a CSV file of enriched rows plus a `<stem>_columns.txt`
//! file describing each column, the generation time and the record count.

#![deny(unsafe_code)]

mod csv_export;
mod error;

pub use csv_export::{
    COLUMNS_FILE_SUFFIX, ExportOutcome, columns_path_for, default_output_path,
    render_column_descriptions, write_extract,
};
pub use error::{OutputError, Result};
