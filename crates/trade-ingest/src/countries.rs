//! Country code loading from the M49 CSV table.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};
use trade_model::CodeMapping;

use crate::code::parse_code_value;
use crate::error::{IngestError, Result};

/// Column holding the UN M49 numeric code.
pub const M49_CODE_COLUMN: &str = "m49_code";
/// Column holding the English country name.
pub const COUNTRY_NAME_COLUMN: &str = "country_name_en";

/// Loads country codes from a CSV file with `m49_code` and
/// `country_name_en` columns.
///
/// Rows with a blank code or name, or a code that is not an integer, are
/// skipped.
pub fn load_country_codes(path: &Path) -> Result<CodeMapping> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::open(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let headers = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim_matches('\u{feff}').trim() == name)
            .ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })
    };
    let code_idx = column(M49_CODE_COLUMN)?;
    let name_idx = column(COUNTRY_NAME_COLUMN)?;

    let mut mapping = CodeMapping::new();
    let mut skipped = 0usize;
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let raw_code = record.get(code_idx).unwrap_or("");
        let name = record.get(name_idx).unwrap_or("").trim();
        let Some(code) = parse_code_value(raw_code) else {
            debug!(line = line + 2, code = raw_code, "skipping country row without a valid code");
            skipped += 1;
            continue;
        };
        if mapping.insert(code, name).is_err() {
            debug!(line = line + 2, %code, "skipping country row without a name");
            skipped += 1;
        }
    }

    info!(
        path = %path.display(),
        count = mapping.len(),
        skipped,
        "loaded country codes"
    );
    Ok(mapping)
}
