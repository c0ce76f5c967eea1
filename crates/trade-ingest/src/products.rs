//! HS product code loading from the classification JSON document.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use trade_model::{Code, CodeMapping};

use crate::error::{IngestError, Result};

/// Identifier of the aggregate entry, which is not a product category.
pub const TOTAL_ID: &str = "TOTAL";

#[derive(Debug, Deserialize)]
struct HsDocument {
    #[serde(default)]
    results: Vec<HsEntry>,
}

#[derive(Debug, Deserialize)]
struct HsEntry {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    text: Value,
}

/// Loads HS product codes from a JSON document of the form
/// `{"results": [{"id": "01", "text": "..."}]}`.
///
/// Dots are removed from identifiers before parsing, so `84.01` becomes
/// code 8401. The `TOTAL` entry, entries with a blank id or text, and
/// identifiers that are not numeric are skipped.
pub fn load_hs_codes(path: &Path) -> Result<CodeMapping> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::open(path, e))?;
    let document: HsDocument =
        serde_json::from_slice(&bytes).map_err(|source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut mapping = CodeMapping::new();
    let mut skipped = 0usize;
    for entry in &document.results {
        let Some(id) = value_text(&entry.id) else {
            skipped += 1;
            continue;
        };
        let Some(text) = value_text(&entry.text) else {
            skipped += 1;
            continue;
        };
        if id == TOTAL_ID {
            continue;
        }
        let Some(code) = Code::from_digits(&id.replace('.', "")) else {
            debug!(id = %id, "skipping product entry with a non-numeric id");
            skipped += 1;
            continue;
        };
        if mapping.insert(code, text).is_err() {
            skipped += 1;
        }
    }

    info!(
        path = %path.display(),
        count = mapping.len(),
        skipped,
        "loaded HS codes"
    );
    Ok(mapping)
}

fn value_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
