//! CSV export with a column-description sidecar file.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;
use trade_model::{EXPORT_COLUMNS, ExtractedRow, NO_DESCRIPTION, column_description};

use crate::error::{OutputError, Result};

/// Suffix appended to the CSV file stem for the description file.
pub const COLUMNS_FILE_SUFFIX: &str = "_columns.txt";

/// Files produced by an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub csv_path: PathBuf,
    pub columns_path: PathBuf,
    pub records: usize,
}

/// Default export location: `dir/trade_data_YYYYMMDD_HHMMSS.csv`.
pub fn default_output_path(dir: &Path, now: NaiveDateTime) -> PathBuf {
    dir.join(format!("trade_data_{}.csv", now.format("%Y%m%d_%H%M%S")))
}

/// Path of the description file that accompanies `csv_path`.
pub fn columns_path_for(csv_path: &Path) -> PathBuf {
    let stem = csv_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    csv_path.with_file_name(format!("{stem}{COLUMNS_FILE_SUFFIX}"))
}

/// Writes `rows` to `csv_path` and their column descriptions next to it.
///
/// Missing parent directories are created. An empty row set is refused.
pub fn write_extract(
    rows: &[ExtractedRow],
    csv_path: &Path,
    generated_at: NaiveDateTime,
) -> Result<ExportOutcome> {
    if rows.is_empty() {
        return Err(OutputError::NoData);
    }
    if let Some(parent) = csv_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    write_rows(rows, csv_path)?;

    let columns_path = columns_path_for(csv_path);
    let description = render_column_descriptions(&EXPORT_COLUMNS, rows.len(), generated_at);
    fs::write(&columns_path, description).map_err(|source| OutputError::Write {
        path: columns_path.clone(),
        source,
    })?;

    info!(
        path = %csv_path.display(),
        records = rows.len(),
        "extract saved"
    );
    Ok(ExportOutcome {
        csv_path: csv_path.to_path_buf(),
        columns_path,
        records: rows.len(),
    })
}

fn write_rows(rows: &[ExtractedRow], path: &Path) -> Result<()> {
    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Text of the column-description file.
pub fn render_column_descriptions(
    columns: &[&str],
    records: usize,
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::from("COLUMN DESCRIPTIONS\n===================\n\n");
    for column in columns {
        let description = column_description(column).unwrap_or(NO_DESCRIPTION);
        let _ = writeln!(out, "{column}: {description}");
    }
    let _ = writeln!(
        out,
        "\nGenerated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "Total records: {records}");
    out
}
