//! Type-tolerant conversion of stored cells.
//!
//! The trade table is imported from spreadsheets, so the same column may
//! hold integers, reals or text depending on the row.

use rusqlite::Row;
use rusqlite::types::Value;
use trade_model::{Code, TradeRecord};

pub(crate) fn record_from_row(row: &Row<'_>) -> rusqlite::Result<TradeRecord> {
    let reporter: Value = row.get(2)?;
    let partner: Value = row.get(3)?;
    let cmd: Value = row.get(4)?;
    Ok(TradeRecord {
        date: value_text(&row.get(0)?),
        flow_type: value_text(&row.get(1)?),
        reporter_code: value_code(&reporter),
        reporter_raw: value_text(&reporter),
        partner_code: value_code(&partner),
        partner_raw: value_text(&partner),
        cmd_code: value_code(&cmd),
        cmd_raw: value_text(&cmd),
        qty: value_number(&row.get(5)?),
        primary_value: value_number(&row.get(6)?),
    })
}

/// Text rendering of a cell; NULL and blobs render empty.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Blob(_) => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) if r.fract() == 0.0 && r.is_finite() => format!("{r:.0}"),
        Value::Real(r) => r.to_string(),
        Value::Text(t) => t.clone(),
    }
}

/// Code stored in a cell, if it holds a non-negative integral value.
pub(crate) fn value_code(value: &Value) -> Option<Code> {
    match value {
        Value::Integer(i) => u32::try_from(*i).ok().map(Code::new),
        Value::Real(r) if r.fract() == 0.0 && *r >= 0.0 && *r <= f64::from(u32::MAX) => {
            Some(Code::new(*r as u32))
        }
        Value::Text(t) => Code::from_digits(t.trim()),
        _ => None,
    }
}

/// Numeric value of a cell, if any.
pub(crate) fn value_number(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Real(r) => Some(*r),
        Value::Text(t) => t.trim().parse().ok(),
        _ => None,
    }
}
