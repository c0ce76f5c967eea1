//! Trade transaction records as read from the store and as exported.

use serde::{Deserialize, Serialize};

use crate::Code;

/// A raw trade transaction row.
///
/// Code columns are kept both as parsed codes (when the stored value is an
/// integer) and as their raw text so that unparseable values survive export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub date: String,
    pub flow_type: String,
    pub reporter_code: Option<Code>,
    pub reporter_raw: String,
    pub partner_code: Option<Code>,
    pub partner_raw: String,
    pub cmd_code: Option<Code>,
    pub cmd_raw: String,
    pub qty: Option<f64>,
    pub primary_value: Option<f64>,
}

/// A trade record with resolved reference names, in export column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRow {
    pub date: String,
    #[serde(rename = "flowtype")]
    pub flow_type: String,
    #[serde(rename = "ReporterCode")]
    pub reporter_code: String,
    #[serde(rename = "PartnerName")]
    pub partner: String,
    #[serde(rename = "cmdCode")]
    pub cmd_code: String,
    pub qty: Option<f64>,
    #[serde(rename = "primaryvalue")]
    pub primary_value: Option<f64>,
    pub reporter_name: String,
    pub product_description: String,
    pub partner_name: String,
}
