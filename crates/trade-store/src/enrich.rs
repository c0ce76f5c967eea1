//! Labelling of trade records with reference names.

use trade_model::{Code, CodeMapping, ExtractedRow, TradeRecord};

/// Adds reporter, partner and product names to each record.
///
/// Codes missing from the mappings fall back to their stored text, so every
/// row keeps a readable label.
pub fn enrich(
    records: &[TradeRecord],
    countries: &CodeMapping,
    products: &CodeMapping,
) -> Vec<ExtractedRow> {
    records
        .iter()
        .map(|record| ExtractedRow {
            date: record.date.clone(),
            flow_type: record.flow_type.clone(),
            reporter_code: record.reporter_raw.clone(),
            partner: record.partner_raw.clone(),
            cmd_code: record.cmd_raw.clone(),
            qty: record.qty,
            primary_value: record.primary_value,
            reporter_name: label(record.reporter_code, &record.reporter_raw, countries),
            product_description: label(record.cmd_code, &record.cmd_raw, products),
            partner_name: label(record.partner_code, &record.partner_raw, countries),
        })
        .collect()
}

fn label(code: Option<Code>, raw: &str, mapping: &CodeMapping) -> String {
    code.and_then(|code| mapping.get(code))
        .unwrap_or(raw)
        .to_string()
}
