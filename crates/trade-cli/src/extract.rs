//! Extraction planning: resolving user filters and summarizing results.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use thiserror::Error;
use trade_ingest::ReferenceData;
use trade_match::{CodeResolver, Resolution};
use trade_model::{ExtractedRow, ItemKind};
use trade_store::TradeFilter;

/// Filters as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractRequest {
    pub date: Option<NaiveDate>,
    pub country: Option<String>,
    pub product: Option<String>,
}

impl ExtractRequest {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.country.is_none() && self.product.is_none()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("at least one filter must be given (--date, --country or --product)")]
    NoFilter,

    #[error("{} '{query}' not found; use 'list {}' to see available options", .kind.title(), .kind.plural())]
    NotFound { kind: ItemKind, query: String },
}

/// A query and what it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedQuery {
    pub kind: ItemKind,
    pub query: String,
    pub resolution: Resolution,
}

/// Store filter built from a request, with the resolutions behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFilters {
    pub filter: TradeFilter,
    pub resolutions: Vec<ResolvedQuery>,
}

/// Resolves the country and product of `request` and builds the store filter.
///
/// Fails on the first query that does not resolve.
pub fn build_filter(
    request: &ExtractRequest,
    reference: &ReferenceData,
    resolver: &CodeResolver,
) -> Result<ResolvedFilters, ExtractError> {
    if request.is_empty() {
        return Err(ExtractError::NoFilter);
    }

    let mut filter = TradeFilter::default();
    let mut resolutions = Vec::new();

    if let Some(date) = request.date {
        filter = filter.with_date(date.format("%Y-%m-%d").to_string());
    }

    let queries = [
        (ItemKind::Country, request.country.as_deref()),
        (ItemKind::Product, request.product.as_deref()),
    ];
    for (kind, query) in queries {
        let Some(query) = query else {
            continue;
        };
        let resolution = resolver.resolve(query, reference.mapping(kind), kind);
        let Some(code) = resolution.code() else {
            return Err(ExtractError::NotFound {
                kind,
                query: query.to_string(),
            });
        };
        filter = match kind {
            ItemKind::Country => filter.with_reporter(code),
            ItemKind::Product => filter.with_product(code),
        };
        resolutions.push(ResolvedQuery {
            kind,
            query: query.to_string(),
            resolution,
        });
    }

    Ok(ResolvedFilters {
        filter,
        resolutions,
    })
}

/// Aggregate figures over an extract.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractSummary {
    pub records: usize,
    /// Records per flow type, most frequent first.
    pub flow_counts: Vec<(String, usize)>,
    pub unique_reporters: usize,
    pub unique_partners: usize,
    /// Sum of trade values; `None` when no row carries a value.
    pub total_value: Option<f64>,
    /// Sum of quantities; `None` when no row carries a quantity.
    pub total_quantity: Option<f64>,
}

impl ExtractSummary {
    pub fn from_rows(rows: &[ExtractedRow]) -> Self {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (position, row) in rows.iter().enumerate() {
            counts
                .entry(row.flow_type.as_str())
                .or_insert((0, position))
                .0 += 1;
        }
        let mut flow_counts: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
        // Most frequent first; ties keep first appearance.
        flow_counts.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));

        let unique_reporters = rows
            .iter()
            .map(|row| row.reporter_name.as_str())
            .collect::<BTreeSet<_>>()
            .len();
        let unique_partners = rows
            .iter()
            .map(|row| row.partner_name.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            records: rows.len(),
            flow_counts: flow_counts
                .into_iter()
                .map(|(flow, (count, _))| (flow.to_string(), count))
                .collect(),
            unique_reporters,
            unique_partners,
            total_value: sum_present(rows.iter().map(|row| row.primary_value)),
            total_quantity: sum_present(rows.iter().map(|row| row.qty)),
        }
    }
}

fn sum_present(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    values.flatten().fold(None, |acc, value| Some(acc.unwrap_or(0.0) + value))
}

/// Formats `value` with thousands separators and two decimals.
///
/// Non-finite values are printed as is.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
