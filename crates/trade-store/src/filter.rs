//! Filters applied to trade queries.

use rusqlite::types::Value;
use trade_model::Code;

/// Table holding the trade transactions.
pub const TRADE_TABLE: &str = "hightech_2024";

const SELECT_COLUMNS: &str =
    "date, flowtype, ReporterCode, PartnerName, cmdCode, qty, primaryvalue";

/// Conditions narrowing a trade extraction. All present conditions must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeFilter {
    /// Transaction date as stored, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Reporter country code.
    pub reporter: Option<Code>,
    /// HS product code.
    pub product: Option<Code>,
}

impl TradeFilter {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.reporter.is_none() && self.product.is_none()
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_reporter(mut self, code: Code) -> Self {
        self.reporter = Some(code);
        self
    }

    #[must_use]
    pub fn with_product(mut self, code: Code) -> Self {
        self.product = Some(code);
        self
    }

    /// SQL text and positional parameters for this filter.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut sql = format!("SELECT {SELECT_COLUMNS} FROM {TRADE_TABLE} WHERE 1=1");
        let mut params = Vec::new();
        if let Some(date) = &self.date {
            sql.push_str(" AND date = ?");
            params.push(Value::Text(date.clone()));
        }
        if let Some(code) = self.reporter {
            sql.push_str(" AND ReporterCode = ?");
            params.push(Value::Integer(i64::from(code.get())));
        }
        if let Some(code) = self.product {
            sql.push_str(" AND cmdCode = ?");
            params.push(Value::Integer(i64::from(code.get())));
        }
        (sql, params)
    }
}
