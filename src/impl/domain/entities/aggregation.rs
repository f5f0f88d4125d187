use iso_currency::Currency;
use rust_decimal::Decimal;

use super::month::Month;

/// Grouped sum-by-month query: "sum of matching positions, converted to
/// `convert_to`, grouped by (year, month)".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationQuery {
    pub filter: String,
    pub convert_to: Currency,
}

/// One result row. `amount` is `None` when the summed position is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationRow {
    pub month: Month,
    pub amount: Option<Decimal>,
}

// --

impl AggregationQuery {
    pub fn new(filter: impl Into<String>, convert_to: Currency) -> Self {
        Self {
            filter: filter.into(),
            convert_to,
        }
    }

    /// Filter matching every account whose name starts with `prefix`.
    pub fn account_prefix_filter(prefix: &str) -> String {
        format!("account ~ '^{}'", prefix)
    }

    /// Query text in the ledger's query language.
    pub fn to_query_string(&self) -> String {
        format!(
            "SELECT year, month, CONVERT(VALUE(SUM(position)), '{}') AS val WHERE {} GROUP BY year, month",
            self.convert_to.code(),
            self.filter
        )
    }
}

impl AggregationRow {
    pub fn new(month: Month, amount: Option<Decimal>) -> Self {
        Self { month, amount }
    }
}
