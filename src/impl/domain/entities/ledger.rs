use chrono::NaiveDate;
use iso_currency::Currency;
use rust_decimal::Decimal;

use crate::errors::PnlError;

use super::aggregation::{AggregationQuery, AggregationRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub date: NaiveDate,
    pub account: String,
    pub amount: Decimal,
    pub commodity: String,
}

/// Conversion rate: one unit of `commodity` is worth `rate` units of
/// `currency`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub commodity: String,
    pub currency: Currency,
    pub rate: Decimal,
}

// Ledger collaborators.
// ---

/// Executes grouped sum-by-month queries against a ledger snapshot.
pub trait LedgerQuery {
    fn aggregate(&self, query: &AggregationQuery) -> Result<Vec<AggregationRow>, PnlError>;
}

/// Covered span and reporting currency of a ledger snapshot.
pub trait LedgerMetadata {
    /// Inclusive first and last entry dates, or `None` for an empty ledger.
    fn date_range(&self) -> Option<(NaiveDate, NaiveDate)>;

    fn operating_currency(&self) -> Currency;
}

/// Convenience bound for anything usable as a report's ledger.
pub trait Ledger: LedgerQuery + LedgerMetadata + Send + Sync {}
impl<T> Ledger for T where T: LedgerQuery + LedgerMetadata + Send + Sync {}
