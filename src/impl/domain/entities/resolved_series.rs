use rust_decimal::Decimal;
use serde_derive::Serialize;

/// Computed output for one series: one amount per month of the report's
/// month range, in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSeries {
    pub name: String,
    pub stack: String,
    pub link: Option<String>,
    pub color: Option<String>,
    pub data: Vec<Decimal>,
}
