use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::PnlError;

/// Amount as written in ledger exports: thousands separators allowed, and
/// accounting-style parentheses for negatives, ex. "(1,200.50)".
#[derive(Debug)]
pub(crate) struct AccountingAmountModel(pub Decimal);
impl FromStr for AccountingAmountModel {
    type Err = PnlError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let is_negative = raw.trim().starts_with("(") && raw.trim().ends_with(")");
        let numeric_part = raw.trim().trim_matches(|c| c == '(' || c == ')');
        let amount = Decimal::from_str(numeric_part.trim()).map_err(|_| PnlError::InvalidAmount {
            value: s.to_string(),
        })?;
        Ok(AccountingAmountModel(if is_negative {
            -amount
        } else {
            amount
        }))
    }
}

impl From<AccountingAmountModel> for Decimal {
    fn from(model: AccountingAmountModel) -> Self {
        model.0
    }
}
