use std::str::FromStr;

use iso_currency::Currency;

use crate::errors::PnlError;

#[derive(Debug)]
pub(crate) struct CurrencyCodeModel(Currency);
impl FromStr for CurrencyCodeModel {
    type Err = PnlError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s.trim())
            .map(CurrencyCodeModel)
            .ok_or_else(|| PnlError::InvalidCurrencyCode {
                code: s.to_string(),
            })
    }
}

impl From<CurrencyCodeModel> for Currency {
    fn from(model: CurrencyCodeModel) -> Self {
        model.0
    }
}
