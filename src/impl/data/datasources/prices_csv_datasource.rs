use std::{fs, str::FromStr as _};

use crate::{
    data::models::{
        accounting_amount_model::AccountingAmountModel, currency_code_model::CurrencyCodeModel,
    },
    entities::Price,
    errors::PnlError,
};

pub(crate) trait PricesCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Price>, PnlError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<Price>, PnlError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct PricesCsvDatasourceImpl;

impl PricesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PricesCsvDatasource for PricesCsvDatasourceImpl {
    /// Expects a header row, followed by `commodity,currency,rate` records.
    fn from_string(&self, s: &str) -> Result<Vec<Price>, PnlError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(PnlError::invalid_csv).and_then(|r| {
                    let raw_commodity = r.get(0).unwrap_or("").trim();
                    let raw_currency = r.get(1).unwrap_or("");
                    let raw_rate = r.get(2).unwrap_or("");

                    if raw_commodity.is_empty() {
                        return Err(PnlError::invalid_csv(format!(
                            "missing commodity in record {:?}",
                            r
                        )));
                    }
                    let currency = CurrencyCodeModel::from_str(raw_currency)?;
                    let rate = AccountingAmountModel::from_str(raw_rate)?;

                    Ok(Price {
                        commodity: raw_commodity.to_string(),
                        currency: currency.into(),
                        rate: rate.into(),
                    })
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<Price>, PnlError>
    where
        P: AsRef<std::path::Path>,
    {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| PnlError::ReadError {
            path: path.as_ref().to_path_buf(),
            cause: e.to_string(),
        })?;
        self.from_string(&content)
    }
}
