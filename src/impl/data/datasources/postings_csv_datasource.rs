use std::{fs, str::FromStr as _};

use crate::{
    data::models::{accounting_amount_model::AccountingAmountModel, iso_date_model::ISODateModel},
    entities::Posting,
    errors::PnlError,
};

pub(crate) trait PostingsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Posting>, PnlError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<Posting>, PnlError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct PostingsCsvDatasourceImpl;

impl PostingsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PostingsCsvDatasource for PostingsCsvDatasourceImpl {
    /// Expects a header row, followed by `date,account,amount,commodity`
    /// records.
    fn from_string(&self, s: &str) -> Result<Vec<Posting>, PnlError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(PnlError::invalid_csv).and_then(|r| {
                    // Extract from CSV record.
                    let raw_date = r.get(0).unwrap_or("");
                    let raw_account = r.get(1).unwrap_or("");
                    let raw_amount = r.get(2).unwrap_or("0");
                    let raw_commodity = r.get(3).unwrap_or("");

                    // Parse.
                    let date = ISODateModel::from_str(raw_date)?;
                    let amount = AccountingAmountModel::from_str(raw_amount)?;
                    if raw_account.trim().is_empty() || raw_commodity.trim().is_empty() {
                        return Err(PnlError::invalid_csv(format!(
                            "missing account or commodity in record {:?}",
                            r
                        )));
                    }

                    // Build.
                    Ok(Posting {
                        date: date.into(),
                        account: raw_account.trim().to_string(),
                        amount: amount.into(),
                        commodity: raw_commodity.trim().to_string(),
                    })
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<Posting>, PnlError>
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
