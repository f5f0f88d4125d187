use std::collections::BTreeMap;

use chrono::NaiveDate;
use iso_currency::Currency;
use rust_decimal::Decimal;

use crate::{
    data::datasources::{
        postings_csv_datasource::{PostingsCsvDatasource as _, PostingsCsvDatasourceImpl},
        prices_csv_datasource::{PricesCsvDatasource as _, PricesCsvDatasourceImpl},
    },
    domain::logic::filter_expression::FilterExpression,
    entities::{
        AggregationQuery, AggregationRow, LedgerMetadata, LedgerQuery, Month, Posting, Price,
    },
    errors::PnlError,
};

/// Ledger snapshot held in memory, queried with simple filter expressions
/// (see `FilterExpression`).
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    postings: Vec<Posting>,
    prices: Vec<Price>,
    operating_currency: Currency,
}

impl InMemoryLedger {
    pub fn new(postings: Vec<Posting>, prices: Vec<Price>, operating_currency: Currency) -> Self {
        Self {
            postings,
            prices,
            operating_currency,
        }
    }

    /// Postings CSV: `date,account,amount,commodity`. Prices CSV:
    /// `commodity,currency,rate`. Both with a header row.
    pub fn from_string(
        postings_csv: &str,
        prices_csv: &str,
        operating_currency: Currency,
    ) -> Result<Self, PnlError> {
        Ok(Self::new(
            PostingsCsvDatasourceImpl::new().from_string(postings_csv)?,
            PricesCsvDatasourceImpl::new().from_string(prices_csv)?,
            operating_currency,
        ))
    }

    pub fn from_file<P>(
        postings_csv: P,
        prices_csv: Option<P>,
        operating_currency: Currency,
    ) -> Result<Self, PnlError>
    where
        P: AsRef<std::path::Path>,
    {
        let postings = PostingsCsvDatasourceImpl::new().from_file(postings_csv)?;
        let prices = match prices_csv {
            Some(path) => PricesCsvDatasourceImpl::new().from_file(path)?,
            None => Vec::new(),
        };
        Ok(Self::new(postings, prices, operating_currency))
    }

    fn convert(&self, posting: &Posting, target: Currency) -> Result<Decimal, PnlError> {
        if posting.commodity == target.code() {
            return Ok(posting.amount);
        }
        if let Some(price) = self
            .prices
            .iter()
            .find(|p| p.commodity == posting.commodity && p.currency == target)
        {
            return Ok(posting.amount * price.rate);
        }
        // Fall back to an inverse quote (target priced in the posting's
        // currency).
        if let Some(price) = self.prices.iter().find(|p| {
            p.commodity == target.code()
                && p.currency.code() == posting.commodity
                && !p.rate.is_zero()
        }) {
            return Ok(posting.amount / price.rate);
        }
        Err(PnlError::MissingPrice {
            commodity: posting.commodity.clone(),
            currency: target.code().to_string(),
        })
    }
}

impl LedgerQuery for InMemoryLedger {
    fn aggregate(&self, query: &AggregationQuery) -> Result<Vec<AggregationRow>, PnlError> {
        let filter = FilterExpression::parse(&query.filter)?;
        let mut totals: BTreeMap<Month, Decimal> = BTreeMap::new();
        for posting in self.postings.iter().filter(|p| filter.matches(p)) {
            let amount = self.convert(posting, query.convert_to)?;
            *totals.entry(Month::from(posting.date)).or_default() += amount;
        }
        Ok(totals
            .into_iter()
            .map(|(month, total)| AggregationRow::new(month, Some(total)))
            .collect())
    }
}

impl LedgerMetadata for InMemoryLedger {
    fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.postings.iter().map(|p| p.date).min()?;
        let last = self.postings.iter().map(|p| p.date).max()?;
        Some((first, last))
    }

    fn operating_currency(&self) -> Currency {
        self.operating_currency
    }
}
