use std::collections::HashMap;

use iso_currency::Currency;
use rust_decimal::Decimal;

use crate::{
    entities::{
        AggregationQuery, AggregationRow, ChartConfig, LedgerQuery, Month, MonthRange,
        ResolvedSeries, SeriesSource, SeriesSpec, Stack,
    },
    errors::PnlError,
};

/// Resolves configured series into per-month amounts, one ledger query per
/// series. Stacks and the series within them are processed strictly in
/// declaration order, since residual series depend on the series resolved
/// before them in the same stack.
pub(crate) struct SeriesResolver<'a, L: LedgerQuery + ?Sized> {
    ledger: &'a L,
    months: &'a MonthRange,
    currency: Currency,
    account_link_base: &'a str,
}

impl<'a, L: LedgerQuery + ?Sized> SeriesResolver<'a, L> {
    pub(crate) fn new(
        ledger: &'a L,
        months: &'a MonthRange,
        currency: Currency,
        account_link_base: &'a str,
    ) -> Self {
        Self {
            ledger,
            months,
            currency,
            account_link_base,
        }
    }

    pub(crate) fn resolve_chart(
        &self,
        chart: &ChartConfig,
    ) -> Result<Vec<ResolvedSeries>, PnlError> {
        let mut all_series = Vec::new();
        for stack in &chart.stacks {
            all_series.extend(self.resolve_stack(stack)?);
        }
        Ok(all_series)
    }

    fn resolve_stack(&self, stack: &Stack) -> Result<Vec<ResolvedSeries>, PnlError> {
        stack
            .series
            .iter()
            .try_fold(
                Vec::with_capacity(stack.series.len()),
                |mut resolved, spec| -> Result<Vec<ResolvedSeries>, PnlError> {
                    let series = self.resolve_series(&stack.name, spec, &resolved)?;
                    resolved.push(series);
                    Ok(resolved)
                },
            )
    }

    /// `prior` holds the finalized series declared earlier in the same stack.
    fn resolve_series(
        &self,
        stack_name: &str,
        spec: &SeriesSpec,
        prior: &[ResolvedSeries],
    ) -> Result<ResolvedSeries, PnlError> {
        let (filter, link) = match &spec.source {
            SeriesSource::AccountFilter(account) => (
                AggregationQuery::account_prefix_filter(account),
                Some(format!("{}{}/", self.account_link_base, account)),
            ),
            SeriesSource::ExplicitQuery(query) => (query.clone(), spec.link.clone()),
            SeriesSource::TypeTag(series_type) => (
                AggregationQuery::account_prefix_filter(series_type.account_prefix()),
                spec.link.clone(),
            ),
        };

        let query = AggregationQuery::new(filter, self.currency);
        let rows = self.ledger.aggregate(&query)?;
        tracing::debug!(
            series = %spec.name,
            stack = %stack_name,
            query = %query.to_query_string(),
            rows = rows.len(),
            "aggregated series"
        );

        let mut data = grid(&rows, self.months);
        if spec.invert {
            data.iter_mut().for_each(|v| *v = -*v);
        }
        if let SeriesSource::TypeTag(_) = spec.source {
            subtract_prior(&mut data, prior);
        }

        Ok(ResolvedSeries {
            name: spec.name.clone(),
            stack: stack_name.to_string(),
            link,
            color: spec.color.clone(),
            data,
        })
    }
}

/// Aligns query rows to the month range. Months without a row, or with an
/// empty position, are zero. Rows outside the range are ignored.
pub(crate) fn grid(rows: &[AggregationRow], months: &MonthRange) -> Vec<Decimal> {
    let mut by_month: HashMap<Month, Decimal> = HashMap::new();
    for row in rows {
        *by_month.entry(row.month).or_default() += row.amount.unwrap_or_default();
    }
    months
        .iter()
        .map(|m| by_month.get(m).copied().unwrap_or_default())
        .collect()
}

/// Element-wise subtraction of every prior series' data.
pub(crate) fn subtract_prior(data: &mut [Decimal], prior: &[ResolvedSeries]) {
    for (i, value) in data.iter_mut().enumerate() {
        *value -= prior
            .iter()
            .filter_map(|s| s.data.get(i))
            .copied()
            .sum::<Decimal>();
    }
}
