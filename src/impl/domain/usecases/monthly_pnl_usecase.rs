use async_trait::async_trait;

use crate::{
    data::repositories::chart_config_repository_impl::ChartConfigRepositoryImpl,
    domain::{
        logic::{month_enumerator::months_covering, series_resolver::SeriesResolver},
        repositories::chart_config_repository::ChartConfigRepository,
    },
    entities::{Chart, ChartPayload, Ledger, MonthlyPnlOptions},
    errors::PnlError,
};

#[async_trait]
pub trait MonthlyPnlUsecase: Send + Sync {
    async fn monthly_pnl(&self, chart_id: &str) -> Result<ChartPayload, PnlError>;
}

pub(crate) struct MonthlyPnlUsecaseImpl<
    L,
    R1 = ChartConfigRepositoryImpl, // Default.
> where
    L: Ledger,
    R1: ChartConfigRepository,
{
    ledger: L,
    options: MonthlyPnlOptions,
    config_repository: R1,
}

#[async_trait]
impl<L, R1> MonthlyPnlUsecase for MonthlyPnlUsecaseImpl<L, R1>
where
    L: Ledger,
    R1: ChartConfigRepository,
{
    async fn monthly_pnl(&self, chart_id: &str) -> Result<ChartPayload, PnlError> {
        let document = self
            .config_repository
            .load_chart(&self.options.config_path, chart_id)
            .await?;

        let months = months_covering(self.ledger.date_range())?;
        let currency = self.ledger.operating_currency();
        let series = SeriesResolver::new(
            &self.ledger,
            &months,
            currency,
            &self.options.account_link_base,
        )
        .resolve_chart(&document.chart)?;

        tracing::info!(
            chart_id,
            months = months.len(),
            series = series.len(),
            currency = currency.code(),
            "resolved monthly pnl chart"
        );

        Ok(ChartPayload {
            config: document.raw,
            currency: currency.code().to_string(),
            chart: Chart {
                xaxis: months.labels(),
                series,
            },
        })
    }
}

impl<L: Ledger> MonthlyPnlUsecaseImpl<L> {
    pub(crate) fn new(ledger: L, options: MonthlyPnlOptions) -> Self {
        MonthlyPnlUsecaseImpl {
            ledger,
            options,
            config_repository: ChartConfigRepositoryImpl::new(),
        }
    }
}

impl<L: Ledger, R1: ChartConfigRepository> MonthlyPnlUsecaseImpl<L, R1> {
    pub(crate) fn ledger(&self) -> &L {
        &self.ledger
    }

    pub(crate) fn options(&self) -> &MonthlyPnlOptions {
        &self.options
    }
}
