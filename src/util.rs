use crate::{
    domain::usecases::monthly_pnl_usecase::{MonthlyPnlUsecase as _, MonthlyPnlUsecaseImpl},
    entities::{ChartPayload, Ledger, MonthlyPnlOptions},
    errors::PnlError,
    presentation::table_printer::PnlTablePrinter,
};

/// Entry point for hosts: computes monthly profit-and-loss charts for a
/// ledger, driven by the chart configuration file named in the options.
pub struct MonthlyPnlUtil<L: Ledger> {
    usecase: MonthlyPnlUsecaseImpl<L>,
    printer: PnlTablePrinter,
}

impl<L: Ledger> MonthlyPnlUtil<L> {
    pub fn new(ledger: L) -> Self {
        Self::with_options(ledger, MonthlyPnlOptions::default())
    }

    pub fn with_options(ledger: L, options: MonthlyPnlOptions) -> Self {
        Self {
            usecase: MonthlyPnlUsecaseImpl::new(ledger, options),
            printer: PnlTablePrinter::new(),
        }
    }

    pub fn ledger(&self) -> &L {
        self.usecase.ledger()
    }

    pub fn options(&self) -> &MonthlyPnlOptions {
        self.usecase.options()
    }

    pub async fn monthly_pnl(&self, chart_id: &str) -> Result<ChartPayload, PnlError> {
        self.usecase.monthly_pnl(chart_id).await
    }

    /// Same as `monthly_pnl`, rendered as the JSON document consumed by chart
    /// frontends.
    pub async fn monthly_pnl_json(&self, chart_id: &str) -> Result<String, PnlError> {
        let payload = self.monthly_pnl(chart_id).await?;
        serde_json::to_string(&payload).map_err(|e| PnlError::SerializationError {
            details: e.to_string(),
        })
    }

    pub async fn monthly_pnl_table(&self, chart_id: &str) -> Result<String, PnlError> {
        let payload = self.monthly_pnl(chart_id).await?;
        self.printer.print(&payload)
    }
}
