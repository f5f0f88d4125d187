use std::path::Path;

use async_trait::async_trait;

use crate::{entities::ChartDocument, errors::PnlError};

#[async_trait]
pub(crate) trait ChartConfigRepository: Send + Sync {
    /// Loads the configuration file and validates the requested chart. Fails
    /// with `UnknownChart` if the file does not declare it, and with a
    /// configuration or series error if its definition is invalid. Other
    /// charts in the file are not validated.
    async fn load_chart(&self, path: &Path, chart_id: &str) -> Result<ChartDocument, PnlError>;
}
