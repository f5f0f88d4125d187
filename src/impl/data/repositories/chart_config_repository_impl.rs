use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize as _;

use crate::{
    data::{
        datasources::chart_config_datasource::{ChartConfigDatasource, ChartConfigDatasourceImpl},
        models::chart_config_model::ChartConfigModel,
    },
    domain::repositories::chart_config_repository::ChartConfigRepository,
    entities::{ChartConfig, ChartDocument},
    errors::PnlError,
};

pub(crate) struct ChartConfigRepositoryImpl<DS = ChartConfigDatasourceImpl>
where
    DS: ChartConfigDatasource,
{
    datasource: DS,
}

#[async_trait]
impl<DS> ChartConfigRepository for ChartConfigRepositoryImpl<DS>
where
    DS: ChartConfigDatasource,
{
    async fn load_chart(&self, path: &Path, chart_id: &str) -> Result<ChartDocument, PnlError> {
        let raw = self.datasource.from_file(path).await?;
        let charts = raw
            .as_object()
            .ok_or_else(|| PnlError::configuration(path, "expected a map of chart definitions"))?;
        let definition = charts
            .get(chart_id)
            .ok_or_else(|| PnlError::UnknownChart {
                chart_id: chart_id.to_string(),
            })?;
        let model = ChartConfigModel::deserialize(definition)
            .map_err(|e| PnlError::configuration(path, format!("chart '{}': {}", chart_id, e)))?;
        let chart = ChartConfig::try_from((chart_id.to_string(), model))?;
        Ok(ChartDocument { chart, raw })
    }
}

impl ChartConfigRepositoryImpl {
    pub(crate) fn new() -> Self {
        Self {
            datasource: ChartConfigDatasourceImpl::new(),
        }
    }
}
