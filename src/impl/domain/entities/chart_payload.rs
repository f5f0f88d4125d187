use serde_derive::Serialize;

use super::resolved_series::ResolvedSeries;

/// Chart-ready output: month axis plus every series, stacks in declaration
/// order. `xaxis` and each series' `data` share the same index alignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    /// Echo of the loaded configuration file.
    pub config: serde_json::Value,
    pub currency: String,
    pub chart: Chart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub xaxis: Vec<String>,
    pub series: Vec<ResolvedSeries>,
}
