use std::path::Path;

use async_trait::async_trait;
use ron::extensions::Extensions;

use crate::errors::PnlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Ron,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("ron") => Some(ConfigFormat::Ron),
            Some("json") => Some(ConfigFormat::Json),
            Some("yaml" | "yml") => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

/// Reads the configuration file as a generic document, whatever its format.
/// The document is echoed back verbatim in reports, so nothing is dropped or
/// reordered here.
#[async_trait]
pub(crate) trait ChartConfigDatasource: Send + Sync {
    fn from_string(&self, s: &str, format: ConfigFormat) -> Result<serde_json::Value, String>;

    async fn from_file(&self, path: &Path) -> Result<serde_json::Value, PnlError>;
}

pub(crate) struct ChartConfigDatasourceImpl;

impl ChartConfigDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChartConfigDatasource for ChartConfigDatasourceImpl {
    fn from_string(&self, s: &str, format: ConfigFormat) -> Result<serde_json::Value, String> {
        match format {
            // Optional fields are written without `Some(..)`.
            ConfigFormat::Ron => ron::Options::default()
                .with_default_extension(Extensions::IMPLICIT_SOME)
                .from_str(s)
                .map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(s).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml_ng::from_str(s).map_err(|e| e.to_string()),
        }
    }

    async fn from_file(&self, path: &Path) -> Result<serde_json::Value, PnlError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            PnlError::configuration(
                path,
                "unsupported file extension (expected .ron, .json, .yaml or .yml)",
            )
        })?;
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PnlError::configuration(path, e))?;
        self.from_string(&content, format)
            .map_err(|e| PnlError::configuration(path, e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("monthly_pnl.ron")),
            Some(ConfigFormat::Ron)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("conf/PNL.JSON")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("monthly_pnl.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("monthly_pnl.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("monthly_pnl.toml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("monthly_pnl")), None);
    }

    #[test]
    fn test_ron_with_implicit_some() {
        let ron = r##"{
            "pnl": (
                series: {
                    "Income": [
                        (name: "Salary", account: "Income:Salary", invert: true, color: "#00ff00"),
                        (name: "Other", type: "other_income", invert: true),
                    ],
                },
            ),
        }"##;
        let value = ChartConfigDatasourceImpl::new()
            .from_string(ron, ConfigFormat::Ron)
            .unwrap();
        let series = &value["pnl"]["series"]["Income"];
        assert_eq!(series[0]["account"], "Income:Salary");
        assert_eq!(series[0]["invert"], true);
        assert_eq!(series[1]["type"], "other_income");
    }

    #[test]
    fn test_yaml() {
        let yaml = r##"
pnl:
  series:
    Income:
      - name: Salary
        account: "Income:Salary"
        invert: true
        color: "#00ff00"
      - name: Other
        type: other_income
        invert: true
    Expenses:
      - query: "account ~ '^Expenses'"
"##;
        let value = ChartConfigDatasourceImpl::new()
            .from_string(yaml, ConfigFormat::Yaml)
            .unwrap();
        let stacks: Vec<&String> = value["pnl"]["series"].as_object().unwrap().keys().collect();
        assert_eq!(stacks, ["Income", "Expenses"]);
        let income = &value["pnl"]["series"]["Income"];
        assert_eq!(income[0]["account"], "Income:Salary");
        assert_eq!(income[0]["color"], "#00ff00");
        assert_eq!(income[1]["type"], "other_income");
        assert_eq!(
            value["pnl"]["series"]["Expenses"][0]["query"],
            "account ~ '^Expenses'"
        );
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ron");
        match ChartConfigDatasourceImpl::new().from_file(&path).await {
            Err(PnlError::ConfigurationError { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparsable_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{\"pnl\": [1, 2").unwrap();
        match ChartConfigDatasourceImpl::new().from_file(file.path()).await {
            Err(e @ PnlError::ConfigurationError { .. }) => {
                assert!(e.to_string().contains(&file.path().display().to_string()));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
