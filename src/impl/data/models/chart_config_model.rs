use serde_derive::Deserialize;

use crate::{
    entities::{ChartConfig, SeriesSource, SeriesSpec, SeriesType, Stack, DEFAULT_SERIES_NAME},
    errors::PnlError,
};

use super::ordered_entries_model::OrderedEntriesModel;

/// One entry of the top-level chart-id -> chart map. Keys this model does
/// not know about are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChartConfigModel {
    /// Stack name -> ordered series definitions.
    pub series: OrderedEntriesModel<Vec<SeriesSpecModel>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SeriesSpecModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub invert: Option<bool>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, rename = "type")]
    pub series_type: Option<String>,
}

impl TryFrom<SeriesSpecModel> for SeriesSpec {
    type Error = PnlError;

    fn try_from(model: SeriesSpecModel) -> Result<Self, Self::Error> {
        let name = model
            .name
            .unwrap_or_else(|| DEFAULT_SERIES_NAME.to_string());
        let modes = [
            model.account.is_some(),
            model.query.is_some(),
            model.series_type.is_some(),
        ];
        if modes.iter().filter(|m| **m).count() > 1 {
            tracing::warn!(
                series = %name,
                "series declares more than one of 'account', 'query' and 'type'; using the first in that order"
            );
        }

        // Precedence: account, query, type.
        let source = if let Some(account) = model.account {
            SeriesSource::AccountFilter(account)
        } else if let Some(query) = model.query {
            SeriesSource::ExplicitQuery(query)
        } else if let Some(series_type) = model.series_type {
            SeriesSource::TypeTag(series_type.parse::<SeriesType>()?)
        } else {
            return Err(PnlError::MalformedSeriesSpec { name });
        };

        Ok(SeriesSpec {
            name,
            source,
            invert: model.invert.unwrap_or(false),
            color: model.color,
            link: model.link,
        })
    }
}

impl TryFrom<(String, ChartConfigModel)> for ChartConfig {
    type Error = PnlError;

    fn try_from((id, model): (String, ChartConfigModel)) -> Result<Self, Self::Error> {
        let stacks = model
            .series
            .0
            .into_iter()
            .map(|(name, series)| -> Result<Stack, PnlError> {
                Ok(Stack {
                    name,
                    series: series
                        .into_iter()
                        .map(SeriesSpec::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ChartConfig { id, stacks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes() {
        let account = SeriesSpec::try_from(SeriesSpecModel {
            account: Some("Income:Salary".into()),
            invert: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            account.source,
            SeriesSource::AccountFilter("Income:Salary".into())
        );
        assert_eq!(account.name, "Unnamed");
        assert!(account.invert);

        let query = SeriesSpec::try_from(SeriesSpecModel {
            name: Some("Housing".into()),
            query: Some("account ~ 'Rent'".into()),
            link: Some("/housing".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            query.source,
            SeriesSource::ExplicitQuery("account ~ 'Rent'".into())
        );
        assert_eq!(query.link.as_deref(), Some("/housing"));
        assert!(!query.invert);

        let residual = SeriesSpec::try_from(SeriesSpecModel {
            series_type: Some("other_expenses".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            residual.source,
            SeriesSource::TypeTag(SeriesType::OtherExpenses)
        );
    }

    #[test]
    fn test_account_takes_precedence() {
        let spec = SeriesSpec::try_from(SeriesSpecModel {
            account: Some("Expenses:Food".into()),
            query: Some("account ~ 'x'".into()),
            series_type: Some("bogus".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            spec.source,
            SeriesSource::AccountFilter("Expenses:Food".into())
        );
    }

    #[test]
    fn test_malformed_spec() {
        match SeriesSpec::try_from(SeriesSpecModel {
            name: Some("Orphan".into()),
            color: Some("#000".into()),
            ..Default::default()
        }) {
            Err(PnlError::MalformedSeriesSpec { name }) => assert_eq!(name, "Orphan"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    fn chart(json: &str) -> Result<ChartConfig, PnlError> {
        let model: ChartConfigModel = serde_json::from_str(json).unwrap();
        ChartConfig::try_from(("pnl".to_string(), model))
    }

    #[test]
    fn test_invalid_type_fails_whole_chart() {
        let json = r#"{"series": {
            "Income": [{"account": "Income:Salary"}, {"type": "bogus"}]
        }}"#;
        match chart(json) {
            Err(PnlError::InvalidSeriesType { value }) => assert_eq!(value, "bogus"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_stack_order_is_kept() {
        let json = r#"{"series": {
            "Income": [{"account": "Income"}],
            "Expenses": [
                {"name": "Food", "account": "Expenses:Food"},
                {"type": "other_expenses"}
            ]
        }}"#;
        let pnl = chart(json).unwrap();
        assert_eq!(pnl.id, "pnl");
        let stack_names: Vec<_> = pnl.stacks.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(stack_names, vec!["Income", "Expenses"]);
        assert_eq!(pnl.stacks[1].series[0].name, "Food");
        assert!(chart(r#"{"series": {}}"#).unwrap().stacks.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{"title": "Monthly", "series": {
            "Income": [{"account": "Income", "note": "all of it"}]
        }}"#;
        let pnl = chart(json).unwrap();
        assert_eq!(pnl.stacks[0].series[0].source, SeriesSource::AccountFilter("Income".into()));
    }
}
