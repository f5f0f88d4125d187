/// Semantic tag for a residual ("everything else") series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesType {
    OtherIncome,
    OtherExpenses,
}

/// How the per-month values of a series are obtained. Exactly one mode per
/// series; validated when the configuration is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesSource {
    /// All accounts whose name starts with the given prefix.
    AccountFilter(String),
    /// Literal filter expression, passed through to the ledger.
    ExplicitQuery(String),
    /// Broad category total minus every series already resolved in the same
    /// stack.
    TypeTag(SeriesType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSpec {
    pub name: String,
    pub source: SeriesSource,
    pub invert: bool,
    pub color: Option<String>,
    pub link: Option<String>,
}

/// Named group of series rendered stacked on top of each other. Order of
/// `series` matters for residual computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    pub name: String,
    pub series: Vec<SeriesSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub id: String,
    pub stacks: Vec<Stack>,
}

/// One validated chart along with the configuration file it was read from.
/// `raw` is the whole file as written, echoed back in every report.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDocument {
    pub chart: ChartConfig,
    pub raw: serde_json::Value,
}

// --

pub const DEFAULT_SERIES_NAME: &str = "Unnamed";

impl SeriesType {
    pub fn tag(&self) -> &'static str {
        match self {
            SeriesType::OtherIncome => "other_income",
            SeriesType::OtherExpenses => "other_expenses",
        }
    }

    /// Account prefix covering the whole category.
    pub fn account_prefix(&self) -> &'static str {
        match self {
            SeriesType::OtherIncome => "Income",
            SeriesType::OtherExpenses => "Expenses",
        }
    }
}

impl std::str::FromStr for SeriesType {
    type Err = crate::errors::PnlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "other_income" => Ok(SeriesType::OtherIncome),
            "other_expenses" => Ok(SeriesType::OtherExpenses),
            other => Err(crate::errors::PnlError::InvalidSeriesType {
                value: other.to_string(),
            }),
        }
    }
}
