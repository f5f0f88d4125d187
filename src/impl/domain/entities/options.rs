use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "monthly_pnl.ron";
pub const DEFAULT_ACCOUNT_LINK_BASE: &str = "/beancount/account/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyPnlOptions {
    /// Chart configuration file (`.ron` or `.json`). Re-read on every
    /// request.
    pub config_path: PathBuf,
    /// Prefix of account drill-down links; the account name and a trailing
    /// slash are appended.
    pub account_link_base: String,
}

impl Default for MonthlyPnlOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            account_link_base: DEFAULT_ACCOUNT_LINK_BASE.to_string(),
        }
    }
}

impl MonthlyPnlOptions {
    pub fn with_config_path(mut self, config_path: impl Into<PathBuf>) -> Self {
        self.config_path = config_path.into();
        self
    }

    pub fn with_account_link_base(mut self, account_link_base: impl Into<String>) -> Self {
        self.account_link_base = account_link_base.into();
        self
    }
}
