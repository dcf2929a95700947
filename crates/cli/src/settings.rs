//! Session settings, read once at startup.

use stockroom_observability::{LogConfig, LogFormat};

pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const CURRENCY_VAR: &str = "STOCKROOM_CURRENCY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_format: LogFormat,
    /// Prefix printed before every monetary amount.
    pub currency_symbol: String,
    /// Transactions shown when the history prompt is left blank.
    pub history_default: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            currency_symbol: "₹".to_string(),
            history_default: 5,
        }
    }
}

impl Settings {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`. Unusable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => settings.log_format = format,
                Err(err) => tracing::warn!(var = LOG_FORMAT_VAR, %err, "ignoring setting"),
            }
        }

        if let Some(symbol) = lookup(CURRENCY_VAR) {
            if symbol.trim().is_empty() {
                tracing::warn!(var = CURRENCY_VAR, "ignoring empty currency symbol");
            } else {
                settings.currency_symbol = symbol.trim().to_string();
            }
        }

        settings
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            format: self.log_format,
            ..LogConfig::default()
        }
    }
}
