//! Configuration for period defaults and logging

use chrono::NaiveDate;
use tracing::Level;

use crate::constants::{
    default_begin_date, default_end_date, far_future_date, DATE_FORMAT_ISO, INFINITY_TOKEN,
};
use crate::error::{DatatoolsError, Result};
use crate::parse::parse_date;
use crate::range::DateRange;

/// Environment variable overriding the default range start
pub const ENV_DEFAULT_BEGIN: &str = "DATATOOLS_DEFAULT_BEGIN";
/// Environment variable overriding the default range end
pub const ENV_DEFAULT_END: &str = "DATATOOLS_DEFAULT_END";
/// Environment variable overriding the date used for `"infinity"`
pub const ENV_INFINITY_DATE: &str = "DATATOOLS_INFINITY_DATE";
/// Environment variable holding the log level
pub const ENV_LOG_LEVEL: &str = "DATATOOLS_LOG_LEVEL";
/// Environment variable switching JSON log output on
pub const ENV_JSON_LOGS: &str = "DATATOOLS_JSON_LOGS";

/// Defaults for open and unbounded ranges, plus log output settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatatoolsConfig {
    /// Start used when a report has no explicit begin
    pub default_begin: NaiveDate,
    /// End used when a report has no explicit end
    pub default_end: NaiveDate,
    /// Date substituted for an absent or `"infinity"` period end
    pub infinity_date: NaiveDate,
    /// `tracing` level name (`trace`, `debug`, `info`, `warn`, `error`)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl DatatoolsConfig {
    /// The configured default reporting range
    #[must_use]
    pub fn default_range(&self) -> DateRange {
        DateRange::new(self.default_begin, self.default_end)
    }

    /// Resolve an open-ended period end against the configured infinity date
    ///
    /// Accepts the same inputs as [`infinity_date`](crate::parse::infinity_date):
    /// an absent value, the `"infinity"` sentinel or a `YYYY-MM-DD` date.
    ///
    /// # Errors
    /// Returns `DatatoolsError::Parse` if the value is neither the sentinel nor an ISO date
    pub fn resolve_end(&self, value: Option<&str>) -> Result<NaiveDate> {
        match value {
            None => Ok(self.infinity_date),
            Some(token) if token == INFINITY_TOKEN => Ok(self.infinity_date),
            Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT_ISO)
                .map_err(|e| DatatoolsError::parse(text, e.to_string())),
        }
    }

    /// Check the configuration for internal consistency
    ///
    /// # Errors
    /// Returns `DatatoolsError::Configuration` if the default range is reversed
    /// or the log level is not a `tracing` level
    pub fn validate(&self) -> Result<()> {
        if self.default_begin > self.default_end {
            return Err(DatatoolsError::configuration(format!(
                "default begin {} is after default end {}",
                self.default_begin, self.default_end
            )));
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level
    ///
    /// # Errors
    /// Returns `DatatoolsError::Configuration` if the level name is unknown
    pub fn level(&self) -> Result<Level> {
        self.log_level.parse::<Level>().map_err(|e| {
            DatatoolsError::configuration(format!("Invalid log level '{}': {e}", self.log_level))
        })
    }

    /// Create configuration from environment variables
    ///
    /// Reads `DATATOOLS_DEFAULT_BEGIN`, `DATATOOLS_DEFAULT_END`,
    /// `DATATOOLS_INFINITY_DATE`, `DATATOOLS_LOG_LEVEL` and
    /// `DATATOOLS_JSON_LOGS`; unset variables keep their defaults.
    ///
    /// # Errors
    /// Returns `DatatoolsError::Configuration` if a variable holds an unparsable
    /// value or the resulting configuration fails [`validate`](Self::validate)
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            default_begin: env_date(ENV_DEFAULT_BEGIN, defaults.default_begin)?,
            default_end: env_date(ENV_DEFAULT_END, defaults.default_end)?,
            infinity_date: env_date(ENV_INFINITY_DATE, defaults.infinity_date)?,
            log_level: std::env::var(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            json_logs: env_flag(ENV_JSON_LOGS, defaults.json_logs)?,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for DatatoolsConfig {
    fn default() -> Self {
        Self {
            default_begin: default_begin_date(),
            default_end: default_end_date(),
            infinity_date: far_future_date(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

fn env_date(name: &str, default: NaiveDate) -> Result<NaiveDate> {
    match std::env::var(name) {
        Ok(value) => parse_date(&value)
            .map_err(|e| DatatoolsError::configuration(format!("{name}: {e}"))),
        Err(_) => Ok(default),
    }
}

fn env_flag(name: &str, default: bool) -> Result<bool> {
    let Ok(value) = std::env::var(name) else {
        return Ok(default);
    };
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(DatatoolsError::configuration(format!(
            "{name}: expected a boolean, got '{other}'"
        ))),
    }
}
