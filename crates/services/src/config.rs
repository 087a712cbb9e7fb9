use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const SITE_URL_VAR: &str = "DNA_SITE_URL";
pub const SCORING_URL_VAR: &str = "DNA_SCORING_URL";
pub const SCORING_TIMEOUT_VAR: &str = "DNA_SCORING_TIMEOUT_SECS";

const DEFAULT_SITE_URL: &str = "http://127.0.0.1:5000/";
const SCORING_PATH: &str = "calculate-match";

/// Where the quiz talks to and how long it waits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    /// Base of the studio site; the default scoring endpoint lives under it.
    pub site_url: Url,
    /// Scoring endpoint receiving the answer set.
    pub scoring_url: Url,
    /// Optional cap on a scoring request. `None` waits indefinitely.
    pub submit_timeout: Option<Duration>,
}

impl QuizConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let site_raw = value(SITE_URL_VAR).unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        let site_url = parse_url(SITE_URL_VAR, &site_raw)?;

        let scoring_url = match value(SCORING_URL_VAR) {
            Some(raw) => parse_url(SCORING_URL_VAR, &raw)?,
            None => site_url
                .join(SCORING_PATH)
                .map_err(|source| ConfigError::InvalidUrl {
                    var: SITE_URL_VAR,
                    source,
                })?,
        };

        let submit_timeout = value(SCORING_TIMEOUT_VAR)
            .map(|raw| parse_timeout_secs(SCORING_TIMEOUT_VAR, &raw))
            .transpose()?;

        Ok(Self {
            site_url,
            scoring_url,
            submit_timeout,
        })
    }

    #[must_use]
    pub fn with_scoring_url(mut self, scoring_url: Url) -> Self {
        self.scoring_url = scoring_url;
        self
    }

    #[must_use]
    pub fn with_submit_timeout(mut self, submit_timeout: Option<Duration>) -> Self {
        self.submit_timeout = submit_timeout;
        self
    }
}

fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { var, source })
}

/// Parse a positive number of seconds.
///
/// # Errors
///
/// Returns `ConfigError::InvalidTimeout` for non-numeric or zero values.
pub fn parse_timeout_secs(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            var,
            raw: raw.to_string(),
        }),
    }
}
