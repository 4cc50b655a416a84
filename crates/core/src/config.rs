//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the core services.
//! Nothing in the core reads environment variables while handling a request.

use crate::constants::DEFAULT_LOOKUP_TIMEOUT_SECS;
use crate::error::{CoreError, CoreResult};
use std::time::Duration;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    drug_service_url: Option<String>,
    interaction_service_url: Option<String>,
    lookup_timeout: Duration,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// Without a drug service URL the seeded in-memory catalog is used. Without an interaction
    /// service URL prescriptions are analysed locally.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if a URL is not `http(s)://` or the timeout is zero.
    pub fn new(
        drug_service_url: Option<String>,
        interaction_service_url: Option<String>,
        lookup_timeout: Duration,
    ) -> CoreResult<Self> {
        if lookup_timeout.is_zero() {
            return Err(CoreError::InvalidConfig(
                "lookup timeout must be greater than zero".into(),
            ));
        }

        Ok(Self {
            drug_service_url: validate_url("drug service", drug_service_url)?,
            interaction_service_url: validate_url("interaction service", interaction_service_url)?,
            lookup_timeout,
        })
    }

    /// Build a `CoreConfig` from raw environment values.
    ///
    /// Empty or whitespace-only values count as unset.
    pub fn from_env_values(
        drug_service_url: Option<String>,
        interaction_service_url: Option<String>,
        lookup_timeout_secs: Option<String>,
    ) -> CoreResult<Self> {
        Self::new(
            non_empty(drug_service_url),
            non_empty(interaction_service_url),
            lookup_timeout_from_env_value(lookup_timeout_secs)?,
        )
    }

    pub fn drug_service_url(&self) -> Option<&str> {
        self.drug_service_url.as_deref()
    }

    pub fn interaction_service_url(&self) -> Option<&str> {
        self.interaction_service_url.as_deref()
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            drug_service_url: None,
            interaction_service_url: None,
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_url(what: &str, url: Option<String>) -> CoreResult<Option<String>> {
    match url {
        Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => Err(
            CoreError::InvalidConfig(format!("{what} URL must start with http:// or https://: {url}")),
        ),
        other => Ok(other),
    }
}

/// Parse the lookup timeout (whole seconds) from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn lookup_timeout_from_env_value(value: Option<String>) -> CoreResult<Duration> {
    match non_empty(value) {
        None => Ok(Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS)),
        Some(v) => v.parse::<u64>().map(Duration::from_secs).map_err(|_| {
            CoreError::InvalidConfig(format!("lookup timeout must be whole seconds: {v}"))
        }),
    }
}
