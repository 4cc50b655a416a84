//! HTTP clients for the remote collaborators.
//!
//! Both clients are blocking and must be built and called off the async executor (the servers
//! use `tokio::task::spawn_blocking`). Transport failures, timeouts, unexpected statuses and
//! undecodable bodies are all reported as unreachable; only a 404 from the drug store means
//! the drug does not exist.

use crate::assessor::{PairAnalyzer, PairVerdict};
use crate::drug::{Drug, DrugId};
use crate::error::{CoreError, CoreResult, LookupError};
use crate::lookup::{DrugLookup, LookupResult};
use reqwest::StatusCode;
use std::time::Duration;

fn build_client(timeout: Duration) -> CoreResult<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(CoreError::HttpClient)
}

fn transport_error(base_url: &str, timeout: Duration, e: &reqwest::Error) -> String {
    if e.is_connect() {
        format!("cannot connect to {base_url}")
    } else if e.is_timeout() {
        format!("request timed out after {}s", timeout.as_secs())
    } else {
        e.to_string()
    }
}

/// Drug lookup against the drug store's `GET /drugs/{id}`.
pub struct HttpDrugLookup {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpDrugLookup {
    /// # Errors
    ///
    /// Returns [`CoreError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> CoreResult<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: build_client(timeout)?,
            timeout,
        })
    }
}

impl DrugLookup for HttpDrugLookup {
    fn lookup_drug(&self, id: DrugId) -> LookupResult {
        let url = format!("{}/drugs/{}", self.base_url, id);

        let response = self.client.get(&url).send().map_err(|e| {
            LookupError::Unreachable(transport_error(&self.base_url, self.timeout, &e))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(id));
        }
        if !status.is_success() {
            return Err(LookupError::Unreachable(format!(
                "drug store returned {status}"
            )));
        }

        let body = response
            .text()
            .map_err(|e| LookupError::Unreachable(e.to_string()))?;
        // A found-nothing response from the store is an empty or null body.
        if body.trim().is_empty() || body.trim() == "null" {
            return Err(LookupError::NotFound(id));
        }

        serde_json::from_str::<Drug>(&body)
            .map_err(|e| LookupError::Unreachable(format!("invalid drug payload: {e}")))
    }
}

/// Pair analyzer that delegates to a remote interaction service's
/// `GET /interactions/analyze?drugA=&drugB=`.
///
/// Any failure to obtain a verdict yields [`PairVerdict::service_unavailable`].
pub struct HttpPairAnalyzer {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpPairAnalyzer {
    /// # Errors
    ///
    /// Returns [`CoreError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> CoreResult<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: build_client(timeout)?,
            timeout,
        })
    }

    fn request(&self, drug_a: DrugId, drug_b: DrugId) -> Result<PairVerdict, String> {
        let url = format!("{}/interactions/analyze", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("drugA", drug_a.0), ("drugB", drug_b.0)])
            .send()
            .map_err(|e| transport_error(&self.base_url, self.timeout, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("interaction service returned {status}"));
        }

        response
            .json::<PairVerdict>()
            .map_err(|e| format!("invalid verdict payload: {e}"))
    }
}

impl PairAnalyzer for HttpPairAnalyzer {
    fn analyze_pair(&self, drug_a: DrugId, drug_b: DrugId) -> PairVerdict {
        self.request(drug_a, drug_b).unwrap_or_else(|e| {
            tracing::warn!(
                "interaction service call failed for {} <-> {}: {}",
                drug_a,
                drug_b,
                e
            );
            PairVerdict::service_unavailable()
        })
    }
}
