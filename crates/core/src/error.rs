use crate::drug::DrugId;

/// Failure to retrieve a drug from the drug store.
///
/// Both variants are recovered by the assessor into a degraded verdict; they never reach the
/// caller of `assess_pair` or `summarize_prescription`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("drug {0} not found")]
    NotFound(DrugId),
    #[error("drug store unreachable: {0}")]
    Unreachable(String),
}

/// Startup-time errors raised while wiring services together.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
