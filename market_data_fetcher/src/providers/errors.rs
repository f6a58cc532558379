use shared_utils::env::MissingEnvVarError;
use thiserror::Error;

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// A required environment variable (e.g. the API key) is not set.
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVarError),

    /// Failed to build the underlying HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider's API returned a specific error payload (e.g., unknown
    /// ticker, rate limiting).
    #[error("API error: {0}")]
    Api(String),

    /// The vendor payload could not be converted into the canonical models.
    #[error("Malformed provider response: {0}")]
    Parse(String),
}
