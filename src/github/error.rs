//! Error types shared across the analysis service.

use thiserror::Error;

/// Errors surfaced while validating input, communicating with GitHub, or
/// rendering the report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The repository owner parameter was missing or blank.
    #[error("repository owner must not be blank")]
    InvalidOwner,

    /// The repository name parameter was missing or blank.
    #[error("repository name must not be blank")]
    InvalidRepository,

    /// The issue number parameter was missing or not a non-negative integer.
    #[error("issue number must be a non-negative integer")]
    InvalidIssueNumber,

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was missing.
    #[error("authentication token is required")]
    MissingToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from GitHub.
        message: String,
    },

    /// The comment fetch did not complete within the configured timeout.
    #[error("issue comment fetch timed out after {seconds}s")]
    FetchTimeout {
        /// Timeout that elapsed, in seconds.
        seconds: u64,
    },

    /// Report rendering failed.
    #[error("report rendering failed: {message}")]
    Render {
        /// Template engine error detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The HTTP listener could not be bound or the server loop failed.
    #[error("server error: {message}")]
    Server {
        /// Error detail from the listener or serve loop.
        message: String,
    },
}
