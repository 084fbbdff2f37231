//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.morale.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `MORALE_TOKEN`, or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--token`/`-t` and friends
//!
//! # Configuration File
//!
//! Place `.morale.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! token = "ghp_example"
//! bind_address = "127.0.0.1:8080"
//! api_base = "https://api.github.com"
//! fetch_timeout_seconds = 30
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::AnalysisError;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `MORALE_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `MORALE_BIND_ADDRESS` or `--bind-address`: Listener address
/// - `MORALE_API_BASE` or `--api-base`: GitHub API base URL
/// - `MORALE_FETCH_TIMEOUT_SECONDS` or `--fetch-timeout-seconds`: Outbound
///   fetch timeout
///
/// # Example
///
/// ```no_run
/// use morale::MoraleConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = MoraleConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "MORALE",
    discovery(
        dotfile_name = ".morale.toml",
        config_file_name = "morale.toml",
        app_name = "morale"
    )
)]
pub struct MoraleConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `MORALE_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Address the HTTP listener binds to.
    ///
    /// Defaults to `127.0.0.1:8080`.
    #[ortho_config(cli_short = 'b')]
    pub bind_address: String,

    /// Base URL of the GitHub API.
    ///
    /// Defaults to `https://api.github.com`; point it at a GitHub
    /// Enterprise `api/v3` root to analyze issues hosted there.
    #[ortho_config()]
    pub api_base: String,

    /// Upper bound on one outbound comment fetch, in seconds.
    ///
    /// A fetch that exceeds this bound is reported to the caller instead
    /// of holding the connection open. Defaults to 30 seconds.
    #[ortho_config()]
    pub fetch_timeout_seconds: u64,
}

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 30;

impl Default for MoraleConfig {
    fn default() -> Self {
        Self {
            token: None,
            bind_address: DEFAULT_BIND_ADDRESS.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
            fetch_timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECONDS,
        }
    }
}

impl MoraleConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// For backward compatibility, if no token is provided via
    /// `MORALE_TOKEN`, the CLI, or a configuration file, this method falls
    /// back to reading `GITHUB_TOKEN` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingToken`] when no token source provides
    /// a value.
    pub fn resolve_token(&self) -> Result<String, AnalysisError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(AnalysisError::MissingToken)
    }

    /// Parses the configured API base into a URL.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidUrl`] when the configured value does
    /// not parse.
    pub fn api_base_url(&self) -> Result<Url, AnalysisError> {
        Url::parse(&self.api_base).map_err(|error| AnalysisError::InvalidUrl(error.to_string()))
    }

    /// Outbound fetch timeout as a [`Duration`].
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }
}
