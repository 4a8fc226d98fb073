//! Reporter configuration
//!
//! Everything except the account comes from the environment, optionally
//! seeded from a `.env` file in the working directory.

use gh_client::DEFAULT_API_URL;

/// Environment variable overriding the GitHub API base URL
pub const API_URL_ENV: &str = "GH_ACTIVITY_API_URL";

/// Runtime configuration of the reporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Base URL of the GitHub REST API, without trailing slash
    pub api_base_url: String,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ReporterConfig {
    /// Load `.env` if present, then read the configuration from the environment
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
            Err(_) => log::debug!(".env file not found, will rely on environment variables"),
        }

        Self::from_api_url(std::env::var(API_URL_ENV).ok())
    }

    /// Build the configuration from an optional API URL override
    ///
    /// Blank values fall back to the default.
    pub fn from_api_url(api_url: Option<String>) -> Self {
        match api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
        {
            Some(url) => {
                log::info!("Using GitHub API at {}", url);
                Self {
                    api_base_url: url.trim_end_matches('/').to_string(),
                }
            }
            None => Self::default(),
        }
    }
}
