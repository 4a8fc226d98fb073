//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! This client makes real API calls without caching or retries.

use crate::client::GitHubClient;
use crate::error::{ActivityError, FetchError};
use crate::types::{decode_events, Event};
use async_trait::async_trait;
use log::debug;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Create an unauthenticated client for the API at `base_url`
    ///
    /// Octocrab's retry middleware is switched off so every call maps to
    /// exactly one request.
    pub fn unauthenticated(base_url: &str) -> octocrab::Result<Self> {
        let octocrab = Octocrab::builder()
            .base_uri(base_url)?
            .add_retry_config(RetryConfig::None)
            .build()?;
        Ok(Self::new(Arc::new(octocrab)))
    }
}

/// Route of the "public events for user" endpoint
fn public_events_route(account: &str) -> String {
    format!("/users/{}/events/public", account)
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_public_events(&self, account: &str) -> Result<Vec<Event>, ActivityError> {
        let route = public_events_route(account);
        debug!("Fetching public events for {} ({})", account, route);

        // The response owns the connection; every early return below drops it.
        let response = self
            .octocrab
            ._get(route)
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            debug!("Public events request for {} returned {}", account, status);
            return Err(FetchError::UnexpectedStatus(status.as_u16()).into());
        }

        let body = self
            .octocrab
            .body_to_string(response)
            .await
            .map_err(FetchError::Body)?;

        let events = decode_events(&body)?;
        debug!("Fetched {} public events for {}", events.len(), account);
        Ok(events)
    }
}
