//! GitHub client trait
//!
//! This module defines the `GitHubClient` trait that client implementations
//! must satisfy.

use crate::error::ActivityError;
use crate::types::Event;
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the interface for reading a user's public activity feed.
/// Implementations can hit the API directly or be substituted in tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared as
/// `&dyn GitHubClient`.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{Event, GitHubClient};
///
/// async fn activity(client: &dyn GitHubClient) -> Result<Vec<Event>, gh_client::ActivityError> {
///     client.fetch_public_events("octocat").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch the public events of an account
    ///
    /// Issues exactly one request. Events are returned in the order of the
    /// response body, which GitHub serves newest first.
    ///
    /// # Arguments
    ///
    /// * `account` - Account login (user or organization)
    ///
    /// # Errors
    ///
    /// * [`ActivityError::Fetch`] on transport failure, a non-success status
    ///   or an unreadable body
    /// * [`ActivityError::Decode`] when the body is not a JSON array of events
    async fn fetch_public_events(&self, account: &str) -> Result<Vec<Event>, ActivityError>;
}
