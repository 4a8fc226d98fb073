//! GitHub public events client
//!
//! This crate provides a trait-based client for the GitHub "public events for
//! user" endpoint, together with the event data model and its decoder.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_public_events()                         │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient, DEFAULT_API_URL};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OctocrabClient::unauthenticated(DEFAULT_API_URL)?;
//! let events = client.fetch_public_events("octocat").await?;
//! for event in &events {
//!     println!("{} {}", event.kind, event.repository_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod types;

/// Default GitHub REST API base URL (public GitHub)
pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub use client::GitHubClient;
pub use error::{ActivityError, FetchError};
pub use octocrab_client::OctocrabClient;
pub use types::{decode_events, Event};
