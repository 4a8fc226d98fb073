//! Report a GitHub account's recent public activity
//!
//! The flow is fetch → decode → classify → print:
//! [`GitHubClient::fetch_public_events`] yields the events and
//! [`report::report_events`] prints one line per event.

pub mod config;
pub mod logger;
pub mod report;

use gh_client::{ActivityError, GitHubClient};
use std::io::Write;

/// Fetch the public events of `account` and write one line per event to `out`
///
/// Nothing is written when the fetch fails. A write failure (e.g. a closed
/// pipe) ends the report early and is only logged.
pub async fn run<W: Write>(
    client: &dyn GitHubClient,
    account: &str,
    out: &mut W,
) -> Result<(), ActivityError> {
    let events = client.fetch_public_events(account).await?;
    report::report_events(&events, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_client::{FetchError, OctocrabClient};
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/events/public"))
            .respond_with(
                ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    async fn run_against(server: &MockServer) -> (Result<(), ActivityError>, String) {
        let client = OctocrabClient::unauthenticated(&server.uri()).unwrap();
        let mut out = Vec::new();
        let result = run(&client, "octocat", &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_run_prints_push_event() {
        let server = serve(
            200,
            r#"[{"type":"PushEvent","repo":{"name":"octocat/Hello-World"}}]"#,
        )
        .await;

        let (result, output) = run_against(&server).await;

        assert!(result.is_ok());
        assert_eq!(output, "Pushed to octocat/Hello-World\n");
    }

    #[tokio::test]
    async fn test_run_empty_feed_prints_nothing() {
        let server = serve(200, "[]").await;

        let (result, output) = run_against(&server).await;

        assert!(result.is_ok());
        assert_eq!(output, "");
    }

    #[tokio::test]
    async fn test_run_null_feed_prints_nothing() {
        let server = serve(200, "null").await;

        let (result, output) = run_against(&server).await;

        assert!(result.is_ok());
        assert_eq!(output, "");
    }

    #[tokio::test]
    async fn test_run_not_found_prints_nothing() {
        let server = serve(404, r#"{"message":"Not Found"}"#).await;

        let (result, output) = run_against(&server).await;

        assert!(matches!(
            result,
            Err(ActivityError::Fetch(FetchError::UnexpectedStatus(404)))
        ));
        assert_eq!(output, "");
    }

    #[tokio::test]
    async fn test_run_malformed_body_prints_nothing() {
        let server = serve(200, r#"[{"type":"PushEvent","repo":{"name":"a/b"}}"#).await;

        let (result, output) = run_against(&server).await;

        assert!(matches!(result, Err(ActivityError::Decode(_))));
        assert_eq!(output, "");
    }

    #[tokio::test]
    async fn test_run_mixed_feed_in_order() {
        let server = serve(
            200,
            r#"[
                {"type":"WatchEvent","repo":{"name":"rust-lang/rust"}},
                {"type":"CreateEvent","repo":{"name":"octocat/new"}},
                {"type":"PullRequestReviewEvent","repo":{"name":"tokio-rs/tokio"}}
            ]"#,
        )
        .await;

        let (result, output) = run_against(&server).await;

        assert!(result.is_ok());
        assert_eq!(
            output,
            "Starred rust-lang/rust\nUnknown event: CreateEvent\nReviewed PR in tokio-rs/tokio\n"
        );
    }
}
