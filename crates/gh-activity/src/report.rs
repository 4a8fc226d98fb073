//! Kind → message classification of activity events

use gh_client::Event;
use log::warn;
use std::io::{self, Write};
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Event kinds with a dedicated summary line
///
/// Parsing is an exact, case-sensitive match on the GitHub event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
pub enum EventKind {
    PushEvent,
    IssuesEvent,
    WatchEvent,
    PullRequestEvent,
    IssueCommentEvent,
    PullRequestReviewCommentEvent,
    PullRequestReviewEvent,
}

impl EventKind {
    /// Summary line for an event of this kind in `repository`
    pub fn summary(self, repository: &str) -> String {
        match self {
            EventKind::PushEvent => format!("Pushed to {}", repository),
            EventKind::IssuesEvent => format!("Opened issue in {}", repository),
            EventKind::WatchEvent => format!("Starred {}", repository),
            EventKind::PullRequestEvent => format!("Opened PR in {}", repository),
            EventKind::IssueCommentEvent => format!("Commented in {}", repository),
            EventKind::PullRequestReviewCommentEvent => {
                format!("Commented on PR in {}", repository)
            }
            EventKind::PullRequestReviewEvent => format!("Reviewed PR in {}", repository),
        }
    }
}

/// The single report line for `event`, without the trailing newline
pub fn describe(event: &Event) -> String {
    match EventKind::from_str(&event.kind) {
        Ok(kind) => kind.summary(&event.repository_name),
        Err(_) => format!("Unknown event: {}", event.kind),
    }
}

/// Write one line per event to `out`, in order
pub fn write_report<W: Write>(events: &[Event], out: &mut W) -> io::Result<()> {
    for event in events {
        writeln!(out, "{}", describe(event))?;
    }
    out.flush()
}

/// Print the report to `out`
///
/// Write errors (e.g. a closed pipe) end the report and are logged, never
/// raised.
pub fn report_events<W: Write>(events: &[Event], out: &mut W) {
    if let Err(e) = write_report(events, out) {
        warn!("Failed to write activity report: {}", e);
    }
}
