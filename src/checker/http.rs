// src/checker/http.rs
// =============================================================================
// This module checks whether external links work by making HTTP requests.
//
// Key functionality:
// - One GET request per link, using the client's default redirect policy
// - A link is valid only if the final status is exactly 200
// - Links that cannot be requested at all (bad syntax, DNS failure, refused
//   connection, ...) are reported as "Invalid URL" and not counted
// - Checks run one at a time by default; a bounded number can run at once
//
// Progress goes to a ProgressSink (see src/report.rs), never to stdout
// directly, so this module can be tested without capturing console output.
//
// Rust concepts:
// - async/await: for network I/O
// - Streams: buffer_unordered runs up to N futures at once
// - Enums: to represent the outcome of a single check
// =============================================================================

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffer_unordered()
use log::debug;
use reqwest::{Client, StatusCode};
use std::num::NonZeroUsize;
use url::Url;

use crate::error::LinkValidationError;
use crate::report::ProgressSink;

// The outcome of checking one link
#[derive(Debug)]
pub enum LinkOutcome {
    /// HTTP 200
    Valid,
    /// Any other status; not counted, not reported
    Status(StatusCode),
    /// The request could not be made
    Invalid(LinkValidationError),
}

// Checks a single link
pub async fn check_link(client: &Client, link: &str) -> LinkOutcome {
    match request_status(client, link).await {
        Ok(StatusCode::OK) => LinkOutcome::Valid,
        Ok(status) => LinkOutcome::Status(status),
        Err(e) => LinkOutcome::Invalid(e),
    }
}

async fn request_status(client: &Client, link: &str) -> Result<StatusCode, LinkValidationError> {
    // Parse first so a malformed link is told apart from a network failure
    let url = Url::parse(link)?;
    let response = client.get(url).send().await?;
    Ok(response.status())
}

// Counts how many of `links` answer with HTTP 200
//
// Parameters:
//   client: shared reqwest client (connection pooling across links)
//   reference: the input being scanned, used for progress display only
//   links: external links to check
//   concurrency: how many requests may be in flight at once
//   sink: receives progress and "invalid URL" events
//
// The count does not depend on the order in which checks finish, so the
// result is the same for any concurrency setting.
pub async fn count_valid_links(
    client: &Client,
    reference: &str,
    links: Vec<String>,
    concurrency: NonZeroUsize,
    sink: &mut dyn ProgressSink,
) -> usize {
    let total = links.len();

    let checks = links.into_iter().map(move |link| async move {
        let outcome = check_link(client, &link).await;
        (link, outcome)
    });

    let mut pending = std::pin::pin!(stream::iter(checks).buffer_unordered(concurrency.get()));

    let mut count = 0;
    for position in 1..=total {
        sink.progress(reference, position, total);

        let Some((link, outcome)) = pending.next().await else {
            break;
        };

        sink.step_done(reference);

        match outcome {
            LinkOutcome::Valid => {
                debug!("{} -> HTTP 200", link);
                count += 1;
            }
            LinkOutcome::Status(status) => {
                debug!("{} -> HTTP {}, not counted", link, status.as_u16());
            }
            LinkOutcome::Invalid(err) => {
                debug!("{}: {}", link, err);
                sink.invalid_link(&link);
            }
        }
    }

    count
}
