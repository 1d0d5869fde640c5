// src/scan.rs
// =============================================================================
// Runs the whole pipeline for each input, one input at a time:
//
//   load page -> extract hrefs -> keep external links -> count the ones
//   answering 200
//
// Whatever goes wrong with one input, it ends up as a ScanOutcome with a
// count of 0, and the next input is processed as usual. So the result list
// always has exactly one entry per input, in the same order.
// =============================================================================

use anyhow::Context;
use log::{debug, info};
use reqwest::Client;
use std::io::Write;
use std::num::NonZeroUsize;

use crate::checker;
use crate::report::{self, ProgressSink, ScanOutcome, NO_INPUTS_NOTICE};
use crate::source;

/// Settings shared by every input of a run
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Maximum link checks in flight for one input
    pub concurrency: NonZeroUsize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            concurrency: NonZeroUsize::MIN,
        }
    }
}

// Scans the inputs and writes the final summary to `out`
//
// With no inputs only the notice is written and nothing is scanned.
pub async fn run<W: Write>(
    client: &Client,
    inputs: &[String],
    options: ScanOptions,
    json: bool,
    sink: &mut dyn ProgressSink,
    out: &mut W,
) -> anyhow::Result<()> {
    if inputs.is_empty() {
        writeln!(out, "{}", NO_INPUTS_NOTICE).context("Failed to write the notice")?;
        out.flush()?;
        return Ok(());
    }

    let outcomes = scan_all(client, inputs, options, sink).await;
    report::print_summary(out, &outcomes, json).context("Failed to write the summary")
}

// Scans every input in order
pub async fn scan_all(
    client: &Client,
    references: &[String],
    options: ScanOptions,
    sink: &mut dyn ProgressSink,
) -> Vec<ScanOutcome> {
    let mut outcomes = Vec::with_capacity(references.len());
    for reference in references {
        outcomes.push(scan_input(client, reference, options, sink).await);
    }
    outcomes
}

// Scans a single input; never fails
pub async fn scan_input(
    client: &Client,
    reference: &str,
    options: ScanOptions,
    sink: &mut dyn ProgressSink,
) -> ScanOutcome {
    sink.loading(reference);
    let loaded = source::load(client, reference).await;
    sink.loaded(reference);

    let page = match loaded {
        Ok(page) => page,
        Err(err) => {
            debug!("{}: {}", reference, err.detail());
            sink.load_failed(&err);
            return ScanOutcome {
                input: reference.to_string(),
                count: 0,
                error: Some(err.detail()),
            };
        }
    };

    let candidates = checker::extract_html_links(&page.html);
    let external = checker::external_links(&candidates, &page.domain);
    info!(
        "{}: {} link(s) found, {} external (reference domain '{}')",
        reference,
        candidates.len(),
        external.len(),
        page.domain
    );

    let count =
        checker::count_valid_links(client, reference, external, options.concurrency, sink).await;

    ScanOutcome {
        input: reference.to_string(),
        count,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::summary_lines;
    use crate::report::testing::{Event, RecordingSink};
    use std::fs;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn ok_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/one"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/two"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_no_inputs_prints_notice_only() {
        let mut sink = RecordingSink::default();
        let mut out = Vec::new();

        run(&Client::new(), &[], ScanOptions::default(), false, &mut sink, &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No URLs provided. Stopping script.\n"
        );
        assert!(sink.events.is_empty());
    }

    #[tokio::test]
    async fn test_run_writes_one_line_per_input() {
        let inputs = vec!["./nope/missing.html".to_string(), "http://10.0.0.1/".to_string()];
        let mut sink = RecordingSink::default();
        let mut out = Vec::new();

        run(&Client::new(), &inputs, ScanOptions::default(), false, &mut sink, &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "./nope/missing.html 0\nhttp://10.0.0.1/ 0\n"
        );
    }

    #[tokio::test]
    async fn test_file_and_unresolvable_url() {
        let server = ok_server().await;
        let dir = tempfile::tempdir().unwrap();
        let sample = dir.path().join("sample.html");
        fs::write(
            &sample,
            format!(
                concat!(
                    "<html><body>\n",
                    "<a href=\"{0}/one\">one</a>\n",
                    "<a href=\"{0}/two\">two</a>\n",
                    "<a href=\"{0}/one\">one again</a>\n",
                    "<a href=\"https://sample.org/home\">internal</a>\n",
                    "<a href=\"/about\">relative</a>\n",
                    "</body></html>\n"
                ),
                server.uri()
            ),
        )
        .unwrap();

        let sample_ref = sample.to_str().unwrap().to_string();
        let inputs = vec![
            sample_ref.clone(),
            "https://bad-domain-xyz-does-not-exist.test".to_string(),
        ];

        let mut sink = RecordingSink::default();
        let outcomes = scan_all(&Client::new(), &inputs, ScanOptions::default(), &mut sink).await;

        assert_eq!(
            summary_lines(&outcomes),
            vec![
                format!("{} 2", sample_ref),
                "https://bad-domain-xyz-does-not-exist.test 0".to_string(),
            ]
        );
        assert!(outcomes[1].error.is_some());
        assert!(sink.events.contains(&Event::LoadFailed(
            "Error opening https://bad-domain-xyz-does-not-exist.test. URL syntax maybe wrong"
                .to_string()
        )));
    }

    #[tokio::test]
    async fn test_missing_file_does_not_stop_later_inputs() {
        let server = ok_server().await;
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("page.html");
        fs::write(&page, format!("<a href=\"{}/one\">x</a>", server.uri())).unwrap();

        let missing = dir.path().join("missing.html");
        let inputs = vec![
            missing.to_str().unwrap().to_string(),
            page.to_str().unwrap().to_string(),
        ];

        let mut sink = RecordingSink::default();
        let outcomes = scan_all(&Client::new(), &inputs, ScanOptions::default(), &mut sink).await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].count, 0);
        assert!(outcomes[0].error.is_some());
        assert_eq!(outcomes[1].count, 1);
        assert_eq!(outcomes[1].error, None);
    }

    #[tokio::test]
    async fn test_all_failures_keep_one_line_per_input() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.html");
        fs::write(&empty, "").unwrap();

        let inputs = vec![
            "./nope/missing.html".to_string(),
            empty.to_str().unwrap().to_string(),
            "not a url".to_string(),
            "http://10.0.0.1/".to_string(),
        ];

        let mut sink = RecordingSink::default();
        let outcomes = scan_all(&Client::new(), &inputs, ScanOptions::default(), &mut sink).await;

        let inputs_back: Vec<&str> = outcomes.iter().map(|o| o.input.as_str()).collect();
        assert_eq!(inputs_back, inputs.iter().map(String::as_str).collect::<Vec<_>>());
        assert!(outcomes.iter().all(|o| o.count == 0 && o.error.is_some()));
        assert_eq!(
            sink.events
                .iter()
                .filter(|e| matches!(e, Event::LoadFailed(_)))
                .count(),
            4
        );
    }

    #[tokio::test]
    async fn test_page_without_external_links() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("site.html");
        fs::write(
            &page,
            "<a href=\"/local\">l</a><a href=\"https://www.site.com/\">s</a>",
        )
        .unwrap();

        let reference = page.to_str().unwrap().to_string();
        let mut sink = RecordingSink::default();
        let outcome =
            scan_input(&Client::new(), &reference, ScanOptions::default(), &mut sink).await;

        assert_eq!(outcome.count, 0);
        assert_eq!(outcome.error, None);
        assert_eq!(
            sink.events,
            vec![
                Event::Loading(reference.clone()),
                Event::Loaded(reference.clone()),
            ]
        );
    }
}
