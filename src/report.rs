// src/report.rs
// =============================================================================
// Everything the user sees on the console.
//
// The scan and the link validator never print anything themselves. They send
// events to a `ProgressSink`, and the sink decides how to show them. The
// console implementation draws a live, single-line progress bar that gets
// overwritten in place ("\r") and wiped after each step, so only the
// diagnostics and the final summary stay on screen.
//
// Tests use a sink that just records the events.
//
// Rust concepts:
// - Traits: an interface the scan code depends on instead of stdout
// - Generics over std::io::Write so output can go to a Vec<u8> in tests
// =============================================================================

use serde::Serialize;
use std::io::{self, Write};

use crate::error::LoadError;

/// Width of the progress bar in glyphs
pub const BAR_WIDTH: usize = 100;

/// Printed instead of a summary when no inputs were given
pub const NO_INPUTS_NOTICE: &str = "No URLs provided. Stopping script.";

const FILLED: char = '\u{2588}';
const EMPTY: char = '.';

/// Receives progress events while inputs are scanned.
pub trait ProgressSink {
    /// An input is about to be loaded
    fn loading(&mut self, reference: &str);

    /// Loading finished, successfully or not
    fn loaded(&mut self, reference: &str);

    /// The input could not be loaded and will be counted as 0
    fn load_failed(&mut self, error: &LoadError);

    /// Link `position` of `total` is being checked (1-based)
    fn progress(&mut self, reference: &str, position: usize, total: usize);

    /// The check for the current link finished
    fn step_done(&mut self, reference: &str);

    /// A link could not be requested at all
    fn invalid_link(&mut self, link: &str);
}

// Draws the textual bar for `position` out of `total`
//
// Example (width shortened): 3/4 -> "███████████████...."
pub fn render_bar(position: usize, total: usize) -> String {
    let filled = if total == 0 {
        BAR_WIDTH
    } else {
        (position.min(total) * BAR_WIDTH) / total
    };

    let mut bar = String::with_capacity(BAR_WIDTH * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(BAR_WIDTH - filled));
    bar
}

/// Console sink writing transient progress lines to any writer
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    // Writes a line that the next write will overwrite
    fn transient(&mut self, text: &str) {
        let _ = write!(self.out, "{}\r", text);
        let _ = self.out.flush();
    }

    // Blanks out a transient line of roughly `width` characters
    fn clear(&mut self, width: usize) {
        let blank = " ".repeat(width);
        self.transient(&blank);
    }

    // A line that stays on screen
    fn persistent(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }
}

// Console output is best effort: a closed stdout must not abort a scan,
// so write errors are ignored here.
impl<W: Write> ProgressSink for ConsoleReporter<W> {
    fn loading(&mut self, reference: &str) {
        self.transient(&format!("Parsing HTML of {}", reference));
    }

    fn loaded(&mut self, reference: &str) {
        self.clear(reference.chars().count() + 16);
    }

    fn load_failed(&mut self, error: &LoadError) {
        self.persistent(&error.to_string());
    }

    fn progress(&mut self, reference: &str, position: usize, total: usize) {
        let bar = render_bar(position, total);
        self.transient(&format!(
            "Progress on {} : [{}] {}/{}",
            reference, bar, position, total
        ));
    }

    fn step_done(&mut self, reference: &str) {
        self.clear(reference.chars().count() + BAR_WIDTH + 35);
    }

    fn invalid_link(&mut self, link: &str) {
        self.persistent(&format!("Invalid URL: {}", link));
    }
}

/// Final result for one input argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    /// The input exactly as given on the command line
    pub input: String,
    /// Number of valid external links (0 when loading failed)
    pub count: usize,
    /// Why loading failed, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// One "<input> <count>" line per outcome, in the order given
pub fn summary_lines(outcomes: &[ScanOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .map(|o| format!("{} {}", o.input, o.count))
        .collect()
}

// Prints the final summary either as plain lines or as JSON
pub fn print_summary<W: Write>(
    out: &mut W,
    outcomes: &[ScanOutcome],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(outcomes)?;
        writeln!(out, "{}", json_output)?;
    } else {
        for line in summary_lines(outcomes) {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()?;
    Ok(())
}
