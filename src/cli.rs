// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   extlinks https://arstechnica.com/ ./sample.html https://www.medium.com/
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::num::NonZeroUsize;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "extlinks",
    version,
    about = "Counts the working external links on web pages and local HTML files",
    long_about = "extlinks reads each given page (a URL, or a local file ending in .html), \
                  finds the links that point to other domains and counts how many of them \
                  answer with HTTP 200. One '<input> <count>' line is printed per input."
)]
pub struct Cli {
    /// URLs or local .html files to scan, processed in order
    ///
    /// No inputs is not an error: a notice is printed and nothing is scanned.
    pub inputs: Vec<String>,

    /// Maximum number of link checks in flight for one page
    ///
    /// The default of 1 checks links strictly one after another.
    #[arg(long, default_value = "1")]
    pub concurrency: NonZeroUsize,

    /// Print the final summary as JSON instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Minimum level of log records written to stderr
    ///
    /// Overrides RUST_LOG when given. Without either, only warnings and
    /// errors are logged.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

// Log verbosity accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `inputs` a Vec<String> with no #[arg]?
//    - A field without #[arg(long)] becomes a positional argument
//    - A Vec collects every remaining positional value, in order
//    - It is allowed to be empty, so `extlinks` alone still parses
//
// 2. Why NonZeroUsize for --concurrency?
//    - clap parses any type implementing FromStr
//    - NonZeroUsize rejects "0" at parse time, so the rest of the code never
//      has to handle "zero requests at once"
//
// 3. What is ValueEnum?
//    - Lets clap accept an enum from the command line
//    - `--log-level debug` becomes LogLevel::Debug
//    - Invalid values get a helpful error listing the choices
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["extlinks", "./a.html", "https://example.com"]).unwrap();
        assert_eq!(cli.inputs, vec!["./a.html", "https://example.com"]);
        assert_eq!(cli.concurrency.get(), 1);
        assert!(!cli.json);
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn test_no_inputs_parses() {
        let cli = Cli::try_parse_from(["extlinks"]).unwrap();
        assert!(cli.inputs.is_empty());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "extlinks",
            "--concurrency",
            "8",
            "--json",
            "--log-level",
            "debug",
            "https://example.com",
        ])
        .unwrap();
        assert_eq!(cli.concurrency.get(), 8);
        assert!(cli.json);
        assert_eq!(cli.log_level.map(LevelFilter::from), Some(LevelFilter::Debug));
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        assert!(Cli::try_parse_from(["extlinks", "--concurrency", "0", "x.html"]).is_err());
    }
}
