// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr)
// 3. Scan every input in order, showing live progress on stdout
// 4. Print one "<input> <count>" line per input
// 5. Exit with 0 (the scan always completes) or 2 if something outside the
//    scan itself broke, like building the HTTP client
//
// Rust concepts used:
// - async/await: page fetches and link checks are network I/O
// - Result<T, E>: for error handling
// - Modules: each stage of the pipeline lives in its own file
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - link extraction, filtering and validation
mod cli; // src/cli.rs - command-line parsing
mod error; // src/error.rs - load and validation errors
mod logging; // src/logging.rs - env_logger setup
mod report; // src/report.rs - progress display and summary
mod scan; // src/scan.rs - per-input pipeline
mod source; // src/source/ - reading files and fetching pages

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use reqwest::Client;

use cli::Cli;
use report::ConsoleReporter;
use scan::ScanOptions;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Only the runtime shell can fail; print the whole context chain
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = all inputs processed (even if some or all of them failed)
//   Err   = the run could not be set up or its summary could not be written
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    logging::init_logger(cli.log_level.map(Into::into));

    // One client for the whole run, so connections are pooled.
    // No timeout or redirect settings: the client's defaults apply.
    let client = Client::builder()
        .build()
        .context("Failed to create HTTP client")?;

    let options = ScanOptions {
        concurrency: cli.concurrency,
    };

    // With no inputs this only prints a notice
    let mut reporter = ConsoleReporter::stdout();
    let mut stdout = std::io::stdout();
    scan::run(&client, &cli.inputs, options, cli.json, &mut reporter, &mut stdout).await?;

    Ok(0)
}
