// src/logging.rs
// =============================================================================
// Logger setup.
//
// Log records go to stderr through env_logger, so they never mix with the
// progress bar and the summary on stdout.
//
// - Without --log-level, RUST_LOG decides (default: warn)
// - With --log-level, the flag wins and the HTTP stack is capped at info
//
//   RUST_LOG=extlinks=debug extlinks https://example.com
//   extlinks --log-level debug https://example.com
// =============================================================================

use env_logger::{Builder, Env};
use log::LevelFilter;

pub fn init_logger(level: Option<LevelFilter>) {
    let env = Env::default().default_filter_or("warn");

    // A second init (e.g. from tests) is harmless
    let _ = logger_builder(env, level).try_init();
}

fn logger_builder(env: Env<'_>, level: Option<LevelFilter>) -> Builder {
    let mut builder = Builder::from_env(env);

    if let Some(level) = level {
        builder.filter_level(level);
        // HTTP stack internals are only interesting when asked for explicitly
        builder.filter_module("hyper", LevelFilter::Info.min(level));
        builder.filter_module("reqwest", LevelFilter::Info.min(level));
        builder.filter_module("rustls", LevelFilter::Info.min(level));
        builder.filter_module("extlinks", level);
    }

    builder
}
