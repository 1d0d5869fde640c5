// src/checker/mod.rs
// =============================================================================
// This module contains the link checking pipeline for one page.
//
// Submodules:
// - html: pulls href values out of HTML text
// - filter: keeps only external http(s) links
// - http: requests each link and counts the ones answering 200
//
// This file (mod.rs) is the module root - it re-exports the public API so the
// rest of the application can write `checker::count_valid_links()` instead of
// `checker::http::count_valid_links()`.
// =============================================================================

mod filter;
mod html;
mod http;

pub use filter::external_links;
pub use html::extract_html_links;
pub use http::count_valid_links;
