// src/source/web.rs
// =============================================================================
// Downloads a web page.
//
// Only transport failures (bad syntax, DNS, refused connection, broken body)
// are errors here. A page that answers with a non-2xx status is treated as
// having no content; the caller then reports it as invalid HTML.
//
// Rust concepts:
// - async/await with reqwest
// - map_err: converting a library error into our own error type
// =============================================================================

use log::{debug, warn};
use reqwest::Client;

use crate::error::LoadError;

// Fetches the page body at `reference` as text
pub async fn fetch_html(client: &Client, reference: &str) -> Result<String, LoadError> {
    let response = client
        .get(reference)
        .send()
        .await
        .map_err(|source| url_error(reference, source))?;

    let status = response.status();
    if !status.is_success() {
        warn!("{} answered HTTP {}, treating page as empty", reference, status.as_u16());
        return Ok(String::new());
    }

    let html = response
        .text()
        .await
        .map_err(|source| url_error(reference, source))?;

    debug!("Fetched {} bytes from {}", html.len(), reference);
    Ok(html)
}

fn url_error(reference: &str, source: reqwest::Error) -> LoadError {
    LoadError::Url {
        reference: reference.to_string(),
        source,
    }
}
