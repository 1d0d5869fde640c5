// src/source/mod.rs
// =============================================================================
// Turns an input reference into page content plus a reference domain.
//
// An input is either:
// - a local file, if it ends with ".html"
// - a URL, otherwise
//
// Submodules:
// - file: reads local HTML files
// - web: downloads pages over HTTP(S)
// - domain: derives the reference domain for both kinds
// =============================================================================

mod domain;
mod file;
mod web;

use reqwest::Client;

use crate::error::LoadError;

use domain::{file_domain, registrable_domain};

/// What kind of input a reference is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    File,
    Url,
}

impl InputKind {
    pub fn of(reference: &str) -> Self {
        if reference.ends_with(".html") {
            InputKind::File
        } else {
            InputKind::Url
        }
    }
}

/// HTML text of one input and the domain its internal links contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub html: String,
    pub domain: String,
}

// Loads one input reference
//
// For URLs the domain is worked out before anything is downloaded: an input
// without a registrable domain fails the same way either way, and this saves
// a request.
pub async fn load(client: &Client, reference: &str) -> Result<Page, LoadError> {
    let page = match InputKind::of(reference) {
        InputKind::File => Page {
            html: file::read_html(reference).await?,
            domain: file_domain(reference),
        },
        InputKind::Url => {
            let domain = registrable_domain(reference)?;
            Page {
                html: web::fetch_html(client, reference).await?,
                domain,
            }
        }
    };

    if page.html.is_empty() {
        return Err(LoadError::EmptyContent {
            reference: reference.to_string(),
        });
    }

    Ok(page)
}
