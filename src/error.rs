// src/error.rs
// =============================================================================
// Error types for the two places where a scan can go wrong:
//
// - LoadError: an input could not be turned into HTML + a reference domain.
//   The scan records a count of 0 for that input and moves on.
// - LinkValidationError: a single link could not be requested. The link is
//   simply not counted and an "Invalid URL" diagnostic is shown.
//
// Neither error ever stops the program. The Display text of each LoadError
// variant is exactly the line printed to the console.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[source]: keeps the underlying cause so it can be logged
// =============================================================================

use thiserror::Error;

/// Failure to turn an input reference into page content.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The `.html` file is missing or cannot be read
    #[error("Error opening file {reference}. File may not exist")]
    File {
        reference: String,
        #[source]
        source: std::io::Error,
    },

    /// The URL is malformed, unreachable or its body could not be read
    #[error("Error opening {reference}. URL syntax maybe wrong")]
    Url {
        reference: String,
        #[source]
        source: reqwest::Error,
    },

    /// The URL's host has no registrable domain (IP address, single label,
    /// unknown suffix, or no host at all)
    #[error("Error opening {reference}. URL syntax maybe wrong")]
    Domain { reference: String, reason: String },

    /// Loading worked but produced no text
    #[error("{reference} Invalid HTML. Unable to parse")]
    EmptyContent { reference: String },
}

impl LoadError {
    /// A short, log-friendly description of what actually went wrong.
    ///
    /// The Display text is fixed per variant, so this is what ends up in
    /// debug logs and in the JSON summary.
    pub fn detail(&self) -> String {
        match self {
            LoadError::File { source, .. } => source.to_string(),
            LoadError::Url { source, .. } => source.to_string(),
            LoadError::Domain { reason, .. } => reason.clone(),
            LoadError::EmptyContent { .. } => "empty content".to_string(),
        }
    }
}

/// Failure to request one external link.
#[derive(Debug, Error)]
pub enum LinkValidationError {
    #[error("malformed URL: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_message() {
        let err = LoadError::File {
            reference: "./missing.html".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Error opening file ./missing.html. File may not exist"
        );
        assert_eq!(err.detail(), "not found");
    }

    #[test]
    fn test_domain_error_uses_url_message() {
        let err = LoadError::Domain {
            reference: "http://localhost".to_string(),
            reason: "no registrable domain".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error opening http://localhost. URL syntax maybe wrong"
        );
    }

    #[test]
    fn test_empty_content_message() {
        let err = LoadError::EmptyContent {
            reference: "./blank.html".to_string(),
        };
        assert_eq!(err.to_string(), "./blank.html Invalid HTML. Unable to parse");
    }

    #[test]
    fn test_malformed_link_error_from_parse_error() {
        let err: LinkValidationError = url::Url::parse("http//nope").unwrap_err().into();
        assert!(matches!(err, LinkValidationError::Malformed(_)));
    }
}
