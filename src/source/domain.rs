// src/source/domain.rs
// =============================================================================
// Works out the "reference domain" for an input.
//
// Links that contain this string are treated as internal and skipped, so it
// only needs to be a good substring key, not a full host:
//
// - for a local file: the file name without the .html extension
//   ("./site/example.html" -> "example")
// - for a URL: the registrable domain of its host under the Public Suffix List
//   ("https://www.example.co.uk/news" -> "example.co.uk")
//
// We use the `psl` crate, which compiles the Public Suffix List into the
// binary, so no network access or list download is needed.
//
// Rust concepts:
// - Pattern matching on enums (url::Host)
// - Option combinators (ok_or_else) to turn "missing" into errors
// =============================================================================

use psl::Type;
use url::{Host, Url};

use crate::error::LoadError;

// Derives the reference domain of a local HTML file
//
// Everything from the first ".html" onwards is dropped, then we keep only the
// last path segment. Both '/' and '\' count as separators so Windows-style
// paths work too.
//
// Examples:
//   "./sample.html"           -> "sample"
//   "C:\\pages\\example.html" -> "example"
//   "site.html"               -> "site"
pub fn file_domain(reference: &str) -> String {
    let stem = reference.split(".html").next().unwrap_or(reference);
    stem.rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(stem)
        .to_string()
}

// Reduces a URL's host to its registrable domain
//
// Only ICANN registry suffixes count here; the private section of the list
// (blogspot.com, github.io, ...) is ignored, so "user.github.io" reduces to
// "github.io" and "blogspot.com" is a domain of its own.
//
// Returns LoadError::Domain when the URL cannot be parsed, has no host, uses
// an IP address, or its host is not below a known registry suffix. We never
// guess a fallback domain: a wrong key would silently change which links count.
pub fn registrable_domain(reference: &str) -> Result<String, LoadError> {
    let fail = |reason: String| LoadError::Domain {
        reference: reference.to_string(),
        reason,
    };

    let parsed = Url::parse(reference).map_err(|e| fail(format!("invalid URL: {}", e)))?;

    let host = match parsed.host() {
        Some(Host::Domain(host)) => host,
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {
            return Err(fail("IP addresses do not have registrable domains".to_string()));
        }
        None => return Err(fail("URL has no host".to_string())),
    };

    // A fully qualified host may end with a dot
    let host = host.trim_end_matches('.').to_ascii_lowercase();

    let suffix_start = registry_suffix_start(&host)
        .ok_or_else(|| fail(format!("'{}' is not under a known registry suffix", host)))?;

    if suffix_start == 0 {
        return Err(fail(format!("'{}' is itself a public suffix", host)));
    }

    // One label above the suffix; suffix_start - 1 is the separating dot
    let domain_start = host[..suffix_start - 1]
        .rfind('.')
        .map(|dot| dot + 1)
        .unwrap_or(0);

    Ok(host[domain_start..].to_string())
}

// Byte offset where the longest ICANN suffix of `host` begins
//
// Candidates are tried longest first: "a.b.co.uk", "b.co.uk", "co.uk", "uk".
fn registry_suffix_start(host: &str) -> Option<usize> {
    std::iter::once(0)
        .chain(host.match_indices('.').map(|(dot, _)| dot + 1))
        .find(|&start| is_registry_suffix(&host[start..]))
}

// True when `candidate` as a whole is an ICANN rule of the Public Suffix List
fn is_registry_suffix(candidate: &str) -> bool {
    psl::suffix(candidate.as_bytes()).is_some_and(|suffix| {
        suffix.is_known()
            && matches!(suffix.typ(), Some(Type::Icann))
            && suffix.as_bytes() == candidate.as_bytes()
    })
}
