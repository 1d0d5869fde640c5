// src/checker/filter.rs
// =============================================================================
// Keeps only the external links of a page.
//
// A link is external when:
// 1. it starts with "http" (so both http:// and https://), and
// 2. the reference domain does not appear anywhere in it.
//
// Rule 2 is a plain substring test, not a host comparison. A link such as
// "https://notexample.com" is dropped for domain "example.com", and so is
// "https://other.org/?ref=example.com". Changing this would change the
// counts users get, so it stays a substring test.
// =============================================================================

// Filters `links` down to the external ones, keeping their order
pub fn external_links(links: &[String], domain: &str) -> Vec<String> {
    links
        .iter()
        .filter(|link| is_external(link, domain))
        .cloned()
        .collect()
}

fn is_external(link: &str, domain: &str) -> bool {
    link.starts_with("http") && !link.contains(domain)
}
