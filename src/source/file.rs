// src/source/file.rs
// =============================================================================
// Reads a local .html file.
//
// The file is read as a whole and rebuilt line by line with the line
// terminators ("\n", "\r\n" and a lone "\r") dropped, so an href split
// across two lines is joined without a separator. Invalid UTF-8 is replaced
// rather than rejected: a page with one bad byte still has links worth
// checking.
// =============================================================================

use log::debug;

use crate::error::LoadError;

// Reads the file named by `reference` and returns its text
pub async fn read_html(reference: &str) -> Result<String, LoadError> {
    let bytes = tokio::fs::read(reference)
        .await
        .map_err(|source| LoadError::File {
            reference: reference.to_string(),
            source,
        })?;

    debug!("Read {} bytes from {}", bytes.len(), reference);

    Ok(join_lines(&String::from_utf8_lossy(&bytes)))
}

// Concatenates all lines; every '\n' and '\r' is a line break
fn join_lines(text: &str) -> String {
    text.split(['\n', '\r']).collect()
}
