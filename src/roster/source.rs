// Identifier source
// Reads the identifier file fresh on every call

use std::path::Path;
use tokio::fs;

use super::LookupError;

/// Read identifiers from `path`: one per line, trimmed, blank lines skipped
pub async fn read_identifiers(path: &Path) -> Result<Vec<String>, LookupError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| LookupError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(parse_identifiers(&content))
}

/// Split file content into non-empty trimmed lines, preserving order.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_identifiers(content: &str) -> Vec<String> {
    content
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
