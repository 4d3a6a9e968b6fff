//! Plain-text manifest files: one filename per line, `#` comments.

use super::ManifestError;

/// Splits manifest text into entries, returning each with its 1-based line number.
///
/// Leading/trailing whitespace is trimmed; blank lines and lines whose first
/// non-space character is `#` are skipped.
pub(super) fn parse_lines(text: &str) -> Vec<(usize, String)> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some((i + 1, line.to_string()))
            }
        })
        .collect()
}

/// Checks that `name` is a single flat path component.
pub(super) fn validate_name(name: &str) -> Result<(), ManifestError> {
    let reason = if name.is_empty() {
        Some("empty name")
    } else if name == "." || name == ".." {
        Some("reserved name")
    } else if name.contains('/') || name.contains('\\') {
        Some("path separators are not allowed")
    } else if name.chars().any(|c| c == '\0' || c.is_control()) {
        Some("control characters are not allowed")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ManifestError::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
