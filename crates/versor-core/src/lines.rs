//! Meaningful line counting.
//!
//! A line counts when it has any non-whitespace content and its first
//! non-whitespace character is not `#`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::VersorError;
use crate::Result;

/// Count the meaningful lines of a text file.
///
/// Blank lines and comment lines (leading `#`, possibly indented) are
/// skipped. A trailing newline does not add a counted line.
pub fn meaningful_line_count(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| VersorError::Storage(format!("failed to open {}: {}", path.display(), e)))?;

    let mut count = 0;
    for line in BufReader::new(file).lines() {
        let line = line
            .map_err(|e| VersorError::Storage(format!("failed to read {}: {}", path.display(), e)))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_counts_content_lines_only() {
        let path = write_fixture(
            "versor_lines_basic.txt",
            "first\n\n# comment\n  # indented comment\nsecond\n   \nthird\n",
        );
        assert_eq!(meaningful_line_count(&path).unwrap(), 3);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_trailing_blank_not_counted() {
        let path = write_fixture("versor_lines_trailing.txt", "only\n\n");
        assert_eq!(meaningful_line_count(&path).unwrap(), 1);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_empty_file() {
        let path = write_fixture("versor_lines_empty.txt", "");
        assert_eq!(meaningful_line_count(&path).unwrap(), 0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_all_comments() {
        let path = write_fixture("versor_lines_comments.txt", "# a\n#b\n   # c\n");
        assert_eq!(meaningful_line_count(&path).unwrap(), 0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = meaningful_line_count("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, VersorError::Storage(_)));
    }

    #[test]
    fn test_hash_mid_line_still_counts() {
        let path = write_fixture("versor_lines_midhash.txt", "value # note\n");
        assert_eq!(meaningful_line_count(&path).unwrap(), 1);
        std::fs::remove_file(&path).ok();
    }
}
