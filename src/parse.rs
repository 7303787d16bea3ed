//! Small input parsers shared by the subcommands.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Split a separated string into trimmed, non-empty items.
pub fn string_to_list(input: &str, separator: char) -> Vec<String> {
    input
        .split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Expand glob patterns into a deduplicated, sorted set of files.
///
/// Unreadable directory entries are skipped; an invalid pattern is fatal.
pub fn glob_paths(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for pattern in patterns {
        let entries = glob::glob(pattern).map_err(|source| Error::BadPattern {
            pattern: pattern.clone(),
            source,
        })?;
        for entry in entries.flatten() {
            files.insert(entry);
        }
    }
    Ok(files.into_iter().collect())
}

/// Tilde-expand a user-supplied CLI path.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
