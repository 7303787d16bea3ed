//! Subcommand drivers: settings-change checking and trigger-gated tool runs.

/// Settings-change detection and trigger persistence.
pub mod check;
/// clang-format invoker with replacement extraction.
pub mod format;
/// clang-tidy invoker with header-filter construction.
pub mod tidy;

use std::path::Path;

use crate::error::{Error, Result};

/// Load a YAML document and re-serialize it as a single-line JSON string,
/// the inline format the clang tools accept for `--style` / `--config`.
pub fn yaml_to_inline_json(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::to_string(&value).map_err(|source| Error::StyleEncode {
        path: path.to_path_buf(),
        source,
    })
}
