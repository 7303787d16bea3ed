//! Settings document: loading, defaults, and per-project eligibility.

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{Error, Result};

/// The clang tool a gating decision applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tool {
    ClangFormat,
    ClangTidy,
}

impl Tool {
    pub fn as_str(self) -> &'static str {
        match self {
            Tool::ClangFormat => "clang-format",
            Tool::ClangTidy => "clang-tidy",
        }
    }
}

fn default_true() -> bool {
    true
}

/// Per-project tool settings, deserialized from a YAML document.
///
/// Every key is optional: a missing enable flag means the tool runs, missing
/// lists mean no project is singled out. The whitelist admits only listed
/// projects once it is non-empty; the blacklist always wins over it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_true")]
    pub run_clang_format: bool,
    #[serde(default = "default_true")]
    pub run_clang_tidy: bool,
    #[serde(default)]
    pub whitelist: Vec<String>,
    #[serde(default)]
    pub blacklist: Vec<String>,
}

impl Settings {
    /// Load a settings document. I/O and parse failures are fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the cached settings snapshot from the previous evaluation.
    ///
    /// A missing file or a blank document yields `None` — nothing was
    /// eligible before. A present but malformed document is still an error.
    pub fn load_cached(path: &Path) -> Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::SettingsRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        let settings = serde_yaml::from_str(&content).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(settings))
    }

    /// Decide whether the given tool should run for the given project.
    ///
    /// An empty whitelist passes every project; blacklist membership
    /// overrides whitelist membership.
    pub fn should_run(&self, project: &str, tool: Tool) -> bool {
        let enabled = match tool {
            Tool::ClangFormat => self.run_clang_format,
            Tool::ClangTidy => self.run_clang_tidy,
        };
        let allowed = self.whitelist.is_empty() || self.whitelist.iter().any(|p| p == project);
        let denied = self.blacklist.iter().any(|p| p == project);
        enabled && allowed && !denied
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            run_clang_format: true,
            run_clang_tidy: true,
            whitelist: Vec::new(),
            blacklist: Vec::new(),
        }
    }
}
