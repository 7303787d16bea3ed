use std::io;
use std::path::PathBuf;

/// Errors that abort the current invocation.
///
/// Every variant names the file or program involved so the message printed
/// at the top level is enough to diagnose the failure without a backtrace.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("settings file '{}' can not be opened: {source}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings file '{}' can not be parsed: {source}", path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("config file '{}' can not be encoded as an inline style: {source}", path.display())]
    StyleEncode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("trigger file '{}' could not be read: {source}", path.display())]
    TriggerRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("trigger file '{}' could not be written: {source}", path.display())]
    TriggerWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings cache '{}' could not be updated from '{}': {source}", to.display(), from.display())]
    CacheUpdate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source file '{}' can not be read: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to run '{program}': {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with code {code}")]
    ToolFailed { program: String, code: i32 },

    #[error("replacement output of '{program}' is not valid XML: {source}")]
    ReplacementXml {
        program: String,
        #[source]
        source: roxmltree::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
