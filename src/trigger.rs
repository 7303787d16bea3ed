//! Trigger file signalling, settings-change detection, and the settings cache.
//!
//! The trigger file carries a single-bit decision to the build orchestrator:
//! present and marked means "run the tool", empty means "skip". The cache is
//! a byte-identical copy of the settings document from the previous
//! evaluation and is refreshed unconditionally after every run, so the next
//! comparison always sees "settings as of the last check".
//!
//! Neither file is lock-protected; concurrent invocations against the same
//! paths race, which is a documented limitation of the one-shot model.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::settings::{Settings, Tool};

/// Sentinel written to the trigger file when a tool run is required.
pub const TRIGGER_CONTENT: &str = "RUN";

/// Sentinel written by older releases; still honored on the read side.
const LEGACY_TRIGGER_CONTENT: &str = "INIT";

/// True only on the ineligible → eligible transition.
///
/// A flip from eligible to ineligible is not flagged: the orchestrator only
/// needs to know when a tool newly becomes required, turning it off does not
/// force a re-run. A missing cached snapshot counts as "nothing was eligible
/// before".
pub fn trigger_needed(
    project: &str,
    tool: Tool,
    current: &Settings,
    cached: Option<&Settings>,
) -> bool {
    let now = current.should_run(project, tool);
    let before = cached.is_some_and(|s| s.should_run(project, tool));
    now && !before
}

/// Persist the boolean decision: the sentinel when set, an empty file otherwise.
pub fn write_trigger(path: &Path, trigger: bool) -> Result<()> {
    let content = if trigger { TRIGGER_CONTENT } else { "" };
    fs::write(path, content).map_err(|source| Error::TriggerWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// True iff the first line of the trigger file is the sentinel.
///
/// A missing file is a hard error here. The invoker CLIs treat an
/// *unconfigured* trigger as "always run", but once a trigger path is given
/// it must exist.
pub fn read_trigger(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path).map_err(|source| Error::TriggerRead {
        path: path.to_path_buf(),
        source,
    })?;
    let first = content.lines().next().unwrap_or("");
    Ok(first == TRIGGER_CONTENT || first == LEGACY_TRIGGER_CONTENT)
}

/// Byte-for-byte copy of the settings document onto the cache path.
pub fn update_cache(source: &Path, cache: &Path) -> Result<()> {
    fs::copy(source, cache)
        .map(|_| ())
        .map_err(|io_err| Error::CacheUpdate {
            from: source.to_path_buf(),
            to: cache.to_path_buf(),
            source: io_err,
        })
}
