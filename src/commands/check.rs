//! Settings-change detection: decide whether a tool run must be re-triggered.

use std::path::Path;

use crate::error::Result;
use crate::settings::{Settings, Tool};
use crate::trigger;

/// Evaluate current vs. cached settings and persist the decision.
///
/// The trigger file is rewritten every cycle: set on the ineligible →
/// eligible transition, cleared otherwise. The cache is refreshed
/// unconditionally afterwards, so the next comparison sees "settings as of
/// the last check" rather than "settings as of the last change".
pub fn run(
    tool: Tool,
    project: &str,
    settings_file: &Path,
    cached_file: &Path,
    trigger_file: &Path,
) -> Result<()> {
    let settings = Settings::load(settings_file)?;
    let cached = Settings::load_cached(cached_file)?;

    let needed = trigger::trigger_needed(project, tool, &settings, cached.as_ref());
    if needed {
        log::info!(
            "settings change requires a {} run for '{project}'",
            tool.as_str()
        );
    } else {
        log::debug!("no new {} trigger for '{project}'", tool.as_str());
    }

    trigger::write_trigger(trigger_file, needed)?;
    trigger::update_cache(settings_file, cached_file)?;
    Ok(())
}
