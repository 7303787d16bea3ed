//! clang-tidy invoker: header-filter construction and aggregated execution.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use crate::commands::yaml_to_inline_json;
use crate::error::{Error, Result};
use crate::parse;
use crate::trigger;

/// Options for a `clang-gate tidy` run.
#[derive(Debug)]
pub struct TidyOptions {
    pub executable: String,
    /// YAML config document; `None` lets clang-tidy discover .clang-tidy files.
    pub config_file: Option<PathBuf>,
    /// Only run when this trigger is set; `None` means always run.
    pub trigger_file: Option<PathBuf>,
    /// Where compile_commands.json lives; fixes are exported here too.
    pub build_directory: PathBuf,
    pub header_dirs: Vec<String>,
    pub exclude_header_dirs: Vec<String>,
    /// Fallback filter, overridden when header_dirs is set.
    pub header_filter: Option<String>,
    /// Extra checks to add or remove, passed through verbatim.
    pub checks: Option<String>,
    pub warnings_as_errors: bool,
    /// Apply the suggested fixes in place. Destructive.
    pub fix: bool,
    pub verbose: bool,
    pub patterns: Vec<String>,
}

/// Run one aggregated clang-tidy invocation over all matching files.
///
/// The tool's native exit code is propagated verbatim.
pub fn run(opts: &TidyOptions) -> Result<i32> {
    if let Some(path) = opts.trigger_file.as_deref()
        && !trigger::read_trigger(path)?
    {
        println!("[clang-tidy] Skipping, trigger file not set.");
        return Ok(0);
    }

    let header_filter = build_header_filter(
        opts.header_filter.as_deref(),
        &opts.header_dirs,
        &opts.exclude_header_dirs,
    );
    let config = match &opts.config_file {
        Some(path) => yaml_to_inline_json(path)?,
        None => String::new(),
    };
    let files = parse::glob_paths(&opts.patterns)?;

    let mut command = Command::new(&opts.executable);
    command
        .arg(format!("--config={config}"))
        .arg(format!("-p={}", opts.build_directory.display()))
        .arg(format!("--header-filter={header_filter}"))
        .arg(format!(
            "--export-fixes={}/clang-tidy-fixes.yaml",
            opts.build_directory.display()
        ))
        .arg("--extra-arg=-w");
    if opts.warnings_as_errors {
        command.arg("--warnings-as-errors=*");
    }
    if opts.fix {
        command.arg("--fix");
    }
    if let Some(checks) = &opts.checks {
        command.arg(format!("--checks={checks}"));
    }
    for file in &files {
        command.arg(std::fs::canonicalize(file).unwrap_or_else(|_| file.clone()));
    }
    log::debug!("running {command:?}");

    let output = command.output().map_err(|source| Error::ToolSpawn {
        program: opts.executable.clone(),
        source,
    })?;

    // Route the tool's own output to the requested stream.
    if opts.verbose {
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all(&output.stdout);
        let _ = stderr.write_all(&output.stderr);
    } else {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(&output.stdout);
        let _ = stdout.write_all(&output.stderr);
    }

    Ok(output.status.code().unwrap_or(-1))
}

/// Build the `--header-filter` regular expression.
///
/// With include directories set, excluded directories are cut out first via a
/// negative lookahead and the includes wrap the remainder. Without include
/// directories the explicit fallback pattern applies, or match-all.
/// Conflicting combinations are ignored with a warning.
pub fn build_header_filter(
    fallback: Option<&str>,
    header_dirs: &[String],
    exclude_header_dirs: &[String],
) -> String {
    if header_dirs.is_empty() {
        if !exclude_header_dirs.is_empty() {
            log::warn!("header excludes ignored, no header directories are set");
        }
        return match fallback {
            Some(filter) if !filter.is_empty() => filter.to_string(),
            _ => ".*".to_string(),
        };
    }
    if fallback.is_some_and(|f| !f.is_empty()) {
        log::warn!("explicit header filter ignored, header directories are set");
    }

    let mut filter = String::from("^");
    if !exclude_header_dirs.is_empty() {
        filter = format!("(?!.*{}/", exclude_header_dirs[0]);
        for dir in &exclude_header_dirs[1..] {
            filter.push_str(&format!("|{dir}/"));
        }
        filter.push(')');
    }

    filter.push_str(&format!("({}/", header_dirs[0]));
    for dir in &header_dirs[1..] {
        filter.push_str(&format!("|{dir}/"));
    }
    filter.push_str(").*$");
    filter
}
