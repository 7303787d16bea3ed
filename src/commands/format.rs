//! clang-format invoker: per-file execution and replacement extraction.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::commands::yaml_to_inline_json;
use crate::diagnostics::{self, Diagnostic};
use crate::error::{Error, Result};
use crate::parse;
use crate::trigger;

/// CLI sentinel selecting parent-directory search.
const STYLE_SEARCH: &str = "file";

/// Style configuration passed to clang-format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    /// Let clang-format search parent directories for a .clang-format file.
    Search,
    /// Inline style loaded from an explicit configuration document.
    Inline(PathBuf),
}

impl Style {
    pub fn from_arg(raw: &str) -> Self {
        if raw == STYLE_SEARCH {
            Style::Search
        } else {
            Style::Inline(parse::expand_path(raw))
        }
    }

    /// The value for clang-format's `--style` flag.
    fn style_arg(&self) -> Result<String> {
        match self {
            Style::Search => Ok(STYLE_SEARCH.to_string()),
            Style::Inline(path) => yaml_to_inline_json(path),
        }
    }
}

/// Options for a `clang-gate format` run.
#[derive(Debug)]
pub struct FormatOptions {
    pub executable: String,
    pub style: Style,
    /// Only run when this trigger is set; `None` means always run.
    pub trigger_file: Option<PathBuf>,
    pub warnings_as_errors: bool,
    /// Rewrite the files in place instead of reporting. Destructive.
    pub fix: bool,
    pub verbose: bool,
    pub patterns: Vec<String>,
}

/// Run clang-format over all files matching the glob patterns.
///
/// Returns the process exit code: the diagnostic count (saturating at 255)
/// when warnings are errors, 0 otherwise.
pub fn run(opts: &FormatOptions) -> Result<i32> {
    if let Some(path) = opts.trigger_file.as_deref()
        && !trigger::read_trigger(path)?
    {
        println!("[clang-format] Skipping, trigger file not set.");
        return Ok(0);
    }

    let files = parse::glob_paths(&opts.patterns)?;
    let style_arg = opts.style.style_arg()?;
    log::debug!("checking {} file(s) with style {style_arg}", files.len());

    let mut error_count = 0usize;
    let mut report = Vec::new();
    for file in &files {
        let file_diagnostics = check_file(&opts.executable, file, &style_arg, opts.fix)?;
        error_count += file_diagnostics.len();
        report.push((file.clone(), file_diagnostics));
    }

    print_report(&report, opts.warnings_as_errors, opts.verbose);

    if opts.warnings_as_errors {
        return Ok(i32::from(u8::try_from(error_count).unwrap_or(u8::MAX)));
    }
    Ok(0)
}

/// Invoke clang-format on one file and convert its replacements to diagnostics.
///
/// In fix mode the file is rewritten in place and no diagnostics are produced.
fn check_file(executable: &str, file: &Path, style_arg: &str, fix: bool) -> Result<Vec<Diagnostic>> {
    let mut command = Command::new(executable);
    command.arg(format!("--style={style_arg}"));
    if fix {
        command.arg("-i");
    } else {
        command.arg("--output-replacements-xml");
    }
    command.arg(file);
    log::debug!("running {command:?}");

    let output = command.output().map_err(|source| Error::ToolSpawn {
        program: executable.to_string(),
        source,
    })?;
    if !output.status.success() {
        return Err(Error::ToolFailed {
            program: executable.to_string(),
            code: output.status.code().unwrap_or(-1),
        });
    }
    if fix {
        return Ok(Vec::new());
    }

    let xml = String::from_utf8_lossy(&output.stdout);
    let replacements = diagnostics::parse_replacements(&xml)?;
    if replacements.is_empty() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(file).map_err(|source| Error::SourceRead {
        path: file.to_path_buf(),
        source,
    })?;
    Ok(diagnostics::map_replacements(&content, &replacements))
}

/// Print the collected diagnostics as compiler-style warnings/errors.
fn print_report(report: &[(PathBuf, Vec<Diagnostic>)], warnings_as_errors: bool, verbose: bool) {
    for (file, file_diagnostics) in report {
        let display_path = std::fs::canonicalize(file).unwrap_or_else(|_| file.clone());
        for diagnostic in file_diagnostics {
            let line = diagnostics::render(&display_path, diagnostic, warnings_as_errors);
            if verbose {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
        }
    }
}
