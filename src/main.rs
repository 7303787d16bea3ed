//! clang-gate binary: check / format / tidy subcommands.
//!
//! `check` compares the current settings document against the cached snapshot
//! from the previous build and persists the decision in a trigger file the
//! build system consumes. `format` and `tidy` wrap the clang tools, honoring
//! the trigger when one is configured.

use std::panic::AssertUnwindSafe;

use clap::{Args, Parser, Subcommand};

use clang_gate::commands::format::{FormatOptions, Style};
use clang_gate::commands::tidy::TidyOptions;
use clang_gate::commands::{check, format, tidy};
use clang_gate::parse;
use clang_gate::settings::Tool;
use clang_gate::{Result, logging};

/// Exit code distinguishing an unexpected crash from tool diagnostics.
const EXIT_PANIC: i32 = -2;

#[derive(Parser, Debug)]
#[command(
    name = "clang-gate",
    version,
    about = "Gate clang-format and clang-tidy runs behind project settings"
)]
struct Cli {
    /// Output is printed to stderr instead of stdout; enables debug logging.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a settings change requires a new tool run.
    Check(CheckArgs),
    /// Run clang-format on the given files.
    Format(FormatArgs),
    /// Run clang-tidy on the given files.
    Tidy(TidyArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Name of the clang tool.
    #[arg(long, value_enum)]
    tool: Tool,
    /// CMake project name to check.
    #[arg(long)]
    project_name: String,
    /// Path of the settings file.
    #[arg(long)]
    settings_file: String,
    /// Path of the settings cache file to generate.
    #[arg(long)]
    settings_file_cached: String,
    /// Trigger file generated for the build system.
    #[arg(long)]
    trigger_file: String,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// The clang-format executable.
    #[arg(long = "clang-format", default_value = "clang-format")]
    executable: String,
    /// Style configuration file; 'file' searches parent directories instead.
    #[arg(long, default_value = "file")]
    config_file: String,
    /// Only run when this trigger file is set; omit to always run.
    #[arg(long)]
    trigger_file: Option<String>,
    /// Treat formatting warnings as errors.
    #[arg(long)]
    error: bool,
    /// Fix the formatting issues in place.
    #[arg(long)]
    fix: bool,
    /// File path glob patterns to format.
    #[arg(required = true)]
    paths: Vec<String>,
}

#[derive(Args, Debug)]
struct TidyArgs {
    /// The clang-tidy executable.
    #[arg(long = "clang-tidy", default_value = "clang-tidy")]
    executable: String,
    /// Configuration file; omit to let clang-tidy discover .clang-tidy files.
    #[arg(long)]
    config_file: Option<String>,
    /// Only run when this trigger file is set; omit to always run.
    #[arg(long)]
    trigger_file: Option<String>,
    /// Directory with compile_commands.json; fixes are exported there.
    #[arg(long)]
    build_directory: String,
    /// Comma-separated list of header directories to check.
    #[arg(long, default_value = "")]
    header_dirs: String,
    /// Comma-separated list of excluded header directories.
    /// Has no effect unless --header-dirs is set.
    #[arg(long, default_value = "")]
    exclude_header_dirs: String,
    /// Header filter overriding the config file.
    /// Has no effect when --header-dirs is set.
    #[arg(long)]
    header_filter: Option<String>,
    /// Comma-separated list of checks to add or remove.
    #[arg(long)]
    checks: Option<String>,
    /// Treat warnings as errors.
    #[arg(long)]
    error: bool,
    /// Fix the issues discovered by clang-tidy (not recommended).
    #[arg(long)]
    fix: bool,
    /// File path glob patterns to analyze.
    #[arg(required = true)]
    paths: Vec<String>,
}

fn run(cli: Cli) -> Result<i32> {
    let verbose = cli.verbose;
    match cli.command {
        Commands::Check(args) => {
            check::run(
                args.tool,
                &args.project_name,
                &parse::expand_path(&args.settings_file),
                &parse::expand_path(&args.settings_file_cached),
                &parse::expand_path(&args.trigger_file),
            )?;
            Ok(0)
        }
        Commands::Format(args) => format::run(&FormatOptions {
            executable: args.executable,
            style: Style::from_arg(&args.config_file),
            trigger_file: args.trigger_file.as_deref().map(parse::expand_path),
            warnings_as_errors: args.error,
            fix: args.fix,
            verbose,
            patterns: args.paths,
        }),
        Commands::Tidy(args) => tidy::run(&TidyOptions {
            executable: args.executable,
            config_file: args.config_file.as_deref().map(parse::expand_path),
            trigger_file: args.trigger_file.as_deref().map(parse::expand_path),
            build_directory: parse::expand_path(&args.build_directory),
            header_dirs: parse::string_to_list(&args.header_dirs, ','),
            exclude_header_dirs: parse::string_to_list(&args.exclude_header_dirs, ','),
            header_filter: args.header_filter,
            checks: args.checks,
            warnings_as_errors: args.error,
            fix: args.fix,
            verbose,
            patterns: args.paths,
        }),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // A panic is an internal fault, reported with a distinct exit code so the
    // build system can tell it apart from tool diagnostics.
    match std::panic::catch_unwind(AssertUnwindSafe(|| run(cli))) {
        Ok(Ok(code)) => std::process::exit(code),
        Ok(Err(err)) => {
            log::error!("{err}");
            std::process::exit(1);
        }
        Err(_) => std::process::exit(EXIT_PANIC),
    }
}
