// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context as _, Result};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod catalog;
mod errors;
mod file_utils;
mod language_utils;
mod repository;
mod stats;
mod translator;
mod validation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a translation for a (context, source) pair
    Query(QueryArgs),

    /// Report translation coverage statistics
    Stats(StatsArgs),

    /// Validate catalogs and report findings
    Validate(ValidateArgs),

    /// List the locales served by a catalog directory
    List(ListArgs),

    /// Rewrite a catalog in the canonical layout
    Fmt(FmtArgs),

    /// Export a catalog as JSON
    Export(ExportArgs),

    /// Generate shell completions for tscat
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct QueryArgs {
    /// Catalog file to query
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Context name, e.g. 'MainWindow'
    #[arg(value_name = "CONTEXT")]
    context: String,

    /// Source string to look up
    #[arg(value_name = "SOURCE")]
    source: String,

    /// Disambiguation comment
    #[arg(long)]
    comment: Option<String>,

    /// Print only real entries and exit non-zero on a miss
    #[arg(short, long)]
    raw: bool,
}

#[derive(Parser, Debug)]
struct StatsArgs {
    /// Catalog file or directory of catalogs
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Emit machine-readable JSON
    #[arg(short, long)]
    json: bool,

    /// Include a per-context breakdown
    #[arg(short, long)]
    per_context: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Catalog file or directory of catalogs
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Fail on warnings as well as errors
    #[arg(short, long)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Directory of per-language catalogs
    #[arg(value_name = "DIR")]
    dir: PathBuf,

    /// Show the catalog that would serve this locale; falls back to the
    /// configured default locale. A miss exits non-zero.
    #[arg(long)]
    locale: Option<String>,
}

#[derive(Parser, Debug)]
struct FmtArgs {
    /// Catalog file to rewrite
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output file; rewrites in place when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Catalog file to export
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

/// tscat - Qt Linguist TS catalog toolkit
///
/// Parses, queries, validates and measures Qt Linguist `.ts` translation
/// catalogs.
#[derive(Parser, Debug)]
#[command(name = "tscat")]
#[command(version = "1.0.0")]
#[command(about = "Qt Linguist TS catalog toolkit")]
#[command(long_about = "tscat parses Qt Linguist .ts translation catalogs and answers
(context, source) lookups the way the consuming UI would, with the standard
fall-back-to-source policy for missing entries.

EXAMPLES:
    tscat query app_zh-cn.ts MainWindow 'E&xit'     # Look up one string
    tscat query -r app_zh-cn.ts MainWindow G3D      # Raw mode: miss exits non-zero
    tscat stats languages/ --per-context            # Coverage for a catalog directory
    tscat validate languages/ --strict              # QA findings, warnings fatal
    tscat list languages/ --locale zh               # Which catalog serves zh?
    tscat export app_zh-cn.ts --pretty              # JSON rendition of the model
    tscat completions bash > tscat.bash             # Generate bash completions

CONFIGURATION:
    Configuration is stored in tscat.json by default. You can specify a
    different config file with --config. If the config file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = app_config::DEFAULT_CONFIG_FILE, global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());

            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_level));
    }

    // Completions need no configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "tscat", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_or_create_config(&cli)?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;

    let ok = match &cli.command {
        Commands::Query(args) => controller.run_query(
            &args.file,
            &args.context,
            &args.source,
            args.comment.as_deref(),
            args.raw,
        )?,
        Commands::Stats(args) => {
            controller.run_stats(&args.path, args.json, args.per_context)?;
            true
        }
        Commands::Validate(args) => controller.run_validate(&args.path, args.strict)?,
        Commands::List(args) => controller.run_list(&args.dir, args.locale.as_deref())?,
        Commands::Fmt(args) => {
            controller.run_fmt(&args.file, args.output.as_deref())?;
            true
        }
        Commands::Export(args) => {
            controller.run_export(&args.file, args.output.as_deref(), args.pretty)?;
            true
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    // Raw-mode misses, unserved locales and failed validation surface
    // through the exit code
    let raw_miss = matches!(&cli.command, Commands::Query(args) if args.raw && !ok);
    let other_failed =
        matches!(&cli.command, Commands::Validate(_) | Commands::List(_)) && !ok;
    if raw_miss || other_failed {
        std::process::exit(1);
    }

    Ok(())
}

/// Load the configuration file, creating a default one when missing
fn load_or_create_config(cli: &CommandLineOptions) -> Result<Config> {
    let config_path = Config::resolve_path(&cli.config_path);

    let mut config = if config_path.exists() {
        Config::from_file(&config_path)?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path.display()
        );

        let config = Config::default();
        config
            .save(&config_path)
            .with_context(|| format!("Failed to write default config to {}", config_path.display()))?;
        config
    };

    // Update log level in config if specified via command line
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}
