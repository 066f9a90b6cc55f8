// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, LevelFilter, Level, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use projdoc::app_config::LogLevel;
use projdoc::app_controller::{CheckReport, FileOutcome};
use projdoc::{Config, Controller, Locale};

/// CLI Wrapper for Locale to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLocale {
    Hebrew,
    English,
}

impl From<CliLocale> for Locale {
    fn from(cli_locale: CliLocale) -> Self {
        match cli_locale {
            CliLocale::Hebrew => Locale::Primary,
            CliLocale::English => Locale::Secondary,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render form snapshots to documents (default command)
    #[command(alias = "export")]
    Render(RenderArgs),

    /// Validate a snapshot and report word counts without writing anything
    Check(CheckArgs),

    /// Generate shell completions for projdoc
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by every command that loads snapshots
#[derive(Args, Debug, Clone)]
struct SharedArgs {
    /// Use this locale regardless of the snapshot's language
    #[arg(short = 'L', long, value_enum)]
    locale: Option<CliLocale>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Snapshot file or directory of snapshots to render
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Directory to write documents to
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    #[command(flatten)]
    shared: SharedArgs,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Snapshot file to check
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    #[command(flatten)]
    shared: SharedArgs,
}

/// projdoc - Project document renderer
///
/// Renders saved project-document forms into styled Word documents in
/// Hebrew (right-to-left) or English.
#[derive(Parser, Debug)]
#[command(name = "projdoc")]
#[command(author = "projdoc Team")]
#[command(version = "1.0.0")]
#[command(about = "Locale-aware project document renderer")]
#[command(long_about = "projdoc renders saved project-document forms into styled Word documents.

EXAMPLES:
    projdoc form.json                          # Render next to the snapshot
    projdoc -f form.json                       # Force overwrite existing files
    projdoc -o out/ forms/                     # Render a whole directory into out/
    projdoc -L english form.json               # Render in English regardless of the snapshot
    projdoc check form.json                    # Report word counts and warnings
    projdoc completions bash > projdoc.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically. Word ceilings, fonts, labels and section order
    of both locales live in the `locales` table.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Snapshot file or directory of snapshots to render
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Directory to write documents to
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    #[command(flatten)]
    shared: SharedArgs,
}

// @struct: Custom logger implementation
// The active level is the global `log::max_level`, so it can be changed after init
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => "",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI colour prefix for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());
            let emoji = Self::get_emoji_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Start at info; the level is updated once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "projdoc", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Render(args)) => run_render(args).await,
        Some(Commands::Check(args)) => run_check(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let render_args = RenderArgs {
                input_path,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                shared: cli.shared,
            };
            run_render(render_args).await
        }
    }
}

/// Load the configuration, apply the command line log level and build a controller
fn build_controller(options: &SharedArgs) -> Result<Controller> {
    // Apply a command line log level before the config is read so loading is logged at that level
    let cli_level = options.log_level.clone().map(LogLevel::from);
    if let Some(level) = &cli_level {
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    match cli_level {
        Some(level) => config.log_level = level,
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    let controller = Controller::with_config(config)?
        .with_locale_override(options.locale.map(Locale::from));
    Ok(controller)
}

async fn run_render(options: RenderArgs) -> Result<()> {
    let controller = build_controller(&options.shared)?;
    let output_dir = options.output_dir.as_deref();

    if options.input_path.is_file() {
        // Process a single file; the write is awaited so exit never drops it
        if let FileOutcome::Skipped(path) = controller.run(&options.input_path, output_dir, options.force_overwrite).await? {
            info!("Skipped {:?}", path);
        }
        Ok(())
    } else if options.input_path.is_dir() {
        let summary = controller.run_folder(&options.input_path, output_dir, options.force_overwrite).await?;
        if summary.failed > 0 {
            return Err(anyhow!("{} of {} files failed to render", summary.failed, summary.written + summary.skipped + summary.failed));
        }
        Ok(())
    } else {
        Err(anyhow!("Input path does not exist: {:?}", options.input_path))
    }
}

fn run_check(options: CheckArgs) -> Result<()> {
    let controller = build_controller(&options.shared)?;
    let report = controller.check(&options.input_file)?;

    print_report(&report);

    if let Some(error) = report.blocking_error {
        return Err(anyhow!("{:?} cannot be exported: {}", options.input_file, error));
    }

    info!("{:?} is ready for export", options.input_file);
    Ok(())
}

fn print_report(report: &CheckReport) {
    println!("Locale: {}", report.locale.display_name());
    for count in &report.word_counts {
        let marker = if count.is_within_limit() { "ok" } else { "over" };
        println!("  {} [{}]", count, marker);
    }

    if report.warnings.is_empty() {
        println!("No warnings");
    } else {
        println!("Warnings:");
        for warning in &report.warnings {
            println!("  - {}", warning);
        }
    }
}
