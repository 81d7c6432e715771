//! Datereplay - restore file dates after copies, syncs and extractions.
//!
//! This is the main entry point for the datereplay CLI.

mod commands;

use clap::{Parser, Subcommand};
use commands::*;
use datereplay_core::{Config, EngineError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "datereplay")]
#[command(
    author,
    version,
    about = "Capture file timestamps and replay them onto matching files",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect timestamps from a directory and save them to a file
    Collect {
        /// Directory to collect from
        dir: PathBuf,
        /// Process subfolders
        #[arg(short, long)]
        recursive: bool,
        /// Snapshot file to write
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Replay saved timestamps onto the files of a directory
    Replay {
        /// Directory to replay onto
        dir: PathBuf,
        /// Process subfolders
        #[arg(short, long)]
        recursive: bool,
        /// Snapshot file to read
        #[arg(short = 'i', long = "in")]
        input: PathBuf,
        /// Regex applied to each relative path before lookup
        #[arg(long, requires = "replace")]
        pattern: Option<String>,
        /// Replacement for --pattern ($1, ${name} expand capture groups)
        #[arg(long, requires = "pattern")]
        replace: Option<String>,
        /// Keep going when a file's timestamps cannot be set
        #[arg(long)]
        continue_on_error: bool,
        /// Report matches without changing any file
        #[arg(long)]
        dry_run: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the entries of a snapshot file
    Show {
        /// Snapshot file to read
        #[arg(short = 'i', long = "in")]
        input: PathBuf,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Preview how a rewrite pattern transforms a relative path
    Rewrite {
        /// Relative path to transform
        path: String,
        /// Regex to match
        #[arg(long)]
        pattern: String,
        /// Replacement text
        #[arg(long)]
        replace: String,
    },
    /// Show configuration
    Config,
    /// Print version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, sources) = Config::load(Some(cwd.as_path())).map_err(EngineError::from)?;

    let log_file = init_logging(cli.verbose, cli.log_file, config.log_level)?;
    if let Some(path) = &log_file {
        tracing::debug!(path = %path.display(), "Logging to file");
    }
    tracing::debug!(sources = ?sources, "Configuration loaded");

    match cli.command {
        Commands::Collect {
            dir,
            recursive,
            out,
        } => {
            let config = config.merge(flag_overrides(recursive, false));
            handle_collect(&dir, &out, &config)
        }
        Commands::Replay {
            dir,
            recursive,
            input,
            pattern,
            replace,
            continue_on_error,
            dry_run,
            json,
        } => {
            let config = config.merge(Config {
                pattern,
                replacement: replace,
                ..flag_overrides(recursive, continue_on_error)
            });
            handle_replay(&dir, &input, &config, dry_run, json)
        }
        Commands::Show { input, json } => handle_show(&input, json),
        Commands::Rewrite {
            path,
            pattern,
            replace,
        } => handle_rewrite(&path, &pattern, &replace),
        Commands::Config => {
            show_config(&config, &sources)?;
            Ok(())
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Boolean flags only override config when given.
fn flag_overrides(recursive: bool, continue_on_error: bool) -> Config {
    Config {
        recursive: recursive.then_some(true),
        continue_on_error: continue_on_error.then_some(true),
        ..Default::default()
    }
}

/// Print an error the way the desktop tool titled its dialogs.
fn report_error(error: &anyhow::Error) {
    match error.downcast_ref::<EngineError>() {
        Some(engine) => eprintln!("{}: {}", engine.category(), engine),
        None => eprintln!("Error: {:#}", error),
    }
}

/// Show the effective configuration and where it came from.
fn show_config(config: &Config, sources: &[PathBuf]) -> anyhow::Result<()> {
    println!("Configuration sources:");
    if sources.is_empty() {
        println!("  (none)");
    } else {
        for source in sources {
            println!("  {}", source.display());
        }
    }
    println!();

    println!("Current configuration:");
    println!("{}", serde_json::to_string_pretty(config)?);

    Ok(())
}

/// Print version information.
fn print_version() {
    println!("datereplay {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Restores original file dates after copies, syncs and archive extraction.");
}
