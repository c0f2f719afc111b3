use crate::config::{CollisionPolicy, ConfigFile, NormalizerConfig};
use crate::constants::{exit_codes, verbosity};
use crate::error::Result;
use clap::{CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for extnorm.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory whose files are renamed, recursively.
    #[arg(value_name = "ROOT_DIR")]
    pub root_directory: Option<PathBuf>,

    /// Receipt listing every rename [default: receipt.txt].
    #[arg(short, long, value_name = "FILE")]
    pub receipt: Option<PathBuf>,

    /// Extension given to every file, dot included [default: .txt].
    #[arg(short, long, value_name = "EXT", allow_hyphen_values = true)]
    pub extension: Option<String>,

    /// What to do when a renamed file would replace an existing one [default: fail].
    #[arg(long = "on-collision", value_enum, value_name = "POLICY")]
    pub on_collision: Option<CollisionPolicy>,

    /// Config file (.json, .yaml or .yml). Command-line values take precedence.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Preview renames without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Do not ask for confirmation before renaming.
    #[arg(short, long)]
    pub yes: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Merges the arguments over the config file, if any, and fills defaults.
    pub fn into_config(self) -> Result<NormalizerConfig> {
        let file = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let merged = ConfigFile {
            root_directory: self.root_directory.or(file.root_directory),
            receipt_file: self.receipt.or(file.receipt_file),
            target_extension: self.extension.or(file.target_extension),
            on_collision: self.on_collision.or(file.on_collision),
            dry_run: Some(self.dry_run || file.dry_run.unwrap_or(false)),
        };
        merged.resolve()
    }
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Prints the usage and exits with a failure status.
pub fn print_help_and_exit() -> ! {
    let mut command = Args::command().help_template(HELP_TEMPLATE);
    if let Err(print_err) = command.print_help() {
        eprintln!("Failed to display help information: {print_err}");
    } else {
        println!();
    }
    std::process::exit(exit_codes::FAILURE);
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
