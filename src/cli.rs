//! Command-line interface implementation

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{resolve_file_config, CliOverrides, SheetConfig};
use crate::error::SheetResult;
use crate::logging;
use crate::order::FrameOrder;
use crate::pipeline;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Framesheet - pack numbered animation frames into horizontal spritesheets
#[derive(Parser, Debug)]
#[command(name = "framesheet")]
#[command(about = "Create spritesheets from a directory of images")]
#[command(version)]
pub struct Cli {
    /// Directory containing the frame images (png, jpg, jpeg, gif)
    pub input_dir: PathBuf,

    /// Existing directory to save the spritesheets to
    pub output_dir: PathBuf,

    /// Format of the spritesheets (png, jpg, gif, ...) [default: png]
    #[arg(long)]
    pub format: Option<String>,

    /// Frame ordering: raw filename (lexical) or parsed frame number (numeric)
    /// [default: lexical]
    #[arg(long, value_enum)]
    pub order: Option<FrameOrder>,

    /// Keep processing other animations when one fails, then report a summary
    #[arg(long)]
    pub keep_going: bool,

    /// TOML file with format/order/keep_going settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            format: self.format.clone(),
            order: self.order,
            keep_going: self.keep_going.then_some(true),
        }
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet));

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    tracing::debug!(?config, "resolved configuration");

    run_sheets(&config)
}

/// Combine the config file (if any) with command-line flags
fn resolve_config(cli: &Cli) -> SheetResult<SheetConfig> {
    let file_config = resolve_file_config(cli.config.as_deref(), &cli.overrides())?;
    Ok(SheetConfig::from_file_config(&cli.input_dir, &cli.output_dir, file_config))
}

/// Execute a run and map the outcome to an exit code
fn run_sheets(config: &SheetConfig) -> ExitCode {
    match pipeline::run(config) {
        Ok(result) if result.is_success() => {
            if config.keep_going {
                tracing::info!("{}", result.summary());
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(result) => {
            eprintln!("Error: {}", result.summary());
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_usage_error() {
                ExitCode::from(EXIT_INVALID_ARGS)
            } else {
                ExitCode::from(EXIT_ERROR)
            }
        }
    }
}
