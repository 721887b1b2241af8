//! gen-pub-router
//!
//! Regenerates a router-definition module with a public copy of every route.
//!
//! ```text
//! gen-pub-router src/router.js
//! gen-pub-router --dry-run --prefix /open src/router.js
//! gen-pub-router --watch --config gen-pub-router.toml src/router.js
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gen_pub_router::lifecycle::report::{report, FAILURE_MESSAGE};
use gen_pub_router::lifecycle::startup::{resolve_config, run_once, run_watch, RunOptions};
use gen_pub_router::lifecycle::WriteMode;
use gen_pub_router::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "gen-pub-router")]
#[command(about = "Add public variants of every route to a router module", long_about = None)]
struct Cli {
    /// Router module to rewrite
    file: PathBuf,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Public path marker (overrides the config file)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Print the generated module instead of writing it
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Keep running and regenerate whenever the file changes
    #[arg(short, long)]
    watch: bool,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            file: cli.file,
            config: cli.config,
            prefix: cli.prefix,
            mode: if cli.dry_run {
                WriteMode::DryRun
            } else {
                WriteMode::Overwrite
            },
            watch: cli.watch,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let options = RunOptions::from(Cli::parse());

    let config = match resolve_config(&options) {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            tracing::error!(error = %e, "Configuration rejected");
            eprintln!("{FAILURE_MESSAGE}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.observability.log_level);

    tracing::debug!(?options, "gen-pub-router starting");

    if options.watch {
        return match run_watch(&options, &config).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(kind = ?e.kind(), error = %e, "Watch failed");
                eprintln!("{FAILURE_MESSAGE}");
                ExitCode::FAILURE
            }
        };
    }

    let result = run_once(&options, &config).await;
    if report(&options.file, &result) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
