mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("memtopo v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let analysis_config = config::build_config(cli.config.as_deref(), &cli.set_values)?;
    debug!("Resolved analysis configuration: {:?}", analysis_config);

    let command_result = match cli.command {
        Commands::Boctopus2(args) => {
            info!("Dispatching to 'boctopus2' command.");
            commands::boctopus2::run(args, &analysis_config)
        }
        Commands::Tmhmm(args) => {
            info!("Dispatching to 'tmhmm' command.");
            commands::tmhmm::run(args, &analysis_config)
        }
        Commands::Psortb(args) => {
            info!("Dispatching to 'psortb' command.");
            commands::psortb::run(args)
        }
        Commands::Concat(args) => {
            info!("Dispatching to 'concat' command.");
            commands::concat::run(args)
        }
        Commands::Signalp(args) => {
            info!("Dispatching to 'signalp' command.");
            commands::signalp::run(args, &analysis_config)
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}
