mod admin;
mod cli;
mod error;
mod init;

use admin::AdminClient;
use clap::Parser;
use cli::{Args, RuntimeConfig};
use error::InitError;
use init::{InitOutcome, Initializer};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Setup logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let _subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(args: &Args) -> Result<(), InitError> {
    let config = RuntimeConfig::resolve(args)?;
    info!("Using admin endpoint {}", config.base_url);

    let client = AdminClient::new(&config.base_url, config.token.clone());
    let initializer = Initializer::new(
        client,
        config.capacity_bytes,
        Duration::from_secs(args.poll_interval),
    );

    match initializer.run().await? {
        InitOutcome::AlreadyInitialized => {
            println!("Cluster is already initialized.");
        }
        InitOutcome::Applied { nodes, messages } => {
            println!("Applied layout on {} nodes.", nodes);
            for line in messages {
                println!("{line}");
            }
        }
    }

    Ok(())
}
