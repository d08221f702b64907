use clap::Parser;
use std::path::PathBuf;

/// GARAGE-INIT: Garage cluster layout bootstrapper
///
/// Waits for every node of a Garage cluster to come up, then stages and
/// applies the initial layout through the admin API.
#[derive(Parser, Debug)]
#[command(name = "garage-init")]
#[command(version = "0.1.0")]
#[command(about = "Bootstrap a Garage cluster layout via the admin API")]
pub struct Args {
    /// API base URL (e.g. https://host or host)
    pub url_arg: Option<String>,

    /// Admin API port
    pub port_arg: Option<String>,

    /// Admin bearer token
    pub token_arg: Option<String>,

    /// Capacity per node, e.g. 100G (binary multiples)
    pub capacity_arg: Option<String>,

    /// API base URL
    #[arg(long)]
    pub url: Option<String>,

    /// Admin API port
    #[arg(long)]
    pub port: Option<String>,

    /// Admin bearer token
    #[arg(long)]
    pub token: Option<String>,

    /// Capacity per node, e.g. 100G (binary multiples)
    #[arg(long)]
    pub capacity: Option<String>,

    /// Garage config file consulted for url/port/token as a last resort
    #[arg(long, default_value = "/etc/garage.toml")]
    pub config_file: PathBuf,

    /// Seconds to sleep between readiness polls
    #[arg(long, default_value = "5")]
    pub poll_interval: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
