//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Aggregate network throughput as JSON lines for status bars
#[derive(Parser, Debug, Default)]
#[command(name = "netrate", author, version, about, long_about = None)]
pub struct Args {
    /// Polling interval in whole seconds (minimum 1)
    #[arg(
        short = 't',
        long = "interval",
        value_name = "POLLING_INTERVAL",
        allow_hyphen_values = true
    )]
    pub interval: Option<String>,

    /// TOML config file with defaults for interval, interfaces and source paths
    #[arg(short = 'c', long, value_name = "FILE", env = "NETRATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Track only these interfaces (each must exist). Default: eth*, wlan*, enp*, wlp*
    #[arg(value_name = "INTERFACE")]
    pub interfaces: Vec<String>,
}
