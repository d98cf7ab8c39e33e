//! Configuration and CLI argument handling

use std::path::PathBuf;
use clap::Parser;

/// CLI argument parsing structure; the activity label and data file also read the environment
#[derive(Parser, Debug)]
#[command(name = "timer-ledger")]
#[command(about = "A single-user stopwatch-style time tracking server")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "5000")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Label of the tracked activity shown on the page
    #[arg(long, env = "TIMER_NAME", default_value = "something")]
    pub timer_name: String,

    /// YAML file holding the ledger
    #[arg(long, env = "DATA_FILE", default_value = "data/timers.yaml")]
    pub data_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
