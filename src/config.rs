//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-watch")]
#[command(about = "A wrist-watch countdown timer with a simulated host exposed over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Tick service period in milliseconds
    #[arg(long, default_value = "1000")]
    pub tick_ms: u64,

    /// Auto-repeat interval for held up/down buttons in milliseconds
    #[arg(long, default_value = "200")]
    pub repeat_ms: u64,

    /// Print the watch face to stdout on every display update
    #[arg(long)]
    pub face: bool,

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

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn button_repeat(&self) -> Duration {
        Duration::from_millis(self.repeat_ms.max(1))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
