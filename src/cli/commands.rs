use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `tenki` - spoken weather reports for a voice-assistant webhook.
#[derive(Parser, Debug)]
#[command(name = "tenki")]
#[command(version)]
#[command(about = "Webhook fulfillment that reads out the current weather.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.tenki/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the webhook gateway
    Gateway {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Fetch the current weather once and print the welcome speech
    Weather {
        /// Provider location id (default: `[weather] location_id`)
        #[arg(short, long)]
        location: Option<String>,
    },
}
