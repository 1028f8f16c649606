use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;

mod commands;

#[derive(Parser)]
#[command(author, version, about = "Inspect and build pathwire messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a message and print its wire form as hex
    Encode {
        /// Message type flag bytes, hex encoded
        #[arg(long = "type", default_value = "00")]
        msg_type: String,
        /// Sender identifier
        #[arg(long, default_value = "")]
        sender: String,
        /// Timestamp in UTC seconds (default: now)
        #[arg(long)]
        timestamp: Option<u64>,
        /// Omit the 4-byte size header
        #[arg(long)]
        sizeless: bool,
        /// Treat payload arguments as hex instead of text
        #[arg(long)]
        hex_payload: bool,
        /// Payload fields, in order
        payload: Vec<String>,
    },
    /// Parse and verify a hex-encoded message
    Decode {
        /// Input has no 4-byte size header
        #[arg(long)]
        sizeless: bool,
        /// Serialized message, hex encoded
        message: String,
    },
    /// Print the id of a subnet
    SubnetId {
        /// Path to a subnet TOML file
        #[arg(long, short)]
        config: Option<PathBuf>,
        #[arg(long)]
        subnet: Option<String>,
        #[arg(long)]
        encryption: Option<String>,
        /// Override the protocol major version
        #[arg(long)]
        major: Option<u32>,
        /// Override the protocol minor version
        #[arg(long)]
        minor: Option<u32>,
    },
    /// Base-58 helpers
    Base58 {
        #[command(subcommand)]
        action: Base58Commands,
    },
}

#[derive(Subcommand)]
enum Base58Commands {
    /// Encode an unsigned integer
    EncodeInt { value: u64 },
    /// Decode base-58 text to an unsigned integer
    DecodeInt { text: String },
    /// Encode hex bytes as one big-endian number
    EncodeHex {
        hex: String,
        #[arg(long, default_value_t = 1)]
        min_digits: usize,
    },
}

fn main() {
    let filter = std::env::var("PATHWIRE_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match commands::run(cli.command) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
