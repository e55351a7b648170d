//! Ledgersnap CLI - inspect and record the snapshot a node is anchored to.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{decode, encode, set, show};

#[derive(Parser)]
#[command(name = "ledgersnap")]
#[command(about = "Ledger snapshot info inspection and recording CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Fields of a snapshot descriptor given on the command line.
#[derive(Args)]
pub struct SnapshotArgs {
    /// Coordinator address (81 trytes, or 90 with checksum)
    #[arg(long)]
    pub coordinator: String,
    /// Snapshot milestone hash (81 trytes)
    #[arg(long)]
    pub hash: String,
    /// Snapshot milestone index
    #[arg(long)]
    pub index: u32,
    /// Index up to which history has been pruned
    #[arg(long, default_value_t = 0)]
    pub pruning_index: u32,
    /// Snapshot time in Unix seconds (default: now)
    #[arg(long, allow_hyphen_values = true)]
    pub timestamp: Option<i64>,
    /// Mark spent-addresses tracking as enabled
    #[arg(long)]
    pub spent_addresses: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the snapshot info recorded in a store
    Show {
        /// Path to the snapshot info file
        #[arg(long)]
        store: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record a new snapshot info in a store
    Set {
        /// Path to the snapshot info file
        #[arg(long)]
        store: String,
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Fsync the record before returning
        #[arg(long)]
        sync: bool,
    },
    /// Decode a raw snapshot info record
    Decode {
        /// Record file to decode
        #[arg(required_unless_present = "hex", conflicts_with = "hex")]
        input: Option<String>,
        /// Record given as a hex string instead of a file
        #[arg(long)]
        hex: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Encode a snapshot info record without touching a store
    Encode {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Write the record to this file instead of printing hex
        #[arg(long)]
        output: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { store, json } => show::run(store, json),
        Commands::Set {
            store,
            snapshot,
            sync,
        } => set::run(store, snapshot, sync),
        Commands::Decode { input, hex, json } => decode::run(input, hex, json),
        Commands::Encode { snapshot, output } => encode::run(snapshot, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
