//! Show command implementation.

use crate::output;
use ledgersnap_registry::SnapshotRegistry;
use ledgersnap_store::{FileStore, WriteOptions};

pub fn run(store: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::new(&store, WriteOptions::default());
    let registry = SnapshotRegistry::initialize(store)
        .map_err(|e| format!("Failed to load snapshot info: {}", e))?;

    match registry.get() {
        Some(snapshot) if json => println!("{}", output::format_json(&snapshot)?),
        Some(snapshot) => print!("{}", output::format_summary(&snapshot)),
        None if json => println!("null"),
        None => println!("no snapshot recorded"),
    }

    Ok(())
}
