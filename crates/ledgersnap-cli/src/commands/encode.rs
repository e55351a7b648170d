//! Encode command implementation.

use crate::commands::snapshot_from_args;
use crate::SnapshotArgs;

pub fn run(args: SnapshotArgs, output: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = snapshot_from_args(&args)?;
    let bytes = snapshot.to_bytes();

    match output {
        Some(path) => {
            std::fs::write(&path, bytes)
                .map_err(|e| format!("Failed to write record file: {}: {}", path, e))?;
            println!("Wrote {} bytes to {}", bytes.len(), path);
        }
        None => println!("{}", hex::encode(bytes)),
    }
    Ok(())
}
