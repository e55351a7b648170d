//! Decode command implementation.

use crate::output;
use ledgersnap_core::SnapshotInfo;

pub fn run(
    input: Option<String>,
    hex_record: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = match (input, hex_record) {
        (_, Some(text)) => {
            hex::decode(text.trim()).map_err(|e| format!("Invalid hex record: {}", e))?
        }
        (Some(path), None) => std::fs::read(&path)
            .map_err(|e| format!("Failed to read record file: {}: {}", path, e))?,
        (None, None) => return Err("no record given".into()),
    };

    let snapshot = SnapshotInfo::from_bytes(&bytes)?;

    if json {
        println!("{}", output::format_json(&snapshot)?);
    } else {
        print!("{}", output::format_summary(&snapshot));
    }
    Ok(())
}
