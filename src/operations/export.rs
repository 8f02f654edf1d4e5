use std::fs;
use std::path::Path;

use crate::error::LedgerError;
use crate::store::ledger::LedgerState;

/// Serializes both collections verbatim into the backup document:
/// a pretty-printed `{ "transactions": [...], "goals": [...] }`.
pub fn export_all(state: &LedgerState) -> Result<String, LedgerError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Writes the export document where the user asked for it.
pub fn write_export(state: &LedgerState, path: &Path) -> Result<(), LedgerError> {
    let document = export_all(state)?;
    fs::write(path, document)?;
    Ok(())
}
