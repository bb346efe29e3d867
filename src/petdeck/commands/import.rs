use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PetdeckError, Result};
use crate::model::Document;
use crate::store::DocumentStore;
use std::fs;
use std::path::Path;

use super::helpers::commit;

/// Replace the whole store with the document in `path`. On parse or shape
/// failure the store is left untouched and the error is surfaced.
pub fn run<S: DocumentStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path).map_err(PetdeckError::Io)?;
    let doc = parse_document(&raw)?;

    let ui = commit(store, &doc)?;
    let mut result = CmdResult::default().with_ui(ui);
    result.add_message(CmdMessage::success(format!(
        "Imported {}",
        path.display()
    )));
    Ok(result)
}

/// Parse bytes as a [`Document`], validating the three-collection shape.
pub fn parse_document(raw: &str) -> Result<Document> {
    serde_json::from_str(raw).map_err(|e| PetdeckError::InvalidImport(e.to_string()))
}
