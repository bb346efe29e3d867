use crate::error::Result;
use crate::model::Document;
use crate::render::{self, UiState};
use crate::store::DocumentStore;
use chrono::Utc;

/// Persist the document, then rebuild the UI state from a fresh load.
/// Every mutator ends here: the UI never observes a state the store does
/// not also hold.
pub fn commit<S: DocumentStore>(store: &mut S, doc: &Document) -> Result<UiState> {
    store.save(doc)?;
    let saved = store.load()?;
    Ok(render::render(&saved, Utc::now()))
}
