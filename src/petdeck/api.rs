//! # API Facade
//!
//! The single entry point for all petdeck operations, regardless of the
//! client driving them. One method per user action; each mutating method
//! runs exactly one load → transform → save cycle and returns the UI state
//! rebuilt from the document that was just saved.
//!
//! The facade holds no business logic (that lives in `commands/*.rs`) and
//! does no I/O of its own beyond what the store performs. It is generic
//! over the storage backend, the id generator, and the responder:
//!
//! - Production: `PetdeckApi<FileStore, RandomIds, CannedResponder>`
//! - Testing: `PetdeckApi<InMemoryStore, FixedIds, _>` with a stub
//!   responder, so tests touch neither the filesystem nor the clock-free
//!   parts they don't care about.

use crate::commands;
use crate::error::Result;
use crate::id::IdGenerator;
use crate::render::UiState;
use crate::responder::Responder;
use crate::store::DocumentStore;
use chrono::Utc;
use std::path::{Path, PathBuf};

pub struct PetdeckApi<S: DocumentStore, G: IdGenerator, R: Responder> {
    store: S,
    ids: G,
    responder: R,
}

impl<S: DocumentStore, G: IdGenerator, R: Responder> PetdeckApi<S, G, R> {
    pub fn new(store: S, ids: G, responder: R) -> Self {
        Self {
            store,
            ids,
            responder,
        }
    }

    /// Render the current document without mutating anything.
    pub fn show(&self) -> Result<UiState> {
        let doc = self.store.load()?;
        Ok(crate::render::render(&doc, Utc::now()))
    }

    pub fn add_pet(&mut self, new: commands::add_pet::NewPet) -> Result<commands::CmdResult> {
        commands::add_pet::run(&mut self.store, &mut self.ids, new)
    }

    pub fn delete_pet(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete_pet::run(&mut self.store, id)
    }

    pub fn add_reminder(
        &mut self,
        new: commands::add_reminder::NewReminder,
    ) -> Result<commands::CmdResult> {
        commands::add_reminder::run(&mut self.store, &mut self.ids, new)
    }

    pub fn delete_reminder(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete_reminder::run(&mut self.store, id)
    }

    pub fn send_message(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::chat::send(&mut self.store, &self.responder, text)
    }

    pub fn clear_chat(&mut self) -> Result<commands::CmdResult> {
        commands::chat::clear(&mut self.store)
    }

    pub fn seed_demo_data(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store, &mut self.ids, Utc::now())
    }

    pub fn export(&self, output: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, output)
    }

    pub fn import(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }
}

pub use crate::commands::add_pet::{coerce_age, NewPet};
pub use crate::commands::add_reminder::NewReminder;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::fixtures::FixedIds;
    use crate::store::memory::InMemoryStore;

    struct StubResponder;

    impl Responder for StubResponder {
        fn reply(&self, _text: &str) -> String {
            "ok".to_string()
        }
    }

    fn api() -> PetdeckApi<InMemoryStore, FixedIds, StubResponder> {
        PetdeckApi::new(InMemoryStore::new(), FixedIds::new(), StubResponder)
    }

    #[test]
    fn dispatches_through_full_cycle() {
        let mut api = api();
        api.add_pet(NewPet {
            name: "Mochi".into(),
            ..NewPet::default()
        })
        .unwrap();
        api.send_message("hello").unwrap();

        let ui = api.show().unwrap();
        assert_eq!(ui.total_pets, 1);
        assert_eq!(ui.chat.len(), 2);
    }

    #[test]
    fn show_on_fresh_store_is_empty() {
        let api = api();
        let ui = api.show().unwrap();
        assert_eq!(ui.total_pets, 0);
        assert!(ui.chat.is_empty());
    }
}
