use super::DocumentStore;
use crate::error::Result;
use crate::model::Document;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    doc: Document,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<Document> {
        Ok(self.doc.clone())
    }

    fn save(&mut self, doc: &Document) -> Result<()> {
        self.doc = doc.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ChatMessage, ChatRole, Pet, Reminder};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_pet(mut self, id: &str, name: &str) -> Self {
            let mut doc = self.store.load().unwrap();
            doc.pets.push(Pet::new(
                id.to_string(),
                name.to_string(),
                3,
                "Beagle".to_string(),
                "Dog".to_string(),
                String::new(),
            ));
            self.store.save(&doc).unwrap();
            self
        }

        pub fn with_reminder(mut self, id: &str, pet_id: &str, title: &str, datetime: &str) -> Self {
            let mut doc = self.store.load().unwrap();
            doc.reminders.push(Reminder::new(
                id.to_string(),
                pet_id.to_string(),
                title.to_string(),
                datetime.to_string(),
                "once".to_string(),
            ));
            self.store.save(&doc).unwrap();
            self
        }

        pub fn with_chat(mut self, role: ChatRole, text: &str) -> Self {
            let mut doc = self.store.load().unwrap();
            doc.chats.push(ChatMessage::new(role, text.to_string()));
            self.store.save(&doc).unwrap();
            self
        }
    }
}
