use serde::{Deserialize, Serialize};

/// Which side of the chat transcript a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub breed: String,
    // The wire field is "type"; Rust reserves the keyword.
    #[serde(rename = "type")]
    pub species: String,
    pub notes: String,
}

impl Pet {
    pub fn new(
        id: String,
        name: String,
        age: u32,
        breed: String,
        species: String,
        notes: String,
    ) -> Self {
        Self {
            id,
            name,
            age,
            breed,
            species,
            notes,
        }
    }
}

/// A care reminder. `pet_id` is a weak reference: the pet it points to may
/// have been removed, and the renderer resolves that to an "Unknown" owner
/// rather than treating it as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    #[serde(rename = "petId")]
    pub pet_id: String,
    pub title: String,
    pub datetime: String,
    pub freq: String,
}

impl Reminder {
    pub fn new(id: String, pet_id: String, title: String, datetime: String, freq: String) -> Self {
        Self {
            id,
            pet_id,
            title,
            datetime,
            freq,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: String) -> Self {
        Self { role, text }
    }
}

/// The root aggregate and sole unit of persistence. All three collections
/// are required fields, so deserializing also validates the document shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub pets: Vec<Pet>,
    pub reminders: Vec<Reminder>,
    pub chats: Vec<ChatMessage>,
}

impl Document {
    pub fn pet(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty() && self.reminders.is_empty() && self.chats.is_empty()
    }
}
