use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::id::IdGenerator;
use crate::model::Pet;
use crate::store::DocumentStore;

use super::helpers::commit;

/// Input for a new pet. An empty name is permitted.
#[derive(Debug, Clone, Default)]
pub struct NewPet {
    pub name: String,
    pub age: u32,
    pub breed: String,
    pub species: String,
    pub notes: String,
}

/// Coerce free-form age input to a non-negative number; anything that does
/// not parse becomes 0.
pub fn coerce_age(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

pub fn run<S: DocumentStore, G: IdGenerator>(
    store: &mut S,
    ids: &mut G,
    new: NewPet,
) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let pet = Pet::new(
        ids.new_id(),
        new.name,
        new.age,
        new.breed,
        new.species,
        new.notes,
    );
    let label = if pet.name.is_empty() {
        pet.id.clone()
    } else {
        pet.name.clone()
    };
    doc.pets.push(pet);

    let ui = commit(store, &doc)?;
    let mut result = CmdResult::default().with_ui(ui);
    result.add_message(CmdMessage::success(format!("Added pet: {}", label)));
    Ok(result)
}
