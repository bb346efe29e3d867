use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::id::IdGenerator;
use crate::model::{Pet, Reminder};
use crate::store::DocumentStore;
use chrono::{DateTime, Duration, SecondsFormat, Utc};

use super::helpers::commit;

/// Seed the demo records: two pets and one vaccination reminder a day
/// out. Does nothing when pets already exist.
pub fn run<S: DocumentStore, G: IdGenerator>(
    store: &mut S,
    ids: &mut G,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let mut doc = store.load()?;
    if !doc.pets.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Store already has pets; nothing seeded."));
        return Ok(result);
    }

    let mochi = Pet::new(
        ids.new_id(),
        "Mochi".into(),
        3,
        "Beagle".into(),
        "Dog".into(),
        "Allergic to treats".into(),
    );
    let pixel = Pet::new(
        ids.new_id(),
        "Pixel".into(),
        2,
        "Siamese".into(),
        "Cat".into(),
        "Neutered".into(),
    );
    doc.reminders.push(Reminder::new(
        ids.new_id(),
        mochi.id.clone(),
        "Vaccination".into(),
        (now + Duration::days(1)).to_rfc3339_opts(SecondsFormat::Secs, true),
        "once".into(),
    ));
    doc.pets.push(mochi);
    doc.pets.push(pixel);

    let ui = commit(store, &doc)?;
    let mut result = CmdResult::default().with_ui(ui);
    result.add_message(CmdMessage::success("Seeded demo data."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::fixtures::FixedIds;
    use crate::store::memory::InMemoryStore;
    use crate::store::DocumentStore;

    #[test]
    fn seeds_empty_store() {
        let mut store = InMemoryStore::new();
        let mut ids = FixedIds::new();
        let result = run(&mut store, &mut ids, Utc::now()).unwrap();

        let doc = store.load().unwrap();
        assert_eq!(doc.pets.len(), 2);
        assert_eq!(doc.reminders.len(), 1);
        assert_eq!(doc.reminders[0].pet_id, doc.pets[0].id);
        assert!(result.ui.is_some());
    }

    #[test]
    fn seeded_reminder_is_upcoming() {
        let mut store = InMemoryStore::new();
        let mut ids = FixedIds::new();
        let result = run(&mut store, &mut ids, Utc::now()).unwrap();
        assert_eq!(result.ui.unwrap().upcoming_count, 1);
    }

    #[test]
    fn does_not_seed_twice() {
        let mut store = InMemoryStore::new();
        let mut ids = FixedIds::new();
        run(&mut store, &mut ids, Utc::now()).unwrap();
        run(&mut store, &mut ids, Utc::now()).unwrap();

        assert_eq!(store.load().unwrap().pets.len(), 2);
    }
}
