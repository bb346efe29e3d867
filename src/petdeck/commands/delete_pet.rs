use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;

use super::helpers::commit;

pub fn run<S: DocumentStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let before = doc.pets.len();
    // Reminders referencing this pet are left alone; the renderer shows
    // their owner as "Unknown".
    doc.pets.retain(|p| p.id != id);
    let removed = before != doc.pets.len();

    let ui = commit(store, &doc)?;
    let mut result = CmdResult::default().with_ui(ui);
    if removed {
        result.add_message(CmdMessage::success(format!("Removed pet {}", id)));
    } else {
        result.add_message(CmdMessage::info(format!("No pet with id {}", id)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DocumentStore;

    #[test]
    fn removes_matching_pet_only() {
        let mut fixture = StoreFixture::new()
            .with_pet("id_1", "Mochi")
            .with_pet("id_2", "Pixel");
        run(&mut fixture.store, "id_1").unwrap();

        let doc = fixture.store.load().unwrap();
        assert_eq!(doc.pets.len(), 1);
        assert_eq!(doc.pets[0].id, "id_2");
    }

    #[test]
    fn unknown_id_leaves_document_unchanged() {
        let mut fixture = StoreFixture::new().with_pet("id_1", "Mochi");
        let before = fixture.store.load().unwrap();

        run(&mut fixture.store, "id_404").unwrap();

        assert_eq!(fixture.store.load().unwrap(), before);
    }

    #[test]
    fn reminders_keep_dangling_reference() {
        let mut fixture = StoreFixture::new()
            .with_pet("id_1", "Mochi")
            .with_reminder("id_2", "id_1", "Vaccination", "2026-08-08T09:00");
        let result = run(&mut fixture.store, "id_1").unwrap();

        let doc = fixture.store.load().unwrap();
        assert_eq!(doc.reminders.len(), 1);
        assert_eq!(doc.reminders[0].pet_id, "id_1");

        let ui = result.ui.unwrap();
        assert_eq!(ui.reminders[0].owner, crate::render::UNKNOWN_OWNER);
    }
}
