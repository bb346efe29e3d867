use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;

use super::helpers::commit;

pub fn run<S: DocumentStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let before = doc.reminders.len();
    doc.reminders.retain(|r| r.id != id);
    let removed = before != doc.reminders.len();

    let ui = commit(store, &doc)?;
    let mut result = CmdResult::default().with_ui(ui);
    if removed {
        result.add_message(CmdMessage::success(format!("Removed reminder {}", id)));
    } else {
        result.add_message(CmdMessage::info(format!("No reminder with id {}", id)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DocumentStore;

    #[test]
    fn removes_matching_reminder() {
        let mut fixture = StoreFixture::new()
            .with_reminder("id_1", "", "Vaccination", "2026-08-08T09:00")
            .with_reminder("id_2", "", "Grooming", "2026-08-09T09:00");
        run(&mut fixture.store, "id_1").unwrap();

        let doc = fixture.store.load().unwrap();
        assert_eq!(doc.reminders.len(), 1);
        assert_eq!(doc.reminders[0].id, "id_2");
    }

    #[test]
    fn unknown_id_leaves_document_unchanged() {
        let mut fixture =
            StoreFixture::new().with_reminder("id_1", "", "Vaccination", "2026-08-08T09:00");
        let before = fixture.store.load().unwrap();

        run(&mut fixture.store, "id_404").unwrap();

        assert_eq!(fixture.store.load().unwrap(), before);
    }
}
