use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::id::IdGenerator;
use crate::model::Reminder;
use crate::store::DocumentStore;

use super::helpers::commit;

/// Input for a new reminder. `pet_id` is taken as-is: an empty or unknown
/// id is tolerated, not rejected.
#[derive(Debug, Clone, Default)]
pub struct NewReminder {
    pub pet_id: String,
    pub title: String,
    pub datetime: String,
    pub freq: String,
}

pub fn run<S: DocumentStore, G: IdGenerator>(
    store: &mut S,
    ids: &mut G,
    new: NewReminder,
) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let reminder = Reminder::new(ids.new_id(), new.pet_id, new.title, new.datetime, new.freq);
    let title = reminder.title.clone();
    doc.reminders.push(reminder);

    let ui = commit(store, &doc)?;
    let mut result = CmdResult::default().with_ui(ui);
    result.add_message(CmdMessage::success(format!("Added reminder: {}", title)));
    Ok(result)
}
