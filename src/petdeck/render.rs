//! # Rendering Module
//!
//! A pure projection from the current [`Document`] to the full visible UI
//! state. Every call rebuilds all four facets from scratch — pet list,
//! reminder list, selector option lists, chat transcript. There is no
//! memoization and no diffing; documents are small enough that a full
//! rebuild after every mutation is cheaper than being clever.
//!
//! Every user-supplied string is escaped against markup injection before
//! it lands in a facet. Presentation adapters may insert these values into
//! a markup tree verbatim, so this is a contract of the renderer, not a
//! courtesy.
//!
//! The render instant is a parameter rather than read from the clock, so
//! the upcoming-reminder count is testable.

use crate::model::{ChatRole, Document};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Owner label for reminders whose pet no longer exists.
pub const UNKNOWN_OWNER: &str = "Unknown";
/// Leading entry of the chat target selector.
pub const CHAT_PLACEHOLDER: &str = "— Select pet —";

const DATETIME_DISPLAY: &str = "%b %e, %Y %H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct PetEntry {
    pub id: String,
    /// Uppercased first letter of the name; empty for unnamed pets.
    pub avatar: String,
    pub name: String,
    /// "Species · Breed · N yrs"
    pub summary: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderEntry {
    pub id: String,
    pub title: String,
    /// Resolved pet name, or [`UNKNOWN_OWNER`] for dangling references.
    pub owner: String,
    /// Formatted due time; the raw string when it does not parse.
    pub when: String,
    pub freq: String,
    /// Parsed due instant, if the datetime string parses.
    pub due: Option<DateTime<Utc>>,
    /// Strictly after the render instant.
    pub upcoming: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatBubble {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub pets: Vec<PetEntry>,
    pub total_pets: usize,
    pub reminders: Vec<ReminderEntry>,
    pub upcoming_count: usize,
    /// Pet options for reminder-owner selection.
    pub owner_choices: Vec<SelectorOption>,
    /// Pet options for chat target selection, with a leading placeholder.
    pub chat_targets: Vec<SelectorOption>,
    pub chat: Vec<ChatBubble>,
}

/// Project the document into the full UI state as of `now`.
pub fn render(doc: &Document, now: DateTime<Utc>) -> UiState {
    let (reminders, upcoming_count) = reminder_facet(doc, now);
    UiState {
        pets: pet_facet(doc),
        total_pets: doc.pets.len(),
        reminders,
        upcoming_count,
        owner_choices: pet_options(doc),
        chat_targets: chat_target_options(doc),
        chat: chat_facet(doc),
    }
}

fn pet_facet(doc: &Document) -> Vec<PetEntry> {
    doc.pets
        .iter()
        .map(|p| PetEntry {
            id: p.id.clone(),
            avatar: p
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
            name: escape(&p.name),
            summary: format!(
                "{} · {} · {} yrs",
                escape(&p.species),
                escape(&p.breed),
                p.age
            ),
            notes: escape(&p.notes),
        })
        .collect()
}

fn reminder_facet(doc: &Document, now: DateTime<Utc>) -> (Vec<ReminderEntry>, usize) {
    let mut upcoming_count = 0;
    let entries = doc
        .reminders
        .iter()
        .map(|r| {
            let owner = match doc.pet(&r.pet_id) {
                Some(pet) => escape(&pet.name),
                None => UNKNOWN_OWNER.to_string(),
            };
            let due = parse_datetime(&r.datetime);
            let upcoming = matches!(due, Some(at) if at > now);
            if upcoming {
                upcoming_count += 1;
            }
            let when = match due {
                Some(at) => at.format(DATETIME_DISPLAY).to_string(),
                None => escape(&r.datetime),
            };
            ReminderEntry {
                id: r.id.clone(),
                title: escape(&r.title),
                owner,
                when,
                freq: escape(&r.freq),
                due,
                upcoming,
            }
        })
        .collect();
    (entries, upcoming_count)
}

fn pet_options(doc: &Document) -> Vec<SelectorOption> {
    doc.pets
        .iter()
        .map(|p| SelectorOption {
            id: p.id.clone(),
            label: escape(&p.name),
        })
        .collect()
}

fn chat_target_options(doc: &Document) -> Vec<SelectorOption> {
    let mut options = vec![SelectorOption {
        id: String::new(),
        label: CHAT_PLACEHOLDER.to_string(),
    }];
    options.extend(pet_options(doc));
    options
}

fn chat_facet(doc: &Document) -> Vec<ChatBubble> {
    doc.chats
        .iter()
        .map(|m| ChatBubble {
            role: m.role,
            text: escape(&m.text),
        })
        .collect()
}

/// Escape markup-significant characters.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Parse a stored datetime string. Accepts full RFC 3339 as well as the
/// zone-less `YYYY-MM-DDTHH:MM[:SS]` form (treated as UTC) that
/// `datetime-local` inputs produce.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChatMessage, Pet, Reminder};
    use chrono::{Duration, TimeZone};

    fn pet(id: &str, name: &str) -> Pet {
        Pet::new(
            id.to_string(),
            name.to_string(),
            3,
            "Beagle".into(),
            "Dog".into(),
            String::new(),
        )
    }

    fn reminder(id: &str, pet_id: &str, datetime: &str) -> Reminder {
        Reminder::new(
            id.to_string(),
            pet_id.to_string(),
            "Vaccination".into(),
            datetime.to_string(),
            "once".into(),
        )
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn renders_empty_document() {
        let ui = render(&Document::default(), fixed_now());
        assert!(ui.pets.is_empty());
        assert_eq!(ui.total_pets, 0);
        assert_eq!(ui.upcoming_count, 0);
        assert_eq!(ui.chat_targets.len(), 1);
        assert_eq!(ui.chat_targets[0].label, CHAT_PLACEHOLDER);
    }

    #[test]
    fn pet_entry_has_avatar_and_summary() {
        let mut doc = Document::default();
        doc.pets.push(pet("id_1", "mochi"));
        let ui = render(&doc, fixed_now());
        assert_eq!(ui.pets[0].avatar, "M");
        assert_eq!(ui.pets[0].summary, "Dog · Beagle · 3 yrs");
        assert_eq!(ui.total_pets, 1);
    }

    #[test]
    fn unnamed_pet_gets_empty_avatar() {
        let mut doc = Document::default();
        doc.pets.push(pet("id_1", ""));
        let ui = render(&doc, fixed_now());
        assert_eq!(ui.pets[0].avatar, "");
    }

    #[test]
    fn markup_in_names_is_escaped() {
        let mut doc = Document::default();
        doc.pets.push(pet("id_1", "<b>X</b>"));
        let ui = render(&doc, fixed_now());
        assert_eq!(ui.pets[0].name, "&lt;b&gt;X&lt;/b&gt;");
        assert_eq!(ui.owner_choices[0].label, "&lt;b&gt;X&lt;/b&gt;");
    }

    #[test]
    fn dangling_reminder_renders_unknown_owner() {
        let mut doc = Document::default();
        doc.reminders
            .push(reminder("id_1", "id_gone", "2026-08-08T09:00"));
        let ui = render(&doc, fixed_now());
        assert_eq!(ui.reminders[0].owner, UNKNOWN_OWNER);
    }

    #[test]
    fn reminder_owner_resolves_by_id() {
        let mut doc = Document::default();
        doc.pets.push(pet("id_1", "Mochi"));
        doc.reminders
            .push(reminder("id_2", "id_1", "2026-08-08T09:00"));
        let ui = render(&doc, fixed_now());
        assert_eq!(ui.reminders[0].owner, "Mochi");
    }

    #[test]
    fn upcoming_counts_only_strictly_future() {
        let now = fixed_now();
        let past = (now - Duration::hours(1)).to_rfc3339();
        let future = (now + Duration::hours(1)).to_rfc3339();

        let mut doc = Document::default();
        doc.reminders.push(reminder("id_1", "", &past));
        doc.reminders.push(reminder("id_2", "", &future));
        let ui = render(&doc, now);

        assert_eq!(ui.upcoming_count, 1);
        assert!(!ui.reminders[0].upcoming);
        assert!(ui.reminders[1].upcoming);
    }

    #[test]
    fn unparsable_datetime_is_never_upcoming() {
        let mut doc = Document::default();
        doc.reminders.push(reminder("id_1", "", "soonish"));
        let ui = render(&doc, fixed_now());
        assert_eq!(ui.upcoming_count, 0);
        assert_eq!(ui.reminders[0].when, "soonish");
        assert!(ui.reminders[0].due.is_none());
    }

    #[test]
    fn chat_transcript_preserves_order_and_roles() {
        let mut doc = Document::default();
        doc.chats
            .push(ChatMessage::new(ChatRole::User, "hello".into()));
        doc.chats.push(ChatMessage::new(ChatRole::Bot, "hi".into()));
        let ui = render(&doc, fixed_now());
        assert_eq!(ui.chat.len(), 2);
        assert_eq!(ui.chat[0].role, ChatRole::User);
        assert_eq!(ui.chat[1].role, ChatRole::Bot);
    }

    #[test]
    fn chat_text_is_escaped() {
        let mut doc = Document::default();
        doc.chats
            .push(ChatMessage::new(ChatRole::User, "<script>".into()));
        let ui = render(&doc, fixed_now());
        assert_eq!(ui.chat[0].text, "&lt;script&gt;");
    }

    #[test]
    fn escape_covers_all_significant_characters() {
        assert_eq!(escape(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#039;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn parse_datetime_accepts_rfc3339_and_local_forms() {
        assert!(parse_datetime("2026-08-08T09:00:00Z").is_some());
        assert!(parse_datetime("2026-08-08T09:00:00+02:00").is_some());
        assert!(parse_datetime("2026-08-08T09:00:00").is_some());
        assert!(parse_datetime("2026-08-08T09:00").is_some());
        assert!(parse_datetime("tomorrow").is_none());
    }
}
