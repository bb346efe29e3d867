use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ChatMessage, ChatRole};
use crate::responder::Responder;
use crate::store::DocumentStore;

use super::helpers::commit;

/// Append a user message and the bot's reply as one pair. Empty input is
/// ignored, not an error.
pub fn send<S: DocumentStore, R: Responder>(
    store: &mut S,
    responder: &R,
    text: &str,
) -> Result<CmdResult> {
    if text.trim().is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to send."));
        return Ok(result);
    }

    let mut doc = store.load()?;
    doc.chats
        .push(ChatMessage::new(ChatRole::User, text.to_string()));
    doc.chats
        .push(ChatMessage::new(ChatRole::Bot, responder.reply(text)));

    let ui = commit(store, &doc)?;
    Ok(CmdResult::default().with_ui(ui))
}

pub fn clear<S: DocumentStore>(store: &mut S) -> Result<CmdResult> {
    let mut doc = store.load()?;
    doc.chats.clear();

    let ui = commit(store, &doc)?;
    let mut result = CmdResult::default().with_ui(ui);
    result.add_message(CmdMessage::success("Chat cleared."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::DocumentStore;

    struct StubResponder;

    impl Responder for StubResponder {
        fn reply(&self, text: &str) -> String {
            format!("re: {}", text)
        }
    }

    #[test]
    fn send_appends_user_then_bot_pair() {
        let mut store = InMemoryStore::new();
        send(&mut store, &StubResponder, "hello").unwrap();

        let doc = store.load().unwrap();
        assert_eq!(doc.chats.len(), 2);
        assert_eq!(doc.chats[0].role, ChatRole::User);
        assert_eq!(doc.chats[0].text, "hello");
        assert_eq!(doc.chats[1].role, ChatRole::Bot);
        assert_eq!(doc.chats[1].text, "re: hello");
    }

    #[test]
    fn send_empty_appends_nothing() {
        let mut store = InMemoryStore::new();
        let before = store.load().unwrap();

        let result = send(&mut store, &StubResponder, "").unwrap();

        assert_eq!(store.load().unwrap(), before);
        assert!(result.ui.is_none());
    }

    #[test]
    fn send_whitespace_appends_nothing() {
        let mut store = InMemoryStore::new();
        send(&mut store, &StubResponder, "   ").unwrap();
        assert!(store.load().unwrap().chats.is_empty());
    }

    #[test]
    fn clear_empties_chats_only() {
        let mut fixture = StoreFixture::new()
            .with_pet("id_1", "Mochi")
            .with_chat(ChatRole::User, "hello")
            .with_chat(ChatRole::Bot, "hi");
        clear(&mut fixture.store).unwrap();

        let doc = fixture.store.load().unwrap();
        assert!(doc.chats.is_empty());
        assert_eq!(doc.pets.len(), 1);
    }
}
