use once_cell::sync::Lazy;

/// External collaborator that produces the bot side of the chat.
///
/// The core only requires a synchronous string-to-string signature; what
/// the reply says is not part of the contract.
pub trait Responder {
    fn reply(&self, text: &str) -> String;
}

static RULES: Lazy<Vec<(&'static [&'static str], &'static str)>> = Lazy::new(|| {
    vec![
        (
            &["feed", "food", "eat"] as &[_],
            "Most adult pets do well on two meals a day. Keep fresh water out at all times.",
        ),
        (
            &["vet", "vaccin", "shot"],
            "Annual checkups catch most problems early. Book a vet visit if anything seems off.",
        ),
        (
            &["walk", "exercise", "play"],
            "A tired pet is a happy pet. Aim for at least 30 minutes of activity a day.",
        ),
        (
            &["groom", "bath", "brush"],
            "Regular brushing keeps shedding down and is a good moment to check skin and coat.",
        ),
    ]
});

/// Keyword-matched canned replies with an echo fallback.
#[derive(Debug, Default)]
pub struct CannedResponder;

impl Responder for CannedResponder {
    fn reply(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        for (keywords, reply) in RULES.iter() {
            if keywords.iter().any(|k| lower.contains(k)) {
                return (*reply).to_string();
            }
        }
        format!("🤖 Bot reply to: {}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_returns_canned_reply() {
        let reply = CannedResponder.reply("When should I feed Mochi?");
        assert!(reply.contains("two meals"));
    }

    #[test]
    fn unmatched_input_echoes() {
        let reply = CannedResponder.reply("hello");
        assert!(reply.contains("hello"));
    }
}
