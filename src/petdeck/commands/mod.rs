use crate::config::PetdeckConfig;
use crate::render::UiState;

pub mod add_pet;
pub mod add_reminder;
pub mod chat;
pub mod config;
pub mod delete_pet;
pub mod delete_reminder;
pub mod export;
pub mod helpers;
pub mod import;
pub mod seed;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to its caller. Mutating commands always carry
/// the UI state rebuilt from the document they just saved.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub ui: Option<UiState>,
    pub config: Option<PetdeckConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_ui(mut self, ui: UiState) -> Self {
        self.ui = Some(ui);
        self
    }

    pub fn with_config(mut self, config: PetdeckConfig) -> Self {
        self.config = Some(config);
        self
    }
}
