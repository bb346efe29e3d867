use crate::commands::{CmdMessage, CmdResult};
use crate::config::PetdeckConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    SetBotName(String),
    SetSeedDemoData(bool),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PetdeckConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::SetBotName(name) => {
            config.bot_name = name;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success("Config updated."));
        }
        ConfigAction::SetSeedDemoData(value) => {
            config.seed_demo_data = value;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success("Config updated."));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_returns_current_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), PetdeckConfig::default());
    }

    #[test]
    fn set_bot_name_persists() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), ConfigAction::SetBotName("Dr. Paws".into())).unwrap();

        let loaded = PetdeckConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.bot_name, "Dr. Paws");
    }

    #[test]
    fn set_seed_demo_data_persists() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), ConfigAction::SetSeedDemoData(false)).unwrap();

        let loaded = PetdeckConfig::load(dir.path()).unwrap();
        assert!(!loaded.seed_demo_data);
    }
}
