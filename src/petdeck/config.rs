use crate::error::{PetdeckError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOT_NAME: &str = "PetCare Bot";

/// Configuration for petdeck, stored in config.json next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PetdeckConfig {
    /// Seed demo records the first time the store is opened empty
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// Display name for the bot side of the chat transcript
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_bot_name() -> String {
    DEFAULT_BOT_NAME.to_string()
}

impl Default for PetdeckConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            bot_name: DEFAULT_BOT_NAME.to_string(),
        }
    }
}

impl PetdeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PetdeckError::Io)?;
        let config: PetdeckConfig =
            serde_json::from_str(&content).map_err(PetdeckError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PetdeckError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PetdeckError::Serialization)?;
        fs::write(config_path, content).map_err(PetdeckError::Io)?;
        Ok(())
    }
}
