use super::DocumentStore;
use crate::error::{PetdeckError, Result};
use crate::model::Document;
use std::fs;
use std::path::PathBuf;

/// Versioned so a future format change can live alongside old data files.
pub const STORE_FILENAME: &str = "petcare-v1.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(STORE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PetdeckError::Io)?;
        }
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Document> {
        let path = self.data_file();
        if !path.exists() {
            return Ok(Document::default());
        }
        // Unreadable or malformed state is treated as "no state yet".
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Ok(Document::default()),
        };
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    fn save(&mut self, doc: &Document) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(doc).map_err(PetdeckError::Serialization)?;
        fs::write(self.data_file(), content).map_err(PetdeckError::Io)?;
        Ok(())
    }
}
