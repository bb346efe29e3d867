use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PetdeckError, Result};
use crate::model::Document;
use crate::store::DocumentStore;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Default export filename.
pub const EXPORT_FILENAME: &str = "petcare.json";

pub fn run<S: DocumentStore>(store: &S, output: Option<PathBuf>) -> Result<CmdResult> {
    let doc = store.load()?;
    let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILENAME));

    let file = File::create(&path).map_err(PetdeckError::Io)?;
    write_document(file, &doc)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    )));
    Ok(result)
}

/// Canonical pretty-printed serialization of the full document.
pub fn write_document<W: Write>(mut writer: W, doc: &Document) -> Result<()> {
    let content = serde_json::to_string_pretty(doc).map_err(PetdeckError::Serialization)?;
    writer.write_all(content.as_bytes()).map_err(PetdeckError::Io)?;
    writer.write_all(b"\n").map_err(PetdeckError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn write_document_round_trips() {
        let fixture = StoreFixture::new()
            .with_pet("id_1", "Mochi")
            .with_reminder("id_2", "id_1", "Vaccination", "2026-08-08T09:00");
        let doc = fixture.store.load().unwrap();

        let mut buf = Vec::new();
        write_document(&mut buf, &doc).unwrap();

        let parsed: Document = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn export_writes_pretty_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("petcare.json");
        let fixture = StoreFixture::new().with_pet("id_1", "Mochi");

        run(&fixture.store, Some(path.clone())).unwrap();

        let raw = std::fs::read_to_string(path).unwrap();
        assert!(raw.contains("\"Mochi\""));
        // Pretty printing spreads the document across lines.
        assert!(raw.lines().count() > 3);
    }
}
