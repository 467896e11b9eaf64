use crate::model::errors::SaveError;
use crate::model::progress::SavedFile;
use crate::shared::filename::output_filename;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Writes save slots as pretty-printed JSON files into one directory.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    directory: PathBuf,
}

impl ProgressStore {
    pub fn open<P: Into<PathBuf>>(directory: P) -> std::io::Result<Self> {
        let directory = directory.into();
        std::fs::create_dir_all(&directory)?;
        Ok(ProgressStore { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Stores `payload` under the sanitized `identifier`, replacing whatever
    /// was saved there before.
    pub async fn save(&self, identifier: &str, payload: &Value) -> Result<SavedFile, SaveError> {
        let file_name = output_filename(identifier)
            .ok_or_else(|| SaveError::UnsafeIdentifier(identifier.to_string()))?;
        let path = self.directory.join(&file_name);

        let contents = to_pretty_json(payload)?;
        tokio::fs::write(&path, contents)
            .await
            .map_err(|source| SaveError::Persistence {
                path: path.display().to_string(),
                source,
            })?;

        Ok(SavedFile { file_name, path })
    }
}

fn to_pretty_json(payload: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    payload.serialize(&mut serializer)?;
    Ok(buffer)
}
