use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Writes datasets as pretty-printed JSON files under one directory.
pub struct AssetWriter {
    output_dir: PathBuf,
}

impl AssetWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Serializes `value` to `<output_dir>/<file_name>`, creating the
    /// directory if needed.
    pub fn write<T: Serialize + ?Sized>(
        &self,
        file_name: &str,
        value: &T,
    ) -> Result<PathBuf, OutputError> {
        let path = self.output_dir.join(file_name);
        let json = serde_json::to_string_pretty(value).map_err(|source| OutputError::Serialize {
            path: path.clone(),
            source,
        })?;
        fs::create_dir_all(&self.output_dir).map_err(|source| OutputError::Io {
            path: self.output_dir.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;
        info!("wrote {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn creates_directory_and_writes_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = AssetWriter::new(temp_dir.path().join("nested").join("assets"));

        let path = writer.write("data.json", &json!({"answer": 42})).unwrap();
        assert!(path.exists());

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"answer\": 42"), "{text}");

        // Second write into an existing directory is fine.
        writer.write("data.json", &json!([])).unwrap();
    }

    #[test]
    fn reports_the_failing_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("occupied");
        fs::write(&blocker, "not a directory").unwrap();

        let writer = AssetWriter::new(&blocker);
        let err = writer.write("data.json", &json!({})).unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
        assert!(err.to_string().contains("occupied"));
    }
}
