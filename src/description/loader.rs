use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::DescriptionDocument;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read description file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("description file {} is not valid JSON", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and parses the description file. Called once, before the listener
/// is bound; any error here must stop the process.
pub fn load_document(path: impl AsRef<Path>) -> Result<DescriptionDocument, LoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = raw
        .parse::<DescriptionDocument>()
        .map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        categories = document.categories().count(),
        "loaded description document"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_valid_document() {
        let file = write_temp(r#"{"intro": "hello", "features": ["a", "b"]}"#);
        let doc = load_document(file.path()).expect("load document");
        assert_eq!(doc.category("intro"), Some(&json!("hello")));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("description.json");

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("description.json"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = write_temp("{\"intro\": \"hello\",");
        let err = load_document(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn empty_file_is_parse_error() {
        let file = write_temp("");
        assert!(matches!(
            load_document(file.path()),
            Err(LoadError::Parse { .. })
        ));
    }
}
