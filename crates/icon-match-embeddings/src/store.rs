//! JSON persistence for catalogs.
//!
//! ```json
//! { "version": 1, "dimension": 300, "model_id": "...", "entries": [{ "label": "gear", "vector": [..] }] }
//! ```
//!
//! Loading goes through the `Catalog` constructor, so a file with duplicate
//! labels, wrong-length vectors or non-finite values is rejected.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use icon_match_core::types::CatalogEntry;
use icon_match_core::{Catalog, CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::EmbeddingError;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    version: u32,
    dimension: usize,
    #[serde(default)]
    model_id: Option<String>,
    entries: Vec<CatalogEntry>,
}

/// Write `catalog` to `path` as JSON.
///
/// The file is written next to its destination first and renamed into
/// place, so readers never observe a half-written catalog. On failure the
/// temporary file is removed.
pub fn save_catalog(catalog: &Catalog, model_id: Option<&str>, path: &Path) -> CoreResult<()> {
    let file = CatalogFile {
        version: FORMAT_VERSION,
        dimension: catalog.dimension(),
        model_id: model_id.map(str::to_string),
        entries: catalog.to_entries(),
    };

    let tmp = path.with_extension("json.tmp");
    if let Err(e) = write_then_rename(&file, &tmp, path) {
        if tmp.exists() {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                warn!(path = %tmp.display(), error = %cleanup, "failed to remove temporary catalog");
            }
        }
        return Err(e);
    }

    info!(path = %path.display(), icons = catalog.len(), "saved catalog");
    Ok(())
}

fn write_then_rename(file: &CatalogFile, tmp: &Path, path: &Path) -> CoreResult<()> {
    let mut writer = BufWriter::new(File::create(tmp)?);
    serde_json::to_writer(&mut writer, file).map_err(EmbeddingError::from)?;
    writer.flush()?;
    drop(writer);
    fs::rename(tmp, path)?;
    Ok(())
}

/// Read a catalog written by [`save_catalog`].
///
/// # Errors
///
/// - `Io` if the file cannot be read
/// - `SerializationError` for malformed JSON or an unsupported version
/// - any `Catalog` construction error for invalid contents
pub fn load_catalog(path: &Path) -> CoreResult<Catalog> {
    let reader = BufReader::new(File::open(path)?);
    let file: CatalogFile = serde_json::from_reader(reader).map_err(EmbeddingError::from)?;

    if file.version != FORMAT_VERSION {
        return Err(CoreError::SerializationError(format!(
            "unsupported catalog version {} (expected {})",
            file.version, FORMAT_VERSION
        )));
    }

    let catalog = Catalog::from_entries(
        file.dimension,
        file.entries.into_iter().map(|e| (e.label, e.vector)),
    )?;

    info!(
        path = %path.display(),
        icons = catalog.len(),
        dimension = catalog.dimension(),
        model = file.model_id.as_deref().unwrap_or("unknown"),
        "loaded catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_entries(
            2,
            vec![
                ("gear".to_string(), vec![1.0, 0.0]),
                ("rocket".to_string(), vec![0.25, -0.5]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        save_catalog(&sample(), Some("hash-embedding-v1-d2"), &path).unwrap();
        let loaded = load_catalog(&path).unwrap();

        assert_eq!(loaded.dimension(), 2);
        assert_eq!(loaded.to_entries(), sample().to_entries());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_failed_save_removes_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the destination makes the final rename fail.
        let path = dir.path().join("catalog.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let err = save_catalog(&sample(), None, &path).unwrap_err();

        assert!(matches!(err, CoreError::Io(_)));
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_load_rejects_duplicate_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"version":1,"dimension":1,"entries":[{"label":"gear","vector":[1.0]},{"label":"gear","vector":[0.5]}]}"#,
        )
        .unwrap();

        assert!(matches!(
            load_catalog(&path).unwrap_err(),
            CoreError::DuplicateLabel { .. }
        ));
    }

    #[test]
    fn test_load_rejects_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"version":9,"dimension":1,"entries":[]}"#).unwrap();

        assert!(matches!(
            load_catalog(&path).unwrap_err(),
            CoreError::SerializationError(_)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
