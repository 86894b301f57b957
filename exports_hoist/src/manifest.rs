use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::HoistError;
use crate::exports::ExportValue;

/// The fields of a vendored package.json this tool cares about. `exports`
/// wins when present; the legacy trio is the fallback for older packages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NestedManifest {
    pub exports: Option<IndexMap<String, ExportValue>>,
    pub main: Option<String>,
    pub module: Option<String>,
    pub types: Option<String>,
}

pub fn read_nested_manifest(path: &Path) -> Result<NestedManifest, HoistError> {
    let raw = read_manifest_text(path)?;
    serde_json::from_str::<NestedManifest>(&raw).map_err(|err| HoistError::ManifestParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Replaces the `exports` field of the manifest at `manifest_path` and writes
/// it back pretty-printed with a trailing newline. Every other top-level
/// field keeps its position.
pub fn rewrite_manifest_exports(
    manifest_path: &Path,
    exports: &IndexMap<String, ExportValue>,
) -> Result<(), HoistError> {
    let raw = read_manifest_text(manifest_path)?;
    let mut manifest =
        serde_json::from_str::<Map<String, Value>>(&raw).map_err(|err| {
            HoistError::ManifestParse {
                path: manifest_path.to_path_buf(),
                message: err.to_string(),
            }
        })?;

    let exports_value =
        serde_json::to_value(exports).map_err(|err| HoistError::ManifestParse {
            path: manifest_path.to_path_buf(),
            message: err.to_string(),
        })?;
    manifest.insert("exports".to_string(), exports_value);

    let rendered =
        serde_json::to_string_pretty(&manifest).map_err(|err| HoistError::ManifestParse {
            path: manifest_path.to_path_buf(),
            message: err.to_string(),
        })?;
    std::fs::write(manifest_path, format!("{rendered}\n")).map_err(|source| HoistError::Io {
        path: manifest_path.to_path_buf(),
        source,
    })
}

fn read_manifest_text(path: &Path) -> Result<String, HoistError> {
    std::fs::read_to_string(path).map_err(|source| HoistError::Io {
        path: path.to_path_buf(),
        source,
    })
}
