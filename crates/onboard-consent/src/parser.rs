//! Shared JSON/YAML document loading.
//!
//! Catalogs, field catalogs and entry documents may be authored as JSON or
//! YAML. The format is chosen by file extension, and every failure carries
//! the offending path.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::catalog::TemplateCatalog;
use crate::error::{CatalogError, CatalogResult};

fn read_document(path: &Path) -> CatalogResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Io(e)
        }
    })
}

/// Load a JSON file into a strongly-typed struct.
pub fn load_json_typed<T: DeserializeOwned>(path: &Path) -> CatalogResult<T> {
    let content = read_document(path)?;
    serde_json::from_str(&content).map_err(|e| CatalogError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a YAML file into a strongly-typed struct.
pub fn load_yaml_typed<T: DeserializeOwned>(path: &Path) -> CatalogResult<T> {
    let content = read_document(path)?;
    serde_yaml::from_str(&content).map_err(|e| CatalogError::YamlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a JSON or YAML file, dispatching on its extension.
pub fn load_typed<T: DeserializeOwned>(path: &Path) -> CatalogResult<T> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => load_json_typed(path),
        Some("yaml") | Some("yml") => load_yaml_typed(path),
        _ => Err(CatalogError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load a template catalog from a JSON or YAML file.
pub fn load_catalog(path: &Path) -> CatalogResult<TemplateCatalog> {
    let catalog: TemplateCatalog = load_typed(path)?;
    tracing::debug!(
        path = %path.display(),
        regulators = catalog.regulators().count(),
        templates = catalog.template_count(),
        "loaded consent template catalog"
    );
    Ok(catalog)
}
