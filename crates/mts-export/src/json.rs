use std::path::Path;

use mts_model::MimeTypeSettings;

use crate::error::{ExportError, Result};

/// Pretty printed JSON with a trailing newline.
pub fn to_json_string(settings: &MimeTypeSettings) -> serde_json::Result<String> {
    let json = serde_json::to_string_pretty(settings)?;
    Ok(format!("{json}\n"))
}

pub fn write_json(path: &Path, settings: &MimeTypeSettings) -> Result<()> {
    let json = to_json_string(settings).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
