//! CSV rendering of mime type settings.

use std::io;
use std::path::Path;

use csv::Writer;
use mts_model::{MimeTypeSettings, SettingId};

use crate::error::{ExportError, Result};

/// Setting columns, in output order. `textStrip` has no column.
pub const CSV_SETTINGS: [SettingId; 6] = [
    SettingId::Enabled,
    SettingId::StoreBinary,
    SettingId::ProcessNamedEntities,
    SettingId::ProcessEmbedded,
    SettingId::ProcessImages,
    SettingId::ProcessText,
];

pub const CSV_HEADER: [&str; 7] = [
    "Mime Type",
    "enabled",
    "storeBinary",
    "processNamedEntities",
    "processEmbedded",
    "processImages",
    "processText",
];

pub fn write_csv(path: &Path, settings: &MimeTypeSettings) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(file, settings).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the header and one row per mime type, ascending by name.
///
/// Settings the batch load did not record are written as empty cells.
pub fn write_csv_to<W: io::Write>(writer: W, settings: &MimeTypeSettings) -> csv::Result<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;
    for (mime_type, type_settings) in settings {
        let mut record = Vec::with_capacity(CSV_HEADER.len());
        record.push(mime_type.clone());
        for id in CSV_SETTINGS {
            record.push(
                type_settings
                    .get(id)
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
