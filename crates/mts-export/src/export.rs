//! Case level export driver.

use std::path::PathBuf;

use mts_model::{BatchLoadDetail, BatchLoadSource, KindLookup};
use mts_normalize::normalize;
use tracing::{info, info_span};

use crate::error::{ExportError, Result};
use crate::json::write_json;
use crate::tabular::write_csv;

/// Output formats to write for each batch load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    #[default]
    Both,
}

impl ExportFormat {
    pub fn includes_json(self) -> bool {
        matches!(self, ExportFormat::Json | ExportFormat::Both)
    }

    pub fn includes_csv(self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Both)
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub format: ExportFormat,
}

impl ExportOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            format: ExportFormat::default(),
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }
}

/// Files written for one batch load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchExport {
    pub batch_id: String,
    pub mime_types: usize,
    pub disabled: usize,
    pub json: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub case_name: String,
    pub output_dir: PathBuf,
    pub batches: Vec<BatchExport>,
}

impl ExportSummary {
    pub fn file_count(&self) -> usize {
        self.batches
            .iter()
            .map(|b| usize::from(b.json.is_some()) + usize::from(b.csv.is_some()))
            .sum()
    }
}

/// `BatchLoad_<batch id>_MimeTypeSettings.<extension>`
pub fn output_file_name(batch_id: &str, extension: &str) -> String {
    format!("BatchLoad_{batch_id}_MimeTypeSettings.{extension}")
}

/// Export every batch load of `source` in load order.
///
/// Stops at the first batch load that fails; files written for earlier
/// batch loads are left in place.
///
/// # Errors
///
/// [`ExportError::MissingSource`] when `source` is `None`, otherwise the
/// first normalization or write failure.
pub fn export_case<S, L>(
    source: Option<&S>,
    kinds: &L,
    options: &ExportOptions,
) -> Result<ExportSummary>
where
    S: BatchLoadSource + ?Sized,
    L: KindLookup + ?Sized,
{
    let source = source.ok_or(ExportError::MissingSource)?;
    let span = info_span!("export", case = source.name());
    let _guard = span.enter();

    info!(output_dir = %options.output_dir.display(), "ensuring output directory exists");
    std::fs::create_dir_all(&options.output_dir).map_err(|e| ExportError::CreateDir {
        path: options.output_dir.clone(),
        source: e,
    })?;

    let mut batches = Vec::with_capacity(source.batch_loads().len());
    for batch_load in source.batch_loads() {
        batches.push(export_batch_load(batch_load, kinds, options)?);
    }

    Ok(ExportSummary {
        case_name: source.name().to_string(),
        output_dir: options.output_dir.clone(),
        batches,
    })
}

/// Normalize one batch load and write the requested formats.
///
/// The output directory must already exist.
pub fn export_batch_load<L>(
    batch_load: &BatchLoadDetail,
    kinds: &L,
    options: &ExportOptions,
) -> Result<BatchExport>
where
    L: KindLookup + ?Sized,
{
    let span = info_span!("batch_load", batch_id = %batch_load.batch_id);
    let _guard = span.enter();

    let settings = normalize(batch_load, kinds)?;

    let json = if options.format.includes_json() {
        let path = batch_path(options, &batch_load.batch_id, "json");
        info!(path = %path.display(), "saving");
        write_json(&path, &settings)?;
        Some(path)
    } else {
        None
    };
    let csv = if options.format.includes_csv() {
        let path = batch_path(options, &batch_load.batch_id, "csv");
        info!(path = %path.display(), "saving");
        write_csv(&path, &settings)?;
        Some(path)
    } else {
        None
    };

    Ok(BatchExport {
        batch_id: batch_load.batch_id.clone(),
        mime_types: settings.len(),
        disabled: settings.disabled_count(),
        json,
        csv,
    })
}

fn batch_path(options: &ExportOptions, batch_id: &str, extension: &str) -> PathBuf {
    options.output_dir.join(output_file_name(batch_id, extension))
}
