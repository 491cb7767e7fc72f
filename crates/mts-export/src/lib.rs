//! Export of normalized mime type settings.
//!
//! Writes one file per batch load and format:
//!
//! - `BatchLoad_<id>_MimeTypeSettings.json`: nested object, absent
//!   settings omitted
//! - `BatchLoad_<id>_MimeTypeSettings.csv`: one row per mime type sorted by
//!   name, absent settings left blank
//!
//! # Example
//!
//! ```ignore
//! use mts_export::{ExportFormat, ExportOptions, export_case};
//! use mts_model::{Case, KindCatalog};
//!
//! let case = Case::load(Path::new("case.json"))?;
//! let kinds = KindCatalog::builtin()?;
//! let options = ExportOptions::new("out").with_format(ExportFormat::Both);
//! let summary = export_case(Some(&case), &kinds, &options)?;
//! ```

mod error;
mod export;
mod json;
mod tabular;

pub use error::{ExportError, Result};
pub use export::{
    BatchExport, ExportFormat, ExportOptions, ExportSummary, export_batch_load, export_case,
    output_file_name,
};
pub use json::{to_json_string, write_json};
pub use tabular::{CSV_HEADER, CSV_SETTINGS, write_csv, write_csv_to};
