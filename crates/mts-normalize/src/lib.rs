//! Batch load mime type settings normalization.
//!
//! Batch loads record mime type settings in a flattened, partially encoded
//! form that does not line up with the settings the processor accepts:
//!
//! ```text
//! Mime type settings.application#47vnd#46ms-outlook.Process embedded = "true"
//! Mime type settings.text#47plain.Text processing mode              = "text_strip"
//! Disabled mime types                                               = "kind:email,text/csv"
//! ```
//!
//! This crate turns one such record into a [`MimeTypeSettings`] map:
//!
//! ```text
//! "application/vnd.ms-outlook" -> { enabled: true, processEmbedded: true }
//! "text/plain"                 -> { enabled: true, textStrip: true, processText: false }
//! "message/rfc822"             -> { enabled: false }
//! ```
//!
//! # Overview
//!
//! - **Key decoding**: [`decode_type_name`], [`canonical_setting_id`] and
//!   [`parse_setting_key`] handle the raw key format
//! - **Normalization**: [`normalize`] folds settings, splits the text mode
//!   and applies the disabled list, expanding kinds through a [`KindLookup`]
//!
//! Anomalous keys are skipped and logged; only kind lookup failures are
//! returned as errors.
//!
//! [`MimeTypeSettings`]: mts_model::MimeTypeSettings
//! [`KindLookup`]: mts_model::KindLookup

mod error;
mod keys;
mod normalizer;

pub use error::NormalizeError;
pub use keys::{
    SETTINGS_PREFIX, SettingKey, TextMode, canonical_setting_id, coerce_value, decode_type_name,
    parse_setting_key,
};
pub use normalizer::{disabled_entries, normalize};
