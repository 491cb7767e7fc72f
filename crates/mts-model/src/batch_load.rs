//! Raw batch load records and the case that holds them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{ModelError, Result};

/// Key of the data settings entry listing disabled mime types and kinds.
pub const DISABLED_MIME_TYPES_KEY: &str = "Disabled mime types";

/// One batch load as recorded by the case.
///
/// Both maps are kept exactly as recorded; nothing here interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BatchLoadDetail {
    /// Batch identifier. Numeric ids in the case file are kept as text.
    #[serde(deserialize_with = "string_or_number")]
    pub batch_id: String,
    /// Flattened processing settings, e.g.
    /// `"Mime type settings.text#47plain.Store binary" -> "true"`.
    #[serde(default)]
    pub data_processing_settings: BTreeMap<String, String>,
    /// Flattened data settings; only [`DISABLED_MIME_TYPES_KEY`] is read.
    #[serde(default)]
    pub data_settings: BTreeMap<String, String>,
}

impl BatchLoadDetail {
    pub fn new(batch_id: impl Into<String>) -> Self {
        Self {
            batch_id: batch_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data_processing_settings
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, spec: impl Into<String>) -> Self {
        self.data_settings
            .insert(DISABLED_MIME_TYPES_KEY.to_string(), spec.into());
        self
    }

    /// Comma separated disabled list; empty when the batch recorded none.
    pub fn disabled_mime_types(&self) -> &str {
        self.data_settings
            .get(DISABLED_MIME_TYPES_KEY)
            .map_or("", String::as_str)
    }
}

/// Enumerable collection of batch loads, typically a case.
pub trait BatchLoadSource {
    fn name(&self) -> &str;
    fn batch_loads(&self) -> &[BatchLoadDetail];
}

/// A case exported to JSON: its name and its batch loads in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Case {
    pub name: String,
    #[serde(default)]
    pub batch_loads: Vec<BatchLoadDetail>,
}

impl Case {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
        serde_json::from_str(&contents).map_err(|e| ModelError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl BatchLoadSource for Case {
    fn name(&self) -> &str {
        &self.name
    }

    fn batch_loads(&self) -> &[BatchLoadDetail] {
        &self.batch_loads
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
