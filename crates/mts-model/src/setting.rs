//! Canonical setting identifiers and their values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical, processor-facing name of a mime type setting.
///
/// Declaration order is the key order used when a type's settings are
/// serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingId {
    Enabled,
    ProcessEmbedded,
    ProcessImages,
    ProcessText,
    TextStrip,
    StoreBinary,
    ProcessNamedEntities,
}

impl SettingId {
    pub const ALL: [SettingId; 7] = [
        SettingId::Enabled,
        SettingId::ProcessEmbedded,
        SettingId::ProcessImages,
        SettingId::ProcessText,
        SettingId::TextStrip,
        SettingId::StoreBinary,
        SettingId::ProcessNamedEntities,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SettingId::Enabled => "enabled",
            SettingId::ProcessEmbedded => "processEmbedded",
            SettingId::ProcessImages => "processImages",
            SettingId::ProcessText => "processText",
            SettingId::TextStrip => "textStrip",
            SettingId::StoreBinary => "storeBinary",
            SettingId::ProcessNamedEntities => "processNamedEntities",
        }
    }
}

impl fmt::Display for SettingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a single setting.
///
/// Batch loads only ever carry booleans through the settings block, but an
/// unexpected literal is kept verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Raw(String),
}

impl SettingValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(value) => Some(*value),
            SettingValue::Raw(_) => None,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(value) => write!(f, "{value}"),
            SettingValue::Raw(value) => f.write_str(value),
        }
    }
}
