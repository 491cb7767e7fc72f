//! Raw key decoding and setting name mapping.

use mts_model::{SettingId, SettingValue};

/// First segment of every mime type setting key.
pub const SETTINGS_PREFIX: &str = "Mime type settings";

/// Escape tokens used for type names inside dotted keys.
const ESCAPES: [(&str, &str); 3] = [("#45", "-"), ("#46", "."), ("#47", "/")];

/// Batch load labels and the processor setting each one maps to.
const LABELS: [(&str, SettingId); 5] = [
    ("Process embedded", SettingId::ProcessEmbedded),
    ("Process images", SettingId::ProcessImages),
    ("Text processing mode", SettingId::ProcessText),
    ("Store binary", SettingId::StoreBinary),
    ("Process named entities", SettingId::ProcessNamedEntities),
];

/// Decode the escaped characters of a mime type name.
///
/// `#45`, `#46` and `#47` become `-`, `.` and `/`; everything else is
/// unchanged.
pub fn decode_type_name(input: &str) -> String {
    ESCAPES
        .iter()
        .fold(input.to_string(), |name, (token, literal)| {
            name.replace(token, literal)
        })
}

/// Map a batch load setting label to its canonical setting.
pub fn canonical_setting_id(label: &str) -> Option<SettingId> {
    LABELS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, id)| *id)
}

/// A mime type setting key split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingKey<'a> {
    /// Decoded mime type name.
    pub mime_type: String,
    /// Human readable setting label, still unmapped.
    pub label: &'a str,
}

/// Split `Mime type settings.<type>.<label>` into decoded type and label.
///
/// Returns `None` for keys with another prefix or a segment count other
/// than three. Dots inside type names are always escaped, so a literal dot
/// only ever separates segments.
pub fn parse_setting_key(raw_key: &str) -> Option<SettingKey<'_>> {
    let mut parts = raw_key.split('.');
    let (Some(prefix), Some(mime_type), Some(label), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    if prefix != SETTINGS_PREFIX {
        return None;
    }
    Some(SettingKey {
        mime_type: decode_type_name(mime_type),
        label,
    })
}

/// Convert the literals `true` and `false`; keep anything else verbatim.
pub fn coerce_value(raw: &str) -> SettingValue {
    match raw {
        "true" => SettingValue::Bool(true),
        "false" => SettingValue::Bool(false),
        other => SettingValue::Raw(other.to_string()),
    }
}

/// Value of the `Text processing mode` label.
///
/// The processor splits this into two flags, `textStrip` and `processText`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    Strip,
    Skip,
    Process,
}

impl TextMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "text_strip" => Some(TextMode::Strip),
            "skip_text" => Some(TextMode::Skip),
            "process_text" => Some(TextMode::Process),
            _ => None,
        }
    }

    pub fn text_strip(self) -> bool {
        matches!(self, TextMode::Strip)
    }

    pub fn process_text(self) -> bool {
        matches!(self, TextMode::Process)
    }
}
