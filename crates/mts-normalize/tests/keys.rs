//! Tests for raw key decoding and setting label mapping.

use mts_model::{SettingId, SettingValue};
use mts_normalize::{
    TextMode, canonical_setting_id, coerce_value, decode_type_name, parse_setting_key,
};
use proptest::prelude::*;

// ============================================================================
// decode_type_name
// ============================================================================

#[test]
fn decodes_all_escape_tokens() {
    assert_eq!(
        decode_type_name("application#47vnd#46ms#45windows#45event#45log"),
        "application/vnd.ms-windows-event-log"
    );
}

#[test]
fn decodes_repeated_tokens() {
    assert_eq!(decode_type_name("a#47b#47c#46#46d"), "a/b/c..d");
}

#[test]
fn leaves_unescaped_names_alone() {
    assert_eq!(decode_type_name("text/plain"), "text/plain");
    assert_eq!(decode_type_name("#44#48#4"), "#44#48#4");
    assert_eq!(decode_type_name(""), "");
}

proptest! {
    #[test]
    fn names_without_hash_are_unchanged(name in "[a-zA-Z0-9/._+-]{0,40}") {
        prop_assert_eq!(decode_type_name(&name), name);
    }

    #[test]
    fn decoding_is_idempotent(name in "([a-z]{0,4}(#45|#46|#47|#4|#)?){0,8}") {
        let once = decode_type_name(&name);
        prop_assert_eq!(decode_type_name(&once), once.clone());
    }
}

// ============================================================================
// canonical_setting_id
// ============================================================================

#[test]
fn maps_known_labels() {
    assert_eq!(
        canonical_setting_id("Process embedded"),
        Some(SettingId::ProcessEmbedded)
    );
    assert_eq!(
        canonical_setting_id("Process images"),
        Some(SettingId::ProcessImages)
    );
    assert_eq!(
        canonical_setting_id("Text processing mode"),
        Some(SettingId::ProcessText)
    );
    assert_eq!(
        canonical_setting_id("Store binary"),
        Some(SettingId::StoreBinary)
    );
    assert_eq!(
        canonical_setting_id("Process named entities"),
        Some(SettingId::ProcessNamedEntities)
    );
}

#[test]
fn unknown_labels_are_not_found() {
    assert_eq!(canonical_setting_id("Some Unknown Label"), None);
    assert_eq!(canonical_setting_id("process embedded"), None);
    assert_eq!(canonical_setting_id(""), None);
}

// ============================================================================
// parse_setting_key
// ============================================================================

#[test]
fn parses_well_formed_keys() {
    let key = parse_setting_key("Mime type settings.app#47x.Store binary").unwrap();
    assert_eq!(key.mime_type, "app/x");
    assert_eq!(key.label, "Store binary");
}

#[test]
fn rejects_malformed_keys() {
    assert_eq!(parse_setting_key("Mime type settings.app#47x"), None);
    assert_eq!(parse_setting_key("Mime type settings.app.x.Store binary"), None);
    assert_eq!(parse_setting_key("Other settings.app#47x.Store binary"), None);
    assert_eq!(parse_setting_key("Mime type settings"), None);
    assert_eq!(parse_setting_key("Process text"), None);
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn coerces_boolean_literals_only() {
    assert_eq!(coerce_value("true"), SettingValue::Bool(true));
    assert_eq!(coerce_value("false"), SettingValue::Bool(false));
    assert_eq!(coerce_value("TRUE"), SettingValue::Raw("TRUE".to_string()));
    assert_eq!(coerce_value(""), SettingValue::Raw(String::new()));
}

#[test]
fn text_modes_split_into_two_flags() {
    let strip = TextMode::parse("text_strip").unwrap();
    assert!(strip.text_strip());
    assert!(!strip.process_text());

    let skip = TextMode::parse("skip_text").unwrap();
    assert!(!skip.text_strip());
    assert!(!skip.process_text());

    let process = TextMode::parse("process_text").unwrap();
    assert!(!process.text_strip());
    assert!(process.process_text());

    assert_eq!(TextMode::parse("strip_text"), None);
}
