//! Tests for JSON/CSV rendering and the case export driver.

use std::collections::BTreeSet;
use std::fs;

use mts_export::{
    ExportError, ExportFormat, ExportOptions, export_case, output_file_name, to_json_string,
    write_csv_to,
};
use mts_model::{
    BatchLoadDetail, Case, KindCatalog, KindLookupError, MimeTypeSettings, SettingId,
};

fn sample_settings() -> MimeTypeSettings {
    let mut settings = MimeTypeSettings::new();
    settings.entry("message/rfc822").set(SettingId::Enabled, false);
    let app = settings.entry("app/x");
    app.set(SettingId::ProcessEmbedded, true);
    app.set(SettingId::StoreBinary, false);
    app.set(SettingId::TextStrip, true);
    app.set(SettingId::ProcessText, false);
    settings
}

fn sample_case() -> Case {
    Case {
        name: "Matter 12".to_string(),
        batch_loads: vec![
            BatchLoadDetail::new("1")
                .with_setting("Mime type settings.app#47x.Process embedded", "true")
                .with_setting("Mime type settings.app#47x.Store binary", "false")
                .with_setting("Mime type settings.app#47x.Text processing mode", "text_strip")
                .with_disabled("kind:email"),
            BatchLoadDetail::new("2").with_disabled("text/plain"),
        ],
    }
}

fn email_kinds() -> KindCatalog {
    KindCatalog::default().with_kind("email", ["message/rfc822"])
}

fn csv_string(settings: &MimeTypeSettings) -> String {
    let mut buffer = Vec::new();
    write_csv_to(&mut buffer, settings).unwrap();
    String::from_utf8(buffer).unwrap()
}

// --- Rendering ---

#[test]
fn json_omits_absent_settings() {
    insta::assert_snapshot!(to_json_string(&sample_settings()).unwrap(), @r#"
    {
      "app/x": {
        "enabled": true,
        "processEmbedded": true,
        "processText": false,
        "textStrip": true,
        "storeBinary": false
      },
      "message/rfc822": {
        "enabled": false
      }
    }
    "#);
}

#[test]
fn json_string_ends_with_newline() {
    let json = to_json_string(&sample_settings()).unwrap();
    assert!(json.ends_with("}\n"));
    assert!(!json.contains("null"));
}

#[test]
fn csv_rows_are_sorted_and_sparse() {
    insta::assert_snapshot!(csv_string(&sample_settings()), @r"
    Mime Type,enabled,storeBinary,processNamedEntities,processEmbedded,processImages,processText
    app/x,true,false,,true,,false
    message/rfc822,false,,,,,
    ");
}

#[test]
fn csv_of_empty_settings_is_header_only() {
    assert_eq!(
        csv_string(&MimeTypeSettings::new()),
        "Mime Type,enabled,storeBinary,processNamedEntities,processEmbedded,processImages,processText\n"
    );
}

// --- Export driver ---

#[test]
fn file_names_embed_batch_id() {
    assert_eq!(
        output_file_name("42", "json"),
        "BatchLoad_42_MimeTypeSettings.json"
    );
}

#[test]
fn exports_both_formats_per_batch_load() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("nested").join("out");
    let options = ExportOptions::new(&output_dir);

    let summary = export_case(Some(&sample_case()), &email_kinds(), &options).unwrap();

    assert_eq!(summary.case_name, "Matter 12");
    assert_eq!(summary.batches.len(), 2);
    assert_eq!(summary.file_count(), 4);

    let first = &summary.batches[0];
    assert_eq!(first.batch_id, "1");
    assert_eq!(first.mime_types, 2);
    assert_eq!(first.disabled, 1);
    let json_path = first.json.as_ref().unwrap();
    assert_eq!(json_path, &output_dir.join("BatchLoad_1_MimeTypeSettings.json"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "app/x": {
                "enabled": true,
                "processEmbedded": true,
                "storeBinary": false,
                "textStrip": true,
                "processText": false
            },
            "message/rfc822": {"enabled": false}
        })
    );

    let csv = fs::read_to_string(output_dir.join("BatchLoad_2_MimeTypeSettings.csv")).unwrap();
    assert_eq!(
        csv.lines().collect::<Vec<_>>(),
        vec![
            "Mime Type,enabled,storeBinary,processNamedEntities,processEmbedded,processImages,processText",
            "text/plain,false,,,,,",
        ]
    );
}

#[test]
fn exports_only_requested_format() {
    let dir = tempfile::tempdir().unwrap();
    let options = ExportOptions::new(dir.path()).with_format(ExportFormat::Csv);

    let summary = export_case(Some(&sample_case()), &email_kinds(), &options).unwrap();

    assert_eq!(summary.file_count(), 2);
    assert!(summary.batches.iter().all(|b| b.json.is_none()));
    assert!(!dir.path().join("BatchLoad_1_MimeTypeSettings.json").exists());
    assert!(dir.path().join("BatchLoad_1_MimeTypeSettings.csv").exists());
}

#[test]
fn missing_case_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let options = ExportOptions::new(dir.path());

    let err = export_case::<Case, _>(None, &email_kinds(), &options).unwrap_err();

    assert!(matches!(err, ExportError::MissingSource));
}

#[test]
fn kind_lookup_failure_reports_batch_id() {
    let dir = tempfile::tempdir().unwrap();
    let options = ExportOptions::new(dir.path());
    let lookup = |kind: &str| -> Result<BTreeSet<String>, KindLookupError> {
        Err(KindLookupError::UnknownKind {
            kind: kind.to_string(),
        })
    };

    let err = export_case(Some(&sample_case()), &lookup, &options).unwrap_err();

    assert!(matches!(err, ExportError::Normalize(_)));
    assert!(err.to_string().contains("batch load 1"));
    assert!(!dir.path().join("BatchLoad_1_MimeTypeSettings.json").exists());
}
