//! Batch load settings normalization.
//!
//! Settings are folded first and the disabled list second, so disabling a
//! type only flips its `enabled` flag and keeps everything else recorded
//! for it.

use mts_model::{BatchLoadDetail, KIND_PREFIX, KindLookup, MimeTypeSettings, SettingId};
use tracing::{debug, info_span, warn};

use crate::error::NormalizeError;
use crate::keys::{TextMode, canonical_setting_id, coerce_value, parse_setting_key};

/// Normalize the mime type settings recorded by one batch load.
///
/// Keys that are not mime type settings, unknown labels and unknown text
/// modes are skipped. Fails only when a `kind:` entry in the disabled list
/// cannot be expanded.
pub fn normalize<L>(
    batch_load: &BatchLoadDetail,
    kinds: &L,
) -> Result<MimeTypeSettings, NormalizeError>
where
    L: KindLookup + ?Sized,
{
    let span = info_span!("normalize", batch_id = %batch_load.batch_id);
    let _guard = span.enter();

    let mut result = MimeTypeSettings::new();
    for (raw_key, raw_value) in &batch_load.data_processing_settings {
        fold_setting(&mut result, raw_key, raw_value);
    }
    apply_disabled(&mut result, batch_load, kinds)?;

    debug!(
        mime_types = result.len(),
        disabled = result.disabled_count(),
        "normalized batch load"
    );
    Ok(result)
}

/// Entries of a comma separated disabled list, trimmed, empties dropped.
pub fn disabled_entries(spec: &str) -> impl Iterator<Item = &str> {
    spec.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

fn fold_setting(result: &mut MimeTypeSettings, raw_key: &str, raw_value: &str) {
    let Some(key) = parse_setting_key(raw_key) else {
        debug!(key = raw_key, "skipping key that is not a mime type setting");
        return;
    };
    let Some(setting) = canonical_setting_id(key.label) else {
        debug!(key = raw_key, label = key.label, "skipping unknown setting label");
        return;
    };

    if setting == SettingId::ProcessText {
        let Some(mode) = TextMode::parse(raw_value) else {
            warn!(
                mime_type = %key.mime_type,
                value = raw_value,
                "skipping unrecognized text processing mode"
            );
            return;
        };
        let settings = result.entry(&key.mime_type);
        settings.set(SettingId::TextStrip, mode.text_strip());
        settings.set(SettingId::ProcessText, mode.process_text());
        return;
    }

    result
        .entry(&key.mime_type)
        .set(setting, coerce_value(raw_value));
}

fn apply_disabled<L>(
    result: &mut MimeTypeSettings,
    batch_load: &BatchLoadDetail,
    kinds: &L,
) -> Result<(), NormalizeError>
where
    L: KindLookup + ?Sized,
{
    for entry in disabled_entries(batch_load.disabled_mime_types()) {
        match entry.strip_prefix(KIND_PREFIX).map(str::trim) {
            Some(kind) if !kind.is_empty() => {
                let types =
                    kinds
                        .types_of_kind(kind)
                        .map_err(|source| NormalizeError::KindLookup {
                            batch_id: batch_load.batch_id.clone(),
                            kind: kind.to_string(),
                            source,
                        })?;
                debug!(kind, members = types.len(), "disabling kind");
                for mime_type in &types {
                    result.entry(mime_type).set(SettingId::Enabled, false);
                }
            }
            _ => result.entry(entry).set(SettingId::Enabled, false),
        }
    }
    Ok(())
}
