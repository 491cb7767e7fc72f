//! Normalized per mime type settings.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::setting::{SettingId, SettingValue};

/// Settings recorded for one mime type.
///
/// Always carries [`SettingId::Enabled`]; every other key is present only
/// when the batch load recorded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeSettings {
    values: BTreeMap<SettingId, SettingValue>,
}

impl TypeSettings {
    pub fn new() -> Self {
        let mut values = BTreeMap::new();
        values.insert(SettingId::Enabled, SettingValue::Bool(true));
        Self { values }
    }

    pub fn get(&self, id: SettingId) -> Option<&SettingValue> {
        self.values.get(&id)
    }

    pub fn set(&mut self, id: SettingId, value: impl Into<SettingValue>) {
        self.values.insert(id, value.into());
    }

    pub fn is_enabled(&self) -> bool {
        self.get(SettingId::Enabled)
            .and_then(SettingValue::as_bool)
            .unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SettingId, &SettingValue)> {
        self.values.iter().map(|(id, value)| (*id, value))
    }
}

impl Default for TypeSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Mime type name (decoded) to its settings, for one batch load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MimeTypeSettings {
    types: BTreeMap<String, TypeSettings>,
}

impl MimeTypeSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings for `mime_type`, created as `{enabled: true}` on first access.
    pub fn entry(&mut self, mime_type: &str) -> &mut TypeSettings {
        self.types.entry(mime_type.to_string()).or_default()
    }

    pub fn get(&self, mime_type: &str) -> Option<&TypeSettings> {
        self.types.get(mime_type)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates in ascending mime type order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, TypeSettings> {
        self.types.iter()
    }

    pub fn disabled_count(&self) -> usize {
        self.types.values().filter(|s| !s.is_enabled()).count()
    }
}

impl<'a> IntoIterator for &'a MimeTypeSettings {
    type Item = (&'a String, &'a TypeSettings);
    type IntoIter = btree_map::Iter<'a, String, TypeSettings>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
