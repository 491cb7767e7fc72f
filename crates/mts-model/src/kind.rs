//! Kind (mime type group) resolution.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{KindLookupError, ModelError, Result};

/// Prefix marking a disabled list entry as a kind reference (`kind:email`).
pub const KIND_PREFIX: &str = "kind:";

const DEFAULT_CATALOG: &str = include_str!("../data/default_kinds.toml");

/// Resolves a kind name to the mime types it contains.
///
/// A defined kind with no members resolves to an empty set.
pub trait KindLookup {
    fn types_of_kind(&self, kind: &str) -> std::result::Result<BTreeSet<String>, KindLookupError>;
}

impl<F> KindLookup for F
where
    F: Fn(&str) -> std::result::Result<BTreeSet<String>, KindLookupError>,
{
    fn types_of_kind(&self, kind: &str) -> std::result::Result<BTreeSet<String>, KindLookupError> {
        self(kind)
    }
}

/// Kind definitions loaded from TOML.
///
/// ```toml
/// [kinds]
/// email = ["message/rfc822", "application/vnd.ms-outlook"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KindCatalog {
    #[serde(default)]
    kinds: BTreeMap<String, BTreeSet<String>>,
}

impl KindCatalog {
    /// Catalog bundled with the crate, used when none is configured.
    pub fn builtin() -> Result<Self> {
        Self::parse(DEFAULT_CATALOG, Path::new("<builtin>"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ModelError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    #[must_use]
    pub fn with_kind<I, S>(mut self, kind: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kinds
            .insert(kind.into(), types.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.kinds.iter().map(|(kind, types)| (kind.as_str(), types))
    }
}

impl KindLookup for KindCatalog {
    fn types_of_kind(&self, kind: &str) -> std::result::Result<BTreeSet<String>, KindLookupError> {
        self.kinds
            .get(kind)
            .cloned()
            .ok_or_else(|| KindLookupError::UnknownKind {
                kind: kind.to_string(),
            })
    }
}
