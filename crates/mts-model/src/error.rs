use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse case file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse kind catalog {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ModelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// Failure reported by a [`crate::KindLookup`] collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KindLookupError {
    /// The kind is not defined by the lookup source.
    #[error("unknown kind: {kind}")]
    UnknownKind { kind: String },

    /// The lookup source could not answer.
    #[error("kind lookup unavailable for {kind}: {message}")]
    Unavailable { kind: String, message: String },
}
