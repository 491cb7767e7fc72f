//! Error types for settings normalization.

use mts_model::KindLookupError;
use thiserror::Error;

/// Errors that abort normalization of a batch load.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A disabled `kind:` entry could not be expanded.
    #[error("batch load {batch_id}: failed to expand kind '{kind}': {source}")]
    KindLookup {
        batch_id: String,
        kind: String,
        #[source]
        source: KindLookupError,
    },
}
