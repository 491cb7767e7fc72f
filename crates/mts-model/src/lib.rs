//! Data model for batch load mime type settings.
//!
//! A case holds one or more batch loads. Each batch load records the mime
//! type processing configuration that was in effect for it, flattened into
//! string keys and values. This crate defines that raw shape, the typed
//! shape it normalizes into, and the collaborator traits the normalizer
//! depends on.

pub mod batch_load;
pub mod error;
pub mod kind;
pub mod setting;
pub mod settings;

pub use batch_load::{BatchLoadDetail, BatchLoadSource, Case, DISABLED_MIME_TYPES_KEY};
pub use error::{KindLookupError, ModelError, Result};
pub use kind::{KIND_PREFIX, KindCatalog, KindLookup};
pub use setting::{SettingId, SettingValue};
pub use settings::{MimeTypeSettings, TypeSettings};
