//! Decoder Module
//!
//! Pluggable byte-to-model deserialization used by typed retrieval.

use serde::de::DeserializeOwned;

use crate::error::BoxError;

// == Decoder Trait ==
/// Turns a byte payload into a typed model.
///
/// Supplied to the cache at construction time and treated as opaque: its
/// failures propagate to the caller untouched.
pub trait Decoder: Send + Sync {
    /// Decodes `bytes` into an `M`.
    fn decode<M: DeserializeOwned>(&self, bytes: &[u8]) -> std::result::Result<M, BoxError>;
}

// == JSON Decoder ==
/// Default decoder backed by serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode<M: DeserializeOwned>(&self, bytes: &[u8]) -> std::result::Result<M, BoxError> {
        serde_json::from_slice(bytes).map_err(Into::into)
    }
}
