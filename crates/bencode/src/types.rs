//! Bencode payload type aliases.

use indexmap::IndexMap;

use crate::Value;

/// Raw byte string payload. Not necessarily UTF-8.
pub type ByteString = Vec<u8>;

/// List payload.
pub type List = Vec<Value>;

/// Dictionary payload.
///
/// Iteration follows insertion (or source) order and equality ignores order.
/// The encoder always emits entries sorted by key bytes.
pub type Dictionary = IndexMap<ByteString, Value>;
