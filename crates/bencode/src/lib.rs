//! Bencode (BitTorrent metainfo) decoding and canonical encoding.
//!
//! The decoder reads one dictionary-rooted document from any
//! [`std::io::Read`]; the encoder writes any [`Value`] with dictionary keys in
//! ascending byte order, so equal values always produce identical bytes (and
//! identical info-hashes).
//!
//! # Example
//!
//! ```
//! use torrent_bencode::{decode, encode, Value};
//!
//! let dict = decode(&b"d8:announce9:udp://x:14:infod6:lengthi42eee"[..]).unwrap();
//! let info = &dict[&b"info"[..]];
//! assert_eq!(info.get(b"length").and_then(Value::as_i64), Some(42));
//!
//! // Re-encoding a canonical document reproduces it byte for byte.
//! assert_eq!(
//!     encode(&Value::Dictionary(dict)),
//!     b"d8:announce9:udp://x:14:infod6:lengthi42eee"
//! );
//! ```

mod constants;
mod decoder;
mod encoder;
mod error;
mod json;
mod types;
mod value;

use std::io::Read;

pub use constants::{DEFAULT_MAX_DEPTH, MAX_INTEGER_DIGITS};
pub use decoder::BencodeDecoder;
pub use encoder::BencodeEncoder;
pub use error::BencodeError;
pub use types::{ByteString, Dictionary, List};
pub use value::{Integer, Value};

/// Decodes a dictionary-rooted bencode document with default limits.
pub fn decode<R: Read>(input: R) -> Result<Dictionary, BencodeError> {
    BencodeDecoder::new().decode(input)
}

/// Encodes `value` in canonical form.
pub fn encode(value: &Value) -> Vec<u8> {
    BencodeEncoder::new().encode(value)
}
