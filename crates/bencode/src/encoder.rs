//! `BencodeEncoder`: canonical bencode encoder.
//!
//! Wire format:
//! - Integer: `i<decimal>e`        e.g. `i42e`, `i-7e`
//! - String:  `<byte_len>:<bytes>` e.g. `5:hello`
//! - List:    `l<items>e`
//! - Dict:    `d<sorted key-value pairs>e`

use torrent_bencode_buffers::Writer;
use tracing::{debug, trace};

use crate::constants::{DICT_START, END, INT_START, LEN_DELIM, LIST_START};
use crate::error::BencodeError;
use crate::json::integer_from_json;
use crate::types::{ByteString, Dictionary};
use crate::value::{Integer, Value};

/// Bencode encoder. Output accumulates in a private writer, one region per
/// `encode` call.
#[derive(Debug)]
pub struct BencodeEncoder {
    writer: Writer,
}

impl Default for BencodeEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BencodeEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes `value`. Every `Value` has exactly one encoding, so this
    /// cannot fail.
    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        let out = self.writer.flush();
        trace!(kind = value.kind(), bytes = out.len(), "encoded bencode value");
        out
    }

    /// Encodes a JSON document. `null`, booleans and non-integral numbers
    /// have no bencode form and fail with [`BencodeError::UnsupportedValue`];
    /// no partial output is kept.
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>, BencodeError> {
        self.writer.reset();
        match self.write_json(value) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                self.writer.reset();
                debug!(error = %err, "json document has no bencode encoding");
                Err(err)
            }
        }
    }

    pub fn write_any(&mut self, value: &Value) {
        match value {
            Value::ByteString(b) => self.write_bin(b),
            Value::Integer(n) => self.write_integer(*n),
            Value::List(list) => self.write_arr(list),
            Value::Dictionary(dict) => self.write_obj(dict),
        }
    }

    pub fn write_integer(&mut self, int: Integer) {
        self.writer.u8(INT_START);
        match int {
            Integer::Signed(n) => self.writer.decimal_i64(n),
            Integer::Unsigned(n) => self.writer.decimal_u64(n),
        }
        self.writer.u8(END);
    }

    pub fn write_bin(&mut self, buf: &[u8]) {
        self.writer.decimal_u64(buf.len() as u64);
        self.writer.u8(LEN_DELIM);
        self.writer.buf(buf);
    }

    pub fn write_arr(&mut self, arr: &[Value]) {
        self.writer.u8(LIST_START);
        for item in arr {
            self.write_any(item);
        }
        self.writer.u8(END);
    }

    pub fn write_obj(&mut self, obj: &Dictionary) {
        self.writer.u8(DICT_START);
        // Keys are sorted on every call; insertion order is never trusted.
        let mut sorted: Vec<(&ByteString, &Value)> = obj.iter().collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (key, val) in sorted {
            self.write_bin(key);
            self.write_any(val);
        }
        self.writer.u8(END);
    }

    pub fn write_json(&mut self, value: &serde_json::Value) -> Result<(), BencodeError> {
        match value {
            serde_json::Value::Null => return Err(BencodeError::UnsupportedValue("null")),
            serde_json::Value::Bool(_) => return Err(BencodeError::UnsupportedValue("boolean")),
            serde_json::Value::Number(n) => self.write_integer(integer_from_json(n)?),
            serde_json::Value::String(s) => self.write_bin(s.as_bytes()),
            serde_json::Value::Array(arr) => {
                self.writer.u8(LIST_START);
                for item in arr {
                    self.write_json(item)?;
                }
                self.writer.u8(END);
            }
            serde_json::Value::Object(obj) => {
                self.writer.u8(DICT_START);
                let mut sorted: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
                sorted.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
                for (key, val) in sorted {
                    self.write_bin(key.as_bytes());
                    self.write_json(val)?;
                }
                self.writer.u8(END);
            }
        }
        Ok(())
    }
}
