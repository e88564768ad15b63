//! Conversions between bencode values and `serde_json` documents.

use crate::error::BencodeError;
use crate::types::Dictionary;
use crate::value::{Integer, Value};

pub(crate) fn integer_from_json(n: &serde_json::Number) -> Result<Integer, BencodeError> {
    if let Some(i) = n.as_i64() {
        Ok(Integer::Signed(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Integer::Unsigned(u))
    } else {
        Err(BencodeError::UnsupportedValue("non-integral number"))
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = BencodeError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Err(BencodeError::UnsupportedValue("null")),
            serde_json::Value::Bool(_) => Err(BencodeError::UnsupportedValue("boolean")),
            serde_json::Value::Number(n) => integer_from_json(n).map(Value::Integer),
            serde_json::Value::String(s) => Ok(Value::from(s.as_str())),
            serde_json::Value::Array(arr) => arr
                .iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            serde_json::Value::Object(obj) => obj
                .iter()
                .map(|(k, v)| Ok::<_, BencodeError>((k.as_bytes().to_vec(), Value::try_from(v)?)))
                .collect::<Result<Dictionary, BencodeError>>()
                .map(Value::Dictionary),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = BencodeError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Value::try_from(&value)
    }
}

impl Value {
    /// Renders this value as JSON, for inspecting metainfo.
    ///
    /// Returns `None` if any byte string (key or value) is not UTF-8, which
    /// is the case for the `pieces` field of real torrents. Dictionary keys
    /// come out in canonical order.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        Some(match self {
            Value::ByteString(b) => {
                serde_json::Value::String(String::from_utf8(b.clone()).ok()?)
            }
            Value::Integer(Integer::Signed(n)) => serde_json::Value::from(*n),
            Value::Integer(Integer::Unsigned(n)) => serde_json::Value::from(*n),
            Value::List(list) => serde_json::Value::Array(
                list.iter().map(Value::to_json).collect::<Option<Vec<_>>>()?,
            ),
            Value::Dictionary(dict) => {
                let mut entries: Vec<_> = dict.iter().collect();
                entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
                let mut map = serde_json::Map::with_capacity(entries.len());
                for (key, val) in entries {
                    map.insert(String::from_utf8(key.clone()).ok()?, val.to_json()?);
                }
                serde_json::Value::Object(map)
            }
        })
    }
}
