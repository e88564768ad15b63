//! Bencode value model shared by the decoder and the encoder.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::{ByteString, Dictionary, List};

/// A bencode integer.
///
/// The wire format is unbounded; this model keeps `i64` and falls back to
/// `u64` only for values above `i64::MAX`. Comparison and hashing are numeric,
/// so `Signed(7) == Unsigned(7)`.
#[derive(Debug, Clone, Copy)]
pub enum Integer {
    Signed(i64),
    Unsigned(u64),
}

impl Integer {
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Integer::Signed(n) => Some(n),
            Integer::Unsigned(n) => i64::try_from(n).ok(),
        }
    }

    pub fn as_u64(self) -> Option<u64> {
        match self {
            Integer::Signed(n) => u64::try_from(n).ok(),
            Integer::Unsigned(n) => Some(n),
        }
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Integer::Signed(n) if n < 0)
    }

    fn wide(self) -> i128 {
        match self {
            Integer::Signed(n) => i128::from(n),
            Integer::Unsigned(n) => i128::from(n),
        }
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.wide() == other.wide()
    }
}

impl Eq for Integer {}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.wide().hash(state);
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.wide().cmp(&other.wide())
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer::Signed(n) => write!(f, "{n}"),
            Integer::Unsigned(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for Integer {
    fn from(n: i64) -> Self {
        Integer::Signed(n)
    }
}

impl From<u64> for Integer {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(signed) => Integer::Signed(signed),
            Err(_) => Integer::Unsigned(n),
        }
    }
}

/// A bencode value.
///
/// # Examples
///
/// ```
/// use torrent_bencode::{Dictionary, Value};
///
/// let mut info = Dictionary::new();
/// info.insert(b"name".to_vec(), Value::from("example.iso"));
/// info.insert(b"piece length".to_vec(), Value::from(262_144i64));
///
/// let value = Value::Dictionary(info);
/// assert_eq!(value.get(b"name").and_then(Value::as_str), Some("example.iso"));
/// assert_eq!(value.get(b"piece length").and_then(Value::as_i64), Some(262_144));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    ByteString(ByteString),
    Integer(Integer),
    List(List),
    Dictionary(Dictionary),
}

impl Value {
    /// Short name of the variant, for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::ByteString(_) => "byte string",
            Value::Integer(_) => "integer",
            Value::List(_) => "list",
            Value::Dictionary(_) => "dictionary",
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::ByteString(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// Returns the byte string as text if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()?).ok()
    }

    pub fn as_integer(&self) -> Option<Integer> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer()?.as_i64()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_integer()?.as_u64()
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l.as_slice()),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    pub fn into_dict(self) -> Option<Dictionary> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a dictionary.
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }
}

impl From<Integer> for Value {
    fn from(n: Integer) -> Self {
        Value::Integer(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::ByteString(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::ByteString(s.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::ByteString(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::ByteString(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Value::Dictionary(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_equality_is_numeric() {
        assert_eq!(Integer::Signed(7), Integer::Unsigned(7));
        assert_ne!(Integer::Signed(-1), Integer::Unsigned(u64::MAX));
        assert!(Integer::Signed(i64::MAX) < Integer::Unsigned(i64::MAX as u64 + 1));
    }

    #[test]
    fn integer_from_u64_prefers_signed() {
        assert!(matches!(Integer::from(5u64), Integer::Signed(5)));
        assert!(matches!(
            Integer::from(u64::MAX),
            Integer::Unsigned(u64::MAX)
        ));
    }

    #[test]
    fn integer_narrowing() {
        assert_eq!(Integer::Unsigned(u64::MAX).as_i64(), None);
        assert_eq!(Integer::Signed(-3).as_u64(), None);
        assert_eq!(Integer::Unsigned(42).as_i64(), Some(42));
        assert!(Integer::Signed(-3).is_negative());
        assert_eq!(Integer::Unsigned(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn dictionary_equality_ignores_order() {
        let mut a = Dictionary::new();
        a.insert(b"b".to_vec(), Value::from(2i64));
        a.insert(b"a".to_vec(), Value::from(1i64));
        let mut b = Dictionary::new();
        b.insert(b"a".to_vec(), Value::from(1i64));
        b.insert(b"b".to_vec(), Value::from(2i64));
        assert_eq!(Value::Dictionary(a), Value::Dictionary(b));
    }

    #[test]
    fn accessors() {
        let value = Value::from(vec![Value::from("spam"), Value::from(vec![0xffu8])]);
        let list = value.as_list().unwrap();
        assert_eq!(list[0].as_str(), Some("spam"));
        assert_eq!(list[1].as_bytes(), Some(&[0xffu8][..]));
        assert_eq!(list[1].as_str(), None);
        assert_eq!(value.kind(), "list");
        assert_eq!(value.get(b"spam"), None);
    }
}
