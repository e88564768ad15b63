//! `BencodeDecoder`: stream decoder for dictionary-rooted bencode.
//!
//! Dispatch is on a one-byte lookahead. Container and integer markers are
//! consumed once they pick a branch; a byte string's first digit is left in
//! place because it belongs to the length prefix. Nothing is ever re-read.

use std::io::Read;
use std::num::IntErrorKind;

use torrent_bencode_buffers::StreamingReader;
use tracing::{debug, trace};

use crate::constants::{
    DEFAULT_MAX_DEPTH, DICT_START, END, INT_START, LEN_DELIM, LIST_START, MAX_INTEGER_DIGITS,
};
use crate::error::BencodeError;
use crate::types::{ByteString, Dictionary, List};
use crate::value::{Integer, Value};

/// State for one `decode` call. Never outlives it.
struct Cur<R> {
    reader: StreamingReader<R>,
    depth: usize,
}

/// Bencode decoder. Holds configuration only, so one instance can serve any
/// number of `decode` calls.
#[derive(Debug, Clone, Copy)]
pub struct BencodeDecoder {
    max_depth: usize,
}

impl Default for BencodeDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BencodeDecoder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limits container nesting, root dictionary included. Zero is treated as one.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Decodes one root dictionary from `input`.
    ///
    /// Decoding stops at the root's terminator. Bytes after it are neither
    /// parsed nor checked, though a chunk of them may already be buffered.
    /// On error no partial tree is returned.
    pub fn decode<R: Read>(&self, input: R) -> Result<Dictionary, BencodeError> {
        let mut c = Cur {
            reader: StreamingReader::new(input),
            depth: 0,
        };
        let result = self.read_root(&mut c);
        match &result {
            Ok(dict) => trace!(
                entries = dict.len(),
                consumed = c.reader.position(),
                "decoded bencode dictionary"
            ),
            Err(err) => debug!(
                error = %err,
                position = c.reader.position(),
                "bencode decode failed"
            ),
        }
        result
    }

    fn read_root<R: Read>(&self, c: &mut Cur<R>) -> Result<Dictionary, BencodeError> {
        match c.reader.peek()? {
            Some(DICT_START) => self.read_dict(c),
            Some(byte) => Err(BencodeError::InvalidRoot(byte)),
            None => Err(BencodeError::UnexpectedEof),
        }
    }

    fn read_any<R: Read>(&self, c: &mut Cur<R>) -> Result<Value, BencodeError> {
        match c.reader.peek()? {
            Some(DICT_START) => self.read_dict(c).map(Value::Dictionary),
            Some(LIST_START) => self.read_list(c).map(Value::List),
            Some(INT_START) => {
                c.reader.u8()?;
                self.read_int(c, END).map(Value::Integer)
            }
            // A leading `-` is a negative length, rejected by `read_bin`.
            Some(b'0'..=b'9' | b'-') => self.read_bin(c).map(Value::ByteString),
            Some(byte) => Err(BencodeError::InvalidByte {
                byte,
                position: c.reader.position(),
            }),
            None => Err(BencodeError::UnexpectedEof),
        }
    }

    fn enter<R>(&self, c: &mut Cur<R>) -> Result<(), BencodeError> {
        c.depth += 1;
        if c.depth > self.max_depth {
            return Err(BencodeError::DepthLimitExceeded(self.max_depth));
        }
        Ok(())
    }

    fn read_dict<R: Read>(&self, c: &mut Cur<R>) -> Result<Dictionary, BencodeError> {
        c.reader.u8()?; // 'd'
        self.enter(c)?;
        let mut dict = Dictionary::new();
        loop {
            match c.reader.peek()? {
                Some(END) => break,
                Some(b'0'..=b'9' | b'-') => {
                    let key = self.read_bin(c)?;
                    let value = self.read_any(c)?;
                    // Duplicate keys keep the last value.
                    dict.insert(key, value);
                }
                Some(_) => return Err(BencodeError::InvalidKey(c.reader.position())),
                None => return Err(BencodeError::UnexpectedEof),
            }
        }
        c.reader.u8()?; // 'e'
        c.depth -= 1;
        Ok(dict)
    }

    fn read_list<R: Read>(&self, c: &mut Cur<R>) -> Result<List, BencodeError> {
        c.reader.u8()?; // 'l'
        self.enter(c)?;
        let mut list = List::new();
        loop {
            match c.reader.peek()? {
                Some(END) => break,
                Some(_) => list.push(self.read_any(c)?),
                None => return Err(BencodeError::UnexpectedEof),
            }
        }
        c.reader.u8()?; // 'e'
        c.depth -= 1;
        Ok(list)
    }

    /// Reads a digit run terminated by `delim` and parses it.
    fn read_int<R: Read>(&self, c: &mut Cur<R>, delim: u8) -> Result<Integer, BencodeError> {
        let raw = c.reader.read_until(delim, MAX_INTEGER_DIGITS)?;
        parse_integer(&raw)
    }

    /// Reads a `<length>:<bytes>` byte string.
    ///
    /// A length prefix that is negative or does not fit in 64 bits is
    /// `InvalidLength`; one that is not a digit run is `MalformedInteger`.
    fn read_bin<R: Read>(&self, c: &mut Cur<R>) -> Result<ByteString, BencodeError> {
        let declared = match self.read_int(c, LEN_DELIM) {
            Ok(n) => n,
            Err(BencodeError::IntegerOutOfRange(text)) => {
                return Err(BencodeError::InvalidLength(text))
            }
            Err(err) => return Err(err),
        };
        if declared.is_negative() {
            return Err(BencodeError::InvalidLength(declared.to_string()));
        }
        let len = declared
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| BencodeError::InvalidLength(declared.to_string()))?;
        if len == 0 {
            return Ok(ByteString::new());
        }
        let bytes = c.reader.take(len)?;
        if bytes.len() < len {
            return Err(BencodeError::TruncatedInput {
                expected: len,
                actual: bytes.len(),
            });
        }
        Ok(bytes)
    }
}

/// Parses `['-'] digit+` as `i64`, falling back to `u64` above `i64::MAX`.
pub(crate) fn parse_integer(raw: &[u8]) -> Result<Integer, BencodeError> {
    let digits = match raw {
        [b'-', rest @ ..] => rest,
        _ => raw,
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(BencodeError::MalformedInteger(
            String::from_utf8_lossy(raw).into_owned(),
        ));
    }
    let text = std::str::from_utf8(raw)
        .map_err(|_| BencodeError::MalformedInteger(String::from_utf8_lossy(raw).into_owned()))?;
    match text.parse::<i64>() {
        Ok(n) => Ok(Integer::Signed(n)),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => text
            .parse::<u64>()
            .map(Integer::Unsigned)
            .map_err(|_| BencodeError::IntegerOutOfRange(text.to_owned())),
        Err(_) => Err(BencodeError::IntegerOutOfRange(text.to_owned())),
    }
}
