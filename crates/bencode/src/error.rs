//! Bencode error type.

use thiserror::Error;
use torrent_bencode_buffers::BufferError;

use crate::constants::MAX_INTEGER_DIGITS;

#[derive(Debug, Error)]
pub enum BencodeError {
    #[error("invalid bencode: root must be a dictionary, found byte 0x{0:02x}")]
    InvalidRoot(u8),
    #[error("invalid bencode: dictionary key at position {0} is not a byte string")]
    InvalidKey(usize),
    #[error("invalid bencode: unexpected byte 0x{byte:02x} at position {position}")]
    InvalidByte { byte: u8, position: usize },
    #[error("invalid bencode: invalid byte string length `{0}`")]
    InvalidLength(String),
    #[error("invalid bencode: byte string declares {expected} bytes, input has {actual}")]
    TruncatedInput { expected: usize, actual: usize },
    #[error("invalid bencode: unexpected end of input")]
    UnexpectedEof,
    #[error("invalid bencode: malformed integer `{0}`")]
    MalformedInteger(String),
    #[error("invalid bencode: integer `{0}` does not fit in 64 bits")]
    IntegerOutOfRange(String),
    #[error("invalid bencode: nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),
    #[error("unsupported value: {0}")]
    UnsupportedValue(&'static str),
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<BufferError> for BencodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => BencodeError::UnexpectedEof,
            // Only delimited digit runs carry a limit.
            BufferError::Overflow => {
                BencodeError::IntegerOutOfRange(format!("more than {MAX_INTEGER_DIGITS} digits"))
            }
            BufferError::Io(err) => BencodeError::Io(err),
        }
    }
}
