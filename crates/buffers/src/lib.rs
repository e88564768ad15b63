//! Byte buffer utilities for the bencode codec.
//!
//! # Overview
//!
//! - [`Writer`] - Writes bytes to an auto-growing buffer
//! - [`StreamingReader`] - Reads bytes from any [`std::io::Read`] with one byte of lookahead
//!
//! # Example
//!
//! ```
//! use torrent_bencode_buffers::{StreamingReader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.decimal_u64(4);
//! writer.u8(b':');
//! writer.ascii("spam");
//! let data = writer.flush();
//!
//! let mut reader = StreamingReader::new(data.as_slice());
//! assert_eq!(reader.read_until(b':', 20).unwrap(), b"4");
//! assert_eq!(reader.take(4).unwrap(), b"spam");
//! ```

mod streaming_reader;
mod writer;

pub use streaming_reader::StreamingReader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug)]
pub enum BufferError {
    /// Attempted to read past the end of the stream.
    EndOfBuffer,
    /// A delimited read ran past its length limit.
    Overflow,
    /// The underlying source failed.
    Io(std::io::Error),
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
            BufferError::Overflow => write!(f, "buffer overflow"),
            BufferError::Io(err) => write!(f, "read failed: {err}"),
        }
    }
}

impl std::error::Error for BufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BufferError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BufferError {
    fn from(err: std::io::Error) -> Self {
        BufferError::Io(err)
    }
}
