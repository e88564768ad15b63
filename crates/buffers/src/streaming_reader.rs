//! Streaming reader over any [`std::io::Read`] source.

use std::io::{ErrorKind, Read};

use crate::{BufferError, Writer};

/// A lookahead reader that pulls chunks from a [`Read`] source into an
/// internal [`Writer`] buffer and hands them out byte by byte.
///
/// Bytes are never pushed back: once [`StreamingReader::u8`] or
/// [`StreamingReader::take`] returns them they are consumed. Only
/// [`StreamingReader::peek`] looks ahead without consuming.
#[derive(Debug)]
pub struct StreamingReader<R> {
    inner: R,
    writer: Writer,
    /// Read offset from the start of the unread window (x0 in Writer).
    dx: usize,
    /// Total bytes consumed from the source.
    position: usize,
    chunk_size: usize,
    eof: bool,
}

impl<R: Read> StreamingReader<R> {
    /// Creates a new streaming reader that pulls 8KB chunks.
    pub fn new(inner: R) -> Self {
        Self::with_alloc_size(inner, 8 * 1024)
    }

    /// Creates a new streaming reader with a custom chunk size.
    pub fn with_alloc_size(inner: R, alloc_size: usize) -> Self {
        let chunk_size = alloc_size.max(1);
        Self {
            inner,
            writer: Writer::with_alloc_size(chunk_size),
            dx: 0,
            position: 0,
            chunk_size,
            eof: false,
        }
    }

    /// Number of bytes consumed from the source so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of buffered bytes not consumed yet.
    pub fn size(&self) -> usize {
        self.writer.x - self.writer.x0 - self.dx
    }

    fn consume(&mut self) {
        self.writer.x0 += self.dx;
        self.dx = 0;
    }

    /// Pulls the next chunk from the source. Returns `false` at end of stream.
    fn fill(&mut self) -> Result<bool, BufferError> {
        if self.eof {
            return Ok(false);
        }
        self.consume();
        if self.size() == 0 {
            self.writer.x0 = 0;
            self.writer.x = 0;
        }
        self.writer.ensure_capacity(self.chunk_size);
        let x = self.writer.x;
        loop {
            match self.inner.read(&mut self.writer.uint8[x..x + self.chunk_size]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(false);
                }
                Ok(n) => {
                    self.writer.x += n;
                    return Ok(true);
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(BufferError::Io(err)),
            }
        }
    }

    /// Peeks at the next byte without advancing. `None` at end of stream.
    pub fn peek(&mut self) -> Result<Option<u8>, BufferError> {
        if self.size() == 0 && !self.fill()? {
            return Ok(None);
        }
        Ok(Some(self.writer.uint8[self.writer.x0 + self.dx]))
    }

    /// Reads one byte.
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        match self.peek()? {
            Some(byte) => {
                self.dx += 1;
                self.position += 1;
                Ok(byte)
            }
            None => Err(BufferError::EndOfBuffer),
        }
    }

    /// Reads bytes up to and including `delim`, returning them without the
    /// delimiter.
    ///
    /// Fails with [`BufferError::Overflow`] once more than `limit` bytes
    /// precede the delimiter, and with [`BufferError::EndOfBuffer`] if the
    /// stream ends first.
    pub fn read_until(&mut self, delim: u8, limit: usize) -> Result<Vec<u8>, BufferError> {
        let mut out = Vec::new();
        loop {
            let byte = self.u8()?;
            if byte == delim {
                return Ok(out);
            }
            if out.len() == limit {
                return Err(BufferError::Overflow);
            }
            out.push(byte);
        }
    }

    /// Reads up to `size` bytes. Fewer bytes come back only when the stream
    /// ends first.
    pub fn take(&mut self, size: usize) -> Result<Vec<u8>, BufferError> {
        let mut out = Vec::with_capacity(size.min(self.chunk_size));
        while out.len() < size {
            if self.size() == 0 && !self.fill()? {
                break;
            }
            let start = self.writer.x0 + self.dx;
            let n = (size - out.len()).min(self.size());
            out.extend_from_slice(&self.writer.uint8[start..start + n]);
            self.dx += n;
            self.position += n;
        }
        Ok(out)
    }
}
