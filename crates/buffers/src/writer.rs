//! Byte buffer writer with auto-growing capacity.

/// A byte buffer writer that grows automatically as needed.
///
/// Bytes between `x0` and `x` are the pending output; [`Writer::flush`] hands
/// them out and moves `x0` forward.
///
/// # Example
///
/// ```
/// use torrent_bencode_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(b'i');
/// writer.decimal_i64(-42);
/// writer.u8(b'e');
/// assert_eq!(writer.flush(), b"i-42e");
/// ```
#[derive(Debug)]
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Position where last flush happened.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
    /// Allocation size when buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with default allocation size (4KB).
    pub fn new() -> Self {
        Self::with_alloc_size(4 * 1024)
    }

    /// Creates a new writer with custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        let alloc_size = alloc_size.max(1);
        Self {
            uint8: vec![0u8; alloc_size],
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.x - self.x0
    }

    pub fn is_empty(&self) -> bool {
        self.x == self.x0
    }

    /// Bytes written since the last flush, without consuming them.
    pub fn pending(&self) -> &[u8] {
        &self.uint8[self.x0..self.x]
    }

    /// Ensures the buffer has at least `capacity` bytes available after `x`.
    ///
    /// Growing moves the pending region to the start of the new buffer, which
    /// also reclaims the space before `x0`.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.len() - self.x;
        if remaining < capacity {
            let total = self.uint8.len() - self.x0;
            let required = capacity - remaining;
            let total_required = total + required;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let x0 = self.x0;
        let x = self.x;
        let mut new_buf = vec![0u8; new_size];
        new_buf[..x - x0].copy_from_slice(&self.uint8[x0..x]);
        self.uint8 = new_buf;
        self.x = x - x0;
        self.x0 = 0;
    }

    /// Drops pending bytes and starts a new output region at the cursor.
    pub fn reset(&mut self) {
        self.x0 = self.x;
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Writes a single byte.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = val;
        self.x += 1;
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        self.uint8[self.x..self.x + length].copy_from_slice(buf);
        self.x += length;
    }

    /// Writes an ASCII string.
    pub fn ascii(&mut self, s: &str) {
        self.buf(s.as_bytes());
    }

    /// Writes `val` as ASCII decimal digits, without leading zeros.
    pub fn decimal_u64(&mut self, val: u64) {
        // u64::MAX has 20 digits
        let mut digits = [0u8; 20];
        let mut pos = digits.len();
        let mut rest = val;
        loop {
            pos -= 1;
            digits[pos] = b'0' + (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        self.buf(&digits[pos..]);
    }

    /// Writes `val` as ASCII decimal digits with a leading `-` when negative.
    pub fn decimal_i64(&mut self, val: i64) {
        if val < 0 {
            self.u8(b'-');
        }
        self.decimal_u64(val.unsigned_abs());
    }
}
