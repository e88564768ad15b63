//! Bencode wire markers and decoder limits.

pub const DICT_START: u8 = b'd';
pub const LIST_START: u8 = b'l';
pub const INT_START: u8 = b'i';
/// Terminator for dictionaries, lists and integers.
pub const END: u8 = b'e';
/// Separates a byte string length prefix from its payload.
pub const LEN_DELIM: u8 = b':';

/// Longest digit run (sign included) read for an integer or a length prefix.
pub const MAX_INTEGER_DIGITS: usize = 64;

/// Default container nesting limit, root dictionary included.
pub const DEFAULT_MAX_DEPTH: usize = 256;
