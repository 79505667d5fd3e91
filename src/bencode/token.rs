//! Byte markers of the bencode grammar.

/// Opens an integer: `i<digits>e`.
pub(crate) const INTEGER: u8 = b'i';

/// Opens a list: `l<values>e`.
pub(crate) const LIST: u8 = b'l';

/// Opens a dictionary: `d<key><value>...e`.
pub(crate) const DICT: u8 = b'd';

/// Terminates integers, lists, and dictionaries.
pub(crate) const END: u8 = b'e';

/// Separates a byte string's length prefix from its payload.
pub(crate) const SEPARATOR: u8 = b':';
