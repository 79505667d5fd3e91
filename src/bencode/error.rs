use thiserror::Error;

/// Errors reported while decoding bencode data.
///
/// Every variant carries the byte offset at which the problem was detected,
/// counted from the start of the input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BencodeError {
    #[error("input ended unexpectedly at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("unexpected byte 0x{byte:02x} at offset {offset}")]
    UnexpectedByte { byte: u8, offset: usize },

    #[error("invalid integer at offset {offset}")]
    InvalidInteger { offset: usize },

    #[error("invalid string length at offset {offset}")]
    InvalidLength { offset: usize },

    #[error("trailing data after value at offset {offset}")]
    TrailingData { offset: usize },

    #[error("nesting too deep at offset {offset}")]
    TooDeep { offset: usize },
}
