use thiserror::Error;

/// Errors that can occur while announcing to a tracker or reading its
/// response.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("bencode error: {0}")]
    Bencode(#[from] crate::bencode::BencodeError),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("tracker unreachable: status {status}")]
    Unreachable { status: u16 },

    #[error("tracker announce failed: {0}")]
    Failure(String),

    #[error("unexpected type for {field}: expected {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("compact peer data has {len} bytes, not a multiple of 6")]
    MalformedPeers { len: usize },

    #[error("dictionary-model peer lists are not supported")]
    UnsupportedPeerFormat,
}
