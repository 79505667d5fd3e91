use std::collections::BTreeMap;
use std::net::{Ipv4Addr, SocketAddrV4};

use bytes::Bytes;
use tracing::debug;

use super::error::TrackerError;
use crate::bencode::Value;

/// The event reported alongside an announce.
///
/// Regular re-announces carry no event; the first announce of a session
/// reports `started`, and a client that already holds the complete payload
/// reports `completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnounceEvent {
    Started,
    Completed,
}

impl AnnounceEvent {
    /// Selects the event for an announce, if any.
    ///
    /// `completed` wins when both flags are set.
    pub fn for_announce(first: bool, seeder: bool) -> Option<Self> {
        if seeder {
            Some(AnnounceEvent::Completed)
        } else if first {
            Some(AnnounceEvent::Started)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnnounceEvent::Started => "started",
            AnnounceEvent::Completed => "completed",
        }
    }
}

/// A decoded tracker announce response.
///
/// Wraps the response dictionary and exposes typed accessors for the
/// fields an announce cares about. The dictionary is kept as decoded, so
/// fields this crate does not model stay reachable through [`get`].
///
/// [`get`]: TrackerResponse::get
#[derive(Debug, Clone)]
pub struct TrackerResponse {
    dict: BTreeMap<Bytes, Value>,
}

impl TrackerResponse {
    pub fn new(dict: BTreeMap<Bytes, Value>) -> Self {
        Self { dict }
    }

    /// The failure reason the tracker reported, if any.
    ///
    /// A response that carries this field carries no other usable data.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the field is present but is not a valid
    /// UTF-8 string.
    pub fn failure(&self) -> Result<Option<&str>, TrackerError> {
        match self.dict.get(b"failure reason".as_slice()) {
            None => Ok(None),
            Some(value) => value.as_str().map(Some).ok_or(TrackerError::TypeMismatch {
                field: "failure reason",
                expected: "utf-8 string",
            }),
        }
    }

    /// Seconds the client should wait between regular announces.
    ///
    /// Trackers that omit the field get 0; callers should fall back to
    /// their own re-announce default in that case.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the field is present but not an integer.
    pub fn interval(&self) -> Result<i64, TrackerError> {
        self.integer_field("interval")
    }

    /// Number of peers with the complete payload (seeders), 0 if absent.
    pub fn complete(&self) -> Result<i64, TrackerError> {
        self.integer_field("complete")
    }

    /// Number of peers still downloading (leechers), 0 if absent.
    pub fn incomplete(&self) -> Result<i64, TrackerError> {
        self.integer_field("incomplete")
    }

    /// The peers in the swarm, parsed from the compact binary model.
    ///
    /// Each 6-byte record is a big-endian IPv4 address followed by a
    /// big-endian port; peers come back in wire order.
    ///
    /// # Errors
    ///
    /// - `MissingField` if the response has no `peers` key at all
    /// - `UnsupportedPeerFormat` for the list-of-dictionaries peer model
    /// - `MalformedPeers` if the blob length is not a multiple of 6
    /// - `TypeMismatch` for any other value kind
    pub fn peers(&self) -> Result<Vec<SocketAddrV4>, TrackerError> {
        let value = self
            .dict
            .get(b"peers".as_slice())
            .ok_or(TrackerError::MissingField("peers"))?;

        match value {
            Value::Bytes(data) => {
                debug!(len = data.len(), "binary model peers");
                parse_compact_peers(data)
            }
            Value::List(_) => {
                debug!("dictionary model peers");
                Err(TrackerError::UnsupportedPeerFormat)
            }
            _ => Err(TrackerError::TypeMismatch {
                field: "peers",
                expected: "byte string",
            }),
        }
    }

    /// Looks up any response field by key.
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.dict.get(key)
    }

    fn integer_field(&self, field: &'static str) -> Result<i64, TrackerError> {
        match self.dict.get(field.as_bytes()) {
            None => Ok(0),
            Some(value) => value.as_integer().ok_or(TrackerError::TypeMismatch {
                field,
                expected: "integer",
            }),
        }
    }
}

fn parse_compact_peers(data: &[u8]) -> Result<Vec<SocketAddrV4>, TrackerError> {
    if !data.len().is_multiple_of(6) {
        return Err(TrackerError::MalformedPeers { len: data.len() });
    }

    Ok(data
        .chunks_exact(6)
        .map(|chunk| {
            let ip = Ipv4Addr::new(chunk[0], chunk[1], chunk[2], chunk[3]);
            let port = u16::from_be_bytes([chunk[4], chunk[5]]);
            SocketAddrV4::new(ip, port)
        })
        .collect())
}
