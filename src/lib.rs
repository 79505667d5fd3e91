//! picobit - a minimal BitTorrent core
//!
//! This library provides the pieces a BitTorrent client needs to join a
//! swarm: the bencode serialization format, torrent metainfo parsing, and
//! HTTP tracker announces.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 Bencode encoding/decoding
//! - [`metainfo`] - BEP-3 Torrent metainfo parsing and info hashes
//! - [`tracker`] - BEP-3 HTTP tracker announces with compact peer lists
//!
//! # Example
//!
//! ```no_run
//! use picobit::{Torrent, Tracker};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let tracker = Tracker::new(Torrent::from_bytes(&data)?)?;
//!
//! let response = tracker.connect(true, 0, 0, false).await?;
//! println!("{} seeders", response.complete()?);
//! # Ok(())
//! # }
//! ```

pub mod bencode;
pub mod metainfo;
pub mod tracker;

pub use bencode::{BencodeError, Value, decode, encode, encode_into};
pub use metainfo::{InfoHash, MetainfoError, Torrent};
pub use tracker::{AnnounceEvent, PeerId, Tracker, TrackerError, TrackerResponse};
