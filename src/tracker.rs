//! HTTP tracker announces ([BEP-3]).
//!
//! A tracker keeps the list of peers in a torrent's swarm. Clients announce
//! themselves with an HTTP GET and receive a bencoded response carrying the
//! swarm state and a compact peer list.
//!
//! [`Tracker`] holds one announce session for one torrent: it owns the HTTP
//! client and the generated [`PeerId`]. [`Tracker::connect`] performs an
//! announce and returns a [`TrackerResponse`], whose accessors decode the
//! individual fields on demand.
//!
//! # Examples
//!
//! ```no_run
//! use picobit::metainfo::Torrent;
//! use picobit::tracker::Tracker;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let torrent = Torrent::from_bytes(&data)?;
//!
//! let tracker = Tracker::new(torrent)?;
//! let response = tracker.connect(true, 0, 0, false).await?;
//!
//! if let Some(reason) = response.failure()? {
//!     eprintln!("tracker refused: {reason}");
//! } else {
//!     println!("re-announce in {}s", response.interval()?);
//!     for peer in response.peers()? {
//!         println!("peer {peer}");
//!     }
//! }
//!
//! tracker.close();
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod http;
mod peer_id;
mod response;

pub use error::TrackerError;
pub use http::Tracker;
pub use peer_id::PeerId;
pub use response::{AnnounceEvent, TrackerResponse};

#[cfg(test)]
mod tests;
