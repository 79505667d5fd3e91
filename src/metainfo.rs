//! Torrent metainfo handling ([BEP-3]).
//!
//! A torrent file (`.torrent`) is a bencoded dictionary containing the
//! tracker URL and an `info` dictionary that describes the payload. The
//! [`Torrent`] struct holds the parts of it this crate needs: the announce
//! URL, the [`InfoHash`] (the SHA-1 digest of the bencoded `info`
//! dictionary, which identifies the torrent everywhere), the piece hashes,
//! and the total payload size used to report `left` to trackers.
//!
//! Both single-file torrents (`length`) and multi-file torrents (`files`
//! list) are supported; for multi-file torrents the sizes are summed and
//! the individual paths are not retained.
//!
//! # Examples
//!
//! ```no_run
//! use picobit::metainfo::Torrent;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let torrent = Torrent::from_bytes(&data)?;
//!
//! println!("Name: {}", torrent.name);
//! println!("Info hash: {}", torrent.info_hash);
//! println!("Total size: {} bytes", torrent.total_size);
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod info_hash;
mod torrent;

pub use error::MetainfoError;
pub use info_hash::InfoHash;
pub use torrent::Torrent;
