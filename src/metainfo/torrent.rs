use super::error::MetainfoError;
use super::info_hash::InfoHash;
use crate::bencode::{decode, encode};
use sha1::{Digest, Sha1};

/// A parsed torrent file.
///
/// Holds the metadata an announce needs: the tracker URL, the info hash that
/// identifies the torrent, and the total payload size. Piece data is kept so
/// callers can verify downloads, but file layout beyond the total size is
/// not modeled.
///
/// # Examples
///
/// ```no_run
/// use picobit::metainfo::Torrent;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = std::fs::read("example.torrent")?;
/// let torrent = Torrent::from_bytes(&data)?;
///
/// println!("Name: {}", torrent.name);
/// println!("Info hash: {}", torrent.info_hash);
/// println!("Total size: {} bytes", torrent.total_size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Torrent {
    /// Primary tracker URL.
    pub announce: String,
    /// The unique identifier for this torrent (SHA-1 of the info dictionary).
    pub info_hash: InfoHash,
    /// Suggested name for the file or directory.
    pub name: String,
    /// Number of bytes per piece.
    pub piece_length: u64,
    /// SHA-1 hash of each piece (20 bytes each).
    pub pieces: Vec<[u8; 20]>,
    /// Total size of the payload in bytes, across all files.
    pub total_size: u64,
}

impl Torrent {
    /// Parses a torrent file from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data is not valid bencode
    /// - Required fields are missing (announce, info, name, pieces, etc.)
    /// - The pieces field length is not a multiple of 20
    /// - A length field is negative
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let value = decode(data)?;
        let dict = value.as_dict().ok_or(MetainfoError::InvalidField("root"))?;

        let announce = dict
            .get(b"announce".as_slice())
            .and_then(|v| v.as_str())
            .ok_or(MetainfoError::MissingField("announce"))?
            .to_string();

        let info_value = dict
            .get(b"info".as_slice())
            .ok_or(MetainfoError::MissingField("info"))?;

        let info = info_value
            .as_dict()
            .ok_or(MetainfoError::InvalidField("info"))?;

        // The info hash covers the info dictionary exactly as bencoded.
        let info_hash = compute_info_hash(&encode(info_value));

        let name = info
            .get(b"name".as_slice())
            .and_then(|v| v.as_str())
            .ok_or(MetainfoError::MissingField("name"))?
            .to_string();

        let piece_length = info
            .get(b"piece length".as_slice())
            .and_then(|v| v.as_integer())
            .ok_or(MetainfoError::MissingField("piece length"))?;
        let piece_length =
            u64::try_from(piece_length).map_err(|_| MetainfoError::InvalidField("piece length"))?;

        let pieces_bytes = info
            .get(b"pieces".as_slice())
            .and_then(|v| v.as_bytes())
            .ok_or(MetainfoError::MissingField("pieces"))?;

        if pieces_bytes.len() % 20 != 0 {
            return Err(MetainfoError::InvalidField("pieces"));
        }

        let pieces: Vec<[u8; 20]> = pieces_bytes
            .chunks_exact(20)
            .map(|chunk| {
                let mut arr = [0u8; 20];
                arr.copy_from_slice(chunk);
                arr
            })
            .collect();

        let total_size = if let Some(length) = info.get(b"length".as_slice()) {
            // Single-file layout
            length
                .as_integer()
                .and_then(|v| u64::try_from(v).ok())
                .ok_or(MetainfoError::InvalidField("length"))?
        } else if let Some(files) = info.get(b"files".as_slice()).and_then(|v| v.as_list()) {
            // Multi-file layout: the payload size is the sum of file lengths
            let mut total = 0u64;
            for file in files {
                let length = file
                    .get(b"length")
                    .and_then(|v| v.as_integer())
                    .and_then(|v| u64::try_from(v).ok())
                    .ok_or(MetainfoError::InvalidField("files"))?;
                total = total
                    .checked_add(length)
                    .ok_or(MetainfoError::InvalidField("files"))?;
            }
            total
        } else {
            return Err(MetainfoError::MissingField("length or files"));
        };

        Ok(Self {
            announce,
            info_hash,
            name,
            piece_length,
            pieces,
            total_size,
        })
    }
}

fn compute_info_hash(raw_info: &[u8]) -> InfoHash {
    let mut hasher = Sha1::new();
    hasher.update(raw_info);
    InfoHash::new(hasher.finalize().into())
}
