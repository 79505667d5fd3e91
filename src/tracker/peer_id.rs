use std::fmt;

use rand::Rng as _;

const PEER_ID_PREFIX: &[u8] = b"-PC0001-";

/// A 20-byte peer identifier.
///
/// Peer IDs identify BitTorrent clients in the swarm. They follow the
/// Azureus-style format: `-XX0000-<random>` where XX is the client ID
/// and 0000 is the version number.
///
/// # Format
///
/// This library generates peer IDs in the format `-PC0001-<12 random
/// decimal digits>`, where `PC` identifies picobit and `0001` is the
/// version.
///
/// # Examples
///
/// ```
/// use picobit::tracker::PeerId;
///
/// let peer_id = PeerId::generate();
/// assert_eq!(peer_id.as_bytes().len(), 20);
/// assert_eq!(peer_id.client_id(), Some("PC0001"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerId([u8; 20]);

impl PeerId {
    /// Generates a new random peer ID with the picobit client prefix.
    pub fn generate() -> Self {
        let mut id = [0u8; 20];
        id[..8].copy_from_slice(PEER_ID_PREFIX);
        let mut rng = rand::rng();
        for byte in &mut id[8..] {
            *byte = rng.random_range(b'0'..=b'9');
        }
        Self(id)
    }

    /// Returns the raw 20-byte peer ID.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Extracts the client identifier if using Azureus-style format.
    ///
    /// Returns the 6-character client ID (e.g., "PC0001") if the peer ID
    /// follows the `-XXXXXX-` format, otherwise `None`.
    pub fn client_id(&self) -> Option<&str> {
        if self.0[0] == b'-' && self.0[7] == b'-' {
            std::str::from_utf8(&self.0[1..7]).ok()
        } else {
            None
        }
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(client) = self.client_id() {
            write!(f, "PeerId({})", client)
        } else {
            write!(f, "PeerId({:02x?})", &self.0[..8])
        }
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            if byte.is_ascii_alphanumeric() || *byte == b'-' {
                write!(f, "{}", *byte as char)?;
            } else {
                write!(f, "%{:02x}", byte)?;
            }
        }
        Ok(())
    }
}
