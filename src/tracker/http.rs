use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;

use super::error::TrackerError;
use super::peer_id::PeerId;
use super::response::{AnnounceEvent, TrackerResponse};
use crate::bencode::decode;
use crate::metainfo::Torrent;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The TCP port reported to the tracker as our listening port.
const DEFAULT_PORT: u16 = 6889;

/// An HTTP tracker session for one torrent.
///
/// Owns the HTTP connection pool and the peer ID used for every announce
/// in this session. Dropping the tracker (or calling [`close`]) releases
/// the connections.
///
/// [`close`]: Tracker::close
pub struct Tracker {
    torrent: Torrent,
    peer_id: PeerId,
    client: Client,
}

impl Tracker {
    /// Creates a tracker session for the torrent's announce URL.
    ///
    /// Generates a fresh [`PeerId`] that stays fixed for the lifetime of
    /// the session.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if the announce URL is not `http://` or
    /// `https://`.
    pub fn new(torrent: Torrent) -> Result<Self, TrackerError> {
        if !torrent.announce.starts_with("http://") && !torrent.announce.starts_with("https://") {
            return Err(TrackerError::InvalidUrl(torrent.announce.clone()));
        }

        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(TrackerError::Http)?;

        Ok(Self {
            torrent,
            peer_id: PeerId::generate(),
            client,
        })
    }

    /// Announces to the tracker and returns its decoded response.
    ///
    /// `first` marks the first announce of this session (`event=started`);
    /// `seeder` marks a client that already has the complete payload
    /// (`event=completed`, which wins over `started` when both are set).
    /// `uploaded` and `downloaded` are session byte totals; the tracker
    /// also receives `left`, derived from the torrent's total size.
    ///
    /// # Errors
    ///
    /// - `Http` for transport failures (connect, timeout, read)
    /// - `Unreachable` if the tracker answers with a non-200 status
    /// - `Failure` if the tracker answers with an error message
    /// - `Bencode` if the response body is not valid bencode
    /// - `TypeMismatch` if the response is not a dictionary
    pub async fn connect(
        &self,
        first: bool,
        uploaded: u64,
        downloaded: u64,
        seeder: bool,
    ) -> Result<TrackerResponse, TrackerError> {
        let left = self.torrent.total_size.saturating_sub(downloaded);

        let mut url = format!(
            "{}?info_hash={}&peer_id={}&port={}&uploaded={}&downloaded={}&left={}&compact=1",
            self.torrent.announce,
            url_encode(self.torrent.info_hash.as_bytes()),
            url_encode(self.peer_id.as_bytes()),
            DEFAULT_PORT,
            uploaded,
            downloaded,
            left
        );

        if let Some(event) = AnnounceEvent::for_announce(first, seeder) {
            url.push_str("&event=");
            url.push_str(event.as_str());
        }

        debug!(url = %url, "announcing to tracker");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(TrackerError::Unreachable {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        check_failure_text(&body)?;

        let dict = decode(&body)?
            .into_dict()
            .ok_or(TrackerError::TypeMismatch {
                field: "response",
                expected: "dictionary",
            })?;

        Ok(TrackerResponse::new(dict))
    }

    /// Shuts the session down, dropping the HTTP connection pool.
    ///
    /// Consuming `self` means a closed tracker cannot announce again;
    /// dropping a `Tracker` without calling this releases the same
    /// resources.
    pub fn close(self) {}

    /// The peer ID announced by this session.
    pub fn peer_id(&self) -> &PeerId {
        &self.peer_id
    }

    /// The torrent this session announces.
    pub fn torrent(&self) -> &Torrent {
        &self.torrent
    }
}

/// Rejects plain-text failure bodies before bencode decoding.
///
/// Trackers sometimes answer errors as bare text instead of a bencoded
/// dictionary. Heuristic: any valid-UTF-8 body containing "failure" is
/// treated as an error message. This relies on well-formed compact
/// responses embedding raw peer records, which are not valid UTF-8.
fn check_failure_text(body: &[u8]) -> Result<(), TrackerError> {
    if let Ok(text) = std::str::from_utf8(body) {
        if text.contains("failure") {
            return Err(TrackerError::Failure(text.to_string()));
        }
    }
    Ok(())
}

fn url_encode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.' || b == b'~' {
                format!("{}", b as char)
            } else {
                format!("%{:02X}", b)
            }
        })
        .collect()
}
