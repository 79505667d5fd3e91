use std::collections::BTreeMap;
use std::net::{Ipv4Addr, SocketAddrV4};

use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::*;
use crate::bencode::{Value, decode, encode};
use crate::metainfo::Torrent;

fn b(s: &[u8]) -> Bytes {
    Bytes::copy_from_slice(s)
}

fn test_torrent(announce: &str) -> Torrent {
    let mut info = BTreeMap::new();
    info.insert(b(b"name"), Value::string("example.txt"));
    info.insert(b(b"piece length"), Value::Integer(16384));
    info.insert(b(b"pieces"), Value::Bytes(b(&[0x11; 20])));
    info.insert(b(b"length"), Value::Integer(1000));

    let mut root = BTreeMap::new();
    root.insert(b(b"announce"), Value::string(announce));
    root.insert(b(b"info"), Value::Dict(info));

    Torrent::from_bytes(&encode(&Value::Dict(root))).unwrap()
}

fn response_from(bencoded: &[u8]) -> TrackerResponse {
    TrackerResponse::new(decode(bencoded).unwrap().into_dict().unwrap())
}

fn percent_encode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
                (b as char).to_string()
            } else {
                format!("%{:02X}", b)
            }
        })
        .collect()
}

fn http_response(status: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// Serves exactly one HTTP request and returns what the client sent.
async fn serve_once(response: Vec<u8>) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 2048];
        let n = socket.read(&mut buf).await.unwrap();
        socket.write_all(&response).await.unwrap();
        String::from_utf8_lossy(&buf[..n]).to_string()
    });

    (format!("http://{addr}/announce"), handle)
}

#[test]
fn test_announce_event_selection() {
    assert_eq!(AnnounceEvent::for_announce(false, false), None);
    assert_eq!(
        AnnounceEvent::for_announce(true, false),
        Some(AnnounceEvent::Started)
    );
    assert_eq!(
        AnnounceEvent::for_announce(false, true),
        Some(AnnounceEvent::Completed)
    );
    assert_eq!(
        AnnounceEvent::for_announce(true, true),
        Some(AnnounceEvent::Completed)
    );
}

#[test]
fn test_announce_event_as_str() {
    assert_eq!(AnnounceEvent::Started.as_str(), "started");
    assert_eq!(AnnounceEvent::Completed.as_str(), "completed");
}

#[test]
fn test_peer_id_format() {
    let peer_id = PeerId::generate();
    let bytes = peer_id.as_bytes();

    assert_eq!(bytes.len(), 20);
    assert_eq!(&bytes[..8], b"-PC0001-");
    assert!(bytes[8..].iter().all(|byte| byte.is_ascii_digit()));
}

#[test]
fn test_peer_id_display_and_client_id() {
    let peer_id = PeerId::generate();

    assert_eq!(peer_id.client_id(), Some("PC0001"));
    // every generated byte is URL-safe, so Display prints all 20 verbatim
    assert_eq!(format!("{peer_id}").len(), 20);
    assert!(format!("{peer_id:?}").contains("PC0001"));
}

#[test]
fn test_peer_ids_are_random() {
    assert_ne!(PeerId::generate().as_bytes(), PeerId::generate().as_bytes());
}

#[test]
fn test_response_defaults_when_fields_absent() {
    let response = response_from(b"de");

    assert_eq!(response.interval().unwrap(), 0);
    assert_eq!(response.complete().unwrap(), 0);
    assert_eq!(response.incomplete().unwrap(), 0);
    assert!(response.failure().unwrap().is_none());
}

#[test]
fn test_response_integer_fields() {
    let response = response_from(b"d8:completei10e10:incompletei5e8:intervali1800ee");

    assert_eq!(response.interval().unwrap(), 1800);
    assert_eq!(response.complete().unwrap(), 10);
    assert_eq!(response.incomplete().unwrap(), 5);
}

#[test]
fn test_response_interval_type_mismatch() {
    let response = response_from(b"d8:interval4:soone");

    assert!(matches!(
        response.interval(),
        Err(TrackerError::TypeMismatch {
            field: "interval",
            ..
        })
    ));
}

#[test]
fn test_response_failure_reason() {
    let response = response_from(b"d14:failure reason13:not availablee");
    assert_eq!(response.failure().unwrap(), Some("not available"));
}

#[test]
fn test_response_failure_reason_not_text() {
    let response = response_from(b"d14:failure reasoni3ee");

    assert!(matches!(
        response.failure(),
        Err(TrackerError::TypeMismatch {
            field: "failure reason",
            ..
        })
    ));
}

#[test]
fn test_response_peers_wire_order() {
    let response =
        response_from(b"d5:peers12:\x7f\x00\x00\x01\x1a\xe1\x0a\x00\x00\x01\x1a\xe2e");

    let peers = response.peers().unwrap();
    assert_eq!(
        peers,
        vec![
            SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 6881),
            SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 1), 6882),
        ]
    );
}

#[test]
fn test_response_empty_peers() {
    let response = response_from(b"d5:peers0:e");
    assert_eq!(response.peers().unwrap(), vec![]);
}

#[test]
fn test_response_peers_not_multiple_of_six() {
    let response = response_from(b"d5:peers7:\x7f\x00\x00\x01\x1a\xe1\x00e");

    assert!(matches!(
        response.peers(),
        Err(TrackerError::MalformedPeers { len: 7 })
    ));
}

#[test]
fn test_response_peers_list_model_unsupported() {
    let response = response_from(b"d5:peersld2:ip9:127.0.0.14:porti6881eeee");

    assert!(matches!(
        response.peers(),
        Err(TrackerError::UnsupportedPeerFormat)
    ));
}

#[test]
fn test_response_peers_missing() {
    let response = response_from(b"de");

    assert!(matches!(
        response.peers(),
        Err(TrackerError::MissingField("peers"))
    ));
}

#[test]
fn test_response_get_exposes_unmodeled_fields() {
    let response = response_from(b"d12:min intervali60ee");

    assert_eq!(
        response.get(b"min interval").and_then(|v| v.as_integer()),
        Some(60)
    );
    assert!(response.get(b"tracker id").is_none());
}

#[tokio::test]
async fn test_tracker_rejects_non_http_url() {
    let torrent = test_torrent("udp://tracker.example.com:6969");

    assert!(matches!(
        Tracker::new(torrent),
        Err(TrackerError::InvalidUrl(_))
    ));
}

#[tokio::test]
async fn test_tracker_accepts_https_url() {
    let torrent = test_torrent("https://tracker.example.com/announce");
    let tracker = Tracker::new(torrent).unwrap();

    assert_eq!(
        tracker.torrent().announce,
        "https://tracker.example.com/announce"
    );
    tracker.close();
}

#[tokio::test]
async fn test_connect_parses_response() {
    let body =
        b"d8:completei10e10:incompletei5e8:intervali1800e5:peers12:\x7f\x00\x00\x01\x1a\xe1\x0a\x00\x00\x01\x1a\xe2e";
    let (url, handle) = serve_once(http_response("200 OK", body)).await;

    let tracker = Tracker::new(test_torrent(&url)).unwrap();
    let response = tracker.connect(true, 0, 0, false).await.unwrap();

    assert_eq!(response.interval().unwrap(), 1800);
    assert_eq!(response.complete().unwrap(), 10);
    assert_eq!(response.incomplete().unwrap(), 5);
    assert!(response.failure().unwrap().is_none());
    assert_eq!(
        response.peers().unwrap(),
        vec![
            SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 6881),
            SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 1), 6882),
        ]
    );

    let request = handle.await.unwrap();
    assert!(request.starts_with("GET /announce?"));
    assert!(request.contains(&format!(
        "info_hash={}",
        percent_encode(tracker.torrent().info_hash.as_bytes())
    )));
    assert!(request.contains(&format!("peer_id={}", tracker.peer_id())));
    assert!(request.contains("port=6889"));
    assert!(request.contains("uploaded=0"));
    assert!(request.contains("downloaded=0"));
    assert!(request.contains("left=1000"));
    assert!(request.contains("compact=1"));
    assert!(request.contains("event=started"));

    tracker.close();
}

#[tokio::test]
async fn test_connect_regular_announce_omits_event() {
    let (url, handle) = serve_once(http_response("200 OK", b"d8:intervali60ee")).await;

    let tracker = Tracker::new(test_torrent(&url)).unwrap();
    tracker.connect(false, 10, 20, false).await.unwrap();

    let request = handle.await.unwrap();
    assert!(!request.contains("event="));
    assert!(request.contains("uploaded=10"));
    assert!(request.contains("downloaded=20"));
    // left is total size minus downloaded
    assert!(request.contains("left=980"));
}

#[tokio::test]
async fn test_connect_seeder_event_wins() {
    let (url, handle) = serve_once(http_response("200 OK", b"d8:intervali60ee")).await;

    let tracker = Tracker::new(test_torrent(&url)).unwrap();
    tracker.connect(true, 0, 1000, true).await.unwrap();

    let request = handle.await.unwrap();
    assert!(request.contains("event=completed"));
    assert!(!request.contains("event=started"));
    assert!(request.contains("left=0"));
}

#[tokio::test]
async fn test_connect_plain_text_failure() {
    let (url, _handle) = serve_once(http_response(
        "200 OK",
        b"failure: torrent not registered",
    ))
    .await;

    let tracker = Tracker::new(test_torrent(&url)).unwrap();
    let err = tracker.connect(true, 0, 0, false).await.unwrap_err();

    match err {
        TrackerError::Failure(text) => assert!(text.contains("torrent not registered")),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connect_non_200_status() {
    let (url, _handle) = serve_once(http_response("503 Service Unavailable", b"")).await;

    let tracker = Tracker::new(test_torrent(&url)).unwrap();
    let err = tracker.connect(true, 0, 0, false).await.unwrap_err();

    assert!(matches!(err, TrackerError::Unreachable { status: 503 }));
}
