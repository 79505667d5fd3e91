//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files and tracker
//! responses.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Decoding consumes the whole input: anything left over after the first
//! value is an error, so a given byte string decodes to at most one value.
//! Dictionaries are held with their keys in lexicographic byte order (the
//! canonical bencode ordering) no matter how they were ordered on the wire,
//! and encoding emits them that way. Re-encoding a decoded value therefore
//! reproduces the input exactly whenever the input was canonically encoded.
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use picobit::bencode::decode;
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//! ```
//!
//! ## Encoding bencode data
//!
//! ```
//! use picobit::bencode::{encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! // Encode an integer
//! assert_eq!(encode(&Value::Integer(42)), b"i42e");
//!
//! // Encode a string
//! assert_eq!(encode(&Value::string("hello")), b"5:hello");
//!
//! // Encode a dictionary; keys come out in canonical order
//! let mut dict = BTreeMap::new();
//! dict.insert(Bytes::from_static(b"spam"), Value::string("eggs"));
//! dict.insert(Bytes::from_static(b"cow"), Value::string("moo"));
//! assert_eq!(encode(&Value::Dict(dict)), b"d3:cow3:moo4:spam4:eggse");
//! ```
//!
//! # Error Handling
//!
//! Decoding fails with a [`BencodeError`] carrying the byte offset of the
//! problem:
//!
//! - [`BencodeError::UnexpectedEnd`] - Input ended mid-value (truncation)
//! - [`BencodeError::UnexpectedByte`] - A byte no value can start with,
//!   including a bare `e` terminator
//! - [`BencodeError::InvalidInteger`] - Malformed integer (empty digits,
//!   `-0`, leading zeros, a sign other than one leading `-`, out of `i64`
//!   range)
//! - [`BencodeError::InvalidLength`] - Malformed string length prefix
//! - [`BencodeError::TrailingData`] - Extra data after the value
//! - [`BencodeError::TooDeep`] - Recursion limit exceeded (max 64 levels)
//!
//! Encoding never fails.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod token;
mod value;

pub use decode::decode;
pub use encode::{encode, encode_into};
pub use error::BencodeError;
pub use value::Value;
