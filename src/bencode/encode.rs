use super::token;
use super::value::Value;

/// Encodes a bencode value to a byte vector.
///
/// The output follows the canonical bencode format:
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` (keys in lexicographic byte order)
///
/// Encoding cannot fail: [`Value`] is exactly the set of things bencode can
/// represent, so every value has an encoding.
///
/// # Examples
///
/// ```
/// use picobit::bencode::{encode, Value};
/// use std::collections::BTreeMap;
/// use bytes::Bytes;
///
/// // Encode an integer
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
///
/// // Encode a string
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// // Encode a list
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// // Encode a dictionary
/// let mut dict = BTreeMap::new();
/// dict.insert(Bytes::from_static(b"a"), Value::Integer(1));
/// dict.insert(Bytes::from_static(b"b"), Value::Integer(2));
/// assert_eq!(encode(&Value::Dict(dict)), b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_into(value, &mut buf);
    buf
}

/// Encodes a bencode value by appending to an existing buffer.
///
/// # Examples
///
/// ```
/// use picobit::bencode::{encode_into, Value};
///
/// let mut buf = Vec::new();
/// encode_into(&Value::Integer(1), &mut buf);
/// encode_into(&Value::string("a"), &mut buf);
/// assert_eq!(buf, b"i1e1:a");
/// ```
pub fn encode_into(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Integer(i) => {
            buf.push(token::INTEGER);
            buf.extend_from_slice(i.to_string().as_bytes());
            buf.push(token::END);
        }
        Value::Bytes(b) => {
            buf.extend_from_slice(b.len().to_string().as_bytes());
            buf.push(token::SEPARATOR);
            buf.extend_from_slice(b);
        }
        Value::List(items) => {
            buf.push(token::LIST);
            for item in items {
                encode_into(item, buf);
            }
            buf.push(token::END);
        }
        Value::Dict(entries) => {
            // BTreeMap iteration order is the canonical key order.
            buf.push(token::DICT);
            for (key, val) in entries {
                buf.extend_from_slice(key.len().to_string().as_bytes());
                buf.push(token::SEPARATOR);
                buf.extend_from_slice(key);
                encode_into(val, buf);
            }
            buf.push(token::END);
        }
    }
}
