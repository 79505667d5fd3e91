use super::error::BencodeError;
use super::token;
use super::value::Value;
use bytes::Bytes;
use std::collections::BTreeMap;

const MAX_DEPTH: usize = 64;

pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let mut pos = 0;
    let value = decode_value(data, &mut pos, 0)?;

    if pos != data.len() {
        return Err(BencodeError::TrailingData { offset: pos });
    }

    Ok(value)
}

fn decode_value(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    if depth > MAX_DEPTH {
        return Err(BencodeError::TooDeep { offset: *pos });
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEnd { offset: *pos });
    }

    match data[*pos] {
        token::INTEGER => decode_integer(data, pos),
        token::LIST => decode_list(data, pos, depth),
        token::DICT => decode_dict(data, pos, depth),
        b'0'..=b'9' => decode_bytes(data, pos),
        byte => Err(BencodeError::UnexpectedByte { byte, offset: *pos }),
    }
}

fn decode_integer(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    let start = *pos;
    *pos += 1;

    let mut negative = false;
    if data.get(*pos) == Some(&b'-') {
        negative = true;
        *pos += 1;
    }

    let digits = *pos;
    while *pos < data.len() && data[*pos].is_ascii_digit() {
        *pos += 1;
    }

    match data.get(*pos) {
        None => return Err(BencodeError::UnexpectedEnd { offset: data.len() }),
        Some(&token::END) => {}
        // catches '+', a stray '-', and anything else inside the numeral
        Some(_) => return Err(BencodeError::InvalidInteger { offset: *pos }),
    }

    let text = &data[digits..*pos];
    if text.is_empty() {
        return Err(BencodeError::InvalidInteger { offset: digits });
    }
    // "-0" and zero-padded numerals have no canonical meaning.
    if text[0] == b'0' && (negative || text.len() > 1) {
        return Err(BencodeError::InvalidInteger { offset: digits });
    }

    let value: i64 = std::str::from_utf8(&data[start + 1..*pos])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(BencodeError::InvalidInteger { offset: digits })?;

    *pos += 1;
    Ok(Value::Integer(value))
}

fn decode_bytes(data: &[u8], pos: &mut usize) -> Result<Value, BencodeError> {
    let start = *pos;
    while *pos < data.len() && data[*pos].is_ascii_digit() {
        *pos += 1;
    }

    match data.get(*pos) {
        None => return Err(BencodeError::UnexpectedEnd { offset: data.len() }),
        Some(&token::SEPARATOR) => {}
        Some(_) => return Err(BencodeError::InvalidLength { offset: *pos }),
    }

    let len: usize = std::str::from_utf8(&data[start..*pos])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(BencodeError::InvalidLength { offset: start })?;

    *pos += 1;

    if data.len() - *pos < len {
        return Err(BencodeError::UnexpectedEnd { offset: data.len() });
    }

    let bytes = Bytes::copy_from_slice(&data[*pos..*pos + len]);
    *pos += len;

    Ok(Value::Bytes(bytes))
}

fn decode_list(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    *pos += 1;
    let mut list = Vec::new();

    while *pos < data.len() && data[*pos] != token::END {
        list.push(decode_value(data, pos, depth + 1)?);
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEnd { offset: *pos });
    }

    *pos += 1;
    Ok(Value::List(list))
}

fn decode_dict(data: &[u8], pos: &mut usize, depth: usize) -> Result<Value, BencodeError> {
    *pos += 1;
    let mut dict = BTreeMap::new();

    while *pos < data.len() && data[*pos] != token::END {
        let key_offset = *pos;
        let key = match decode_value(data, pos, depth + 1)? {
            Value::Bytes(b) => b,
            _ => {
                return Err(BencodeError::UnexpectedByte {
                    byte: data[key_offset],
                    offset: key_offset,
                });
            }
        };

        let value = decode_value(data, pos, depth + 1)?;
        // Wire order is not preserved; a repeated key keeps its last value.
        dict.insert(key, value);
    }

    if *pos >= data.len() {
        return Err(BencodeError::UnexpectedEnd { offset: *pos });
    }

    *pos += 1;
    Ok(Value::Dict(dict))
}
