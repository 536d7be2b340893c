use crate::webauthn::{error::Error, proto::reader::ByteReader};
use serde::Deserialize;
use serde_cbor::Value;
use std::collections::BTreeMap;

pub type CborMap = BTreeMap<Value, Value>;

pub const DER_TAG_OCTET_STRING: u8 = 0x04;
pub const DER_TAG_SEQUENCE: u8 = 0x30;
pub const DER_TAG_CONTEXT_1: u8 = 0xa1;

/// Decodes the first CBOR item of `buf` and reports how many bytes it used.
///
/// Authenticator data concatenates the credential public key and the extension map without any
/// length prefix, so the consumed length is the only way to find where one ends.
pub fn decode_cbor_item(buf: &[u8]) -> Result<(Value, usize), Error> {
    let mut deserializer = serde_cbor::Deserializer::from_slice(buf);
    let value = Value::deserialize(&mut deserializer)?;
    Ok((value, deserializer.byte_offset()))
}

/// Decodes a buffer that must hold exactly one CBOR item.
pub fn decode_cbor_exact(buf: &[u8]) -> Result<Value, Error> {
    Ok(serde_cbor::from_slice(buf)?)
}

pub fn as_map<'a>(value: &'a Value, what: &str) -> Result<&'a CborMap, Error> {
    match value {
        Value::Map(map) => Ok(map),
        _ => Err(Error::InvalidAttestationStatement(format!("{} is not a CBOR map", what))),
    }
}

pub fn int_entry(map: &CborMap, key: i64) -> Option<&Value> {
    map.get(&Value::Integer(key as i128))
}

pub fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => i64::try_from(*i).ok(),
        _ => None,
    }
}

pub fn value_as_bytes(value: &Value) -> Option<&[u8]> {
    match value {
        Value::Bytes(b) => Some(b.as_slice()),
        _ => None,
    }
}

/// Converts a CBOR map with text keys, as used by extension outputs and `attStmt`, into a string keyed map.
pub fn into_text_keyed(value: Value, what: &str) -> Result<BTreeMap<String, Value>, Error> {
    match value {
        Value::Map(map) => map
            .into_iter()
            .map(|(k, v)| match k {
                Value::Text(k) => Ok((k, v)),
                other => Err(Error::InvalidAttestationStatement(format!("{} has a non text key {:?}", what, other))),
            })
            .collect(),
        _ => Err(Error::InvalidAttestationStatement(format!("{} is not a CBOR map", what))),
    }
}

/// Reads one DER tag-length-value and returns the tag with its content.
pub fn read_der_tlv<'a>(reader: &mut ByteReader<'a>) -> Result<(u8, &'a [u8]), Error> {
    let tag = reader.read_u8()?;
    let first = reader.read_u8()?;
    let len = if first & 0x80 == 0 {
        first as usize
    } else {
        let count = (first & 0x7f) as usize;
        if count == 0 || count > 4 {
            return Err(Error::InvalidAttestationStatement(format!(
                "unsupported DER length encoding {:#04x}",
                first
            )));
        }
        let mut len = 0usize;
        for _ in 0..count {
            len = (len << 8) | reader.read_u8()? as usize;
        }
        len
    };

    Ok((tag, reader.read_bytes(len)?))
}

/// Descends through nested DER values, taking the first element at each level and checking its tag.
pub fn unwrap_der_path<'a>(buf: &'a [u8], tags: &[u8]) -> Result<&'a [u8], Error> {
    let mut content = buf;
    for expected in tags {
        let mut reader = ByteReader::new(content);
        let (tag, inner) = read_der_tlv(&mut reader)?;
        if tag != *expected {
            return Err(Error::InvalidAttestationStatement(format!(
                "expected DER tag {:#04x}, found {:#04x}",
                expected, tag
            )));
        }
        content = inner;
    }
    Ok(content)
}
