use super::value::Value;

/// Encodes a bencode value to its canonical byte form.
///
/// Encoding cannot fail: every [`Value`] has exactly one canonical
/// encoding. Dictionary entries are emitted in ascending raw-key-byte order
/// regardless of how the dictionary was built, which is what makes a
/// torrent's info hash reproducible even when the source file was not
/// canonically ordered.
///
/// # Examples
///
/// ```
/// use bitmeta::bencode::{encode, Value};
/// use bytes::Bytes;
/// use std::collections::BTreeMap;
///
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// let mut dict = BTreeMap::new();
/// dict.insert(Bytes::from_static(b"a"), Value::Integer(1));
/// dict.insert(Bytes::from_static(b"b"), Value::Integer(2));
/// assert_eq!(encode(&Value::Dict(dict)), b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_value(value, &mut buf);
    buf
}

fn encode_value(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Integer(i) => {
            buf.push(b'i');
            buf.extend_from_slice(i.to_string().as_bytes());
            buf.push(b'e');
        }
        Value::Bytes(b) => {
            buf.extend_from_slice(b.len().to_string().as_bytes());
            buf.push(b':');
            buf.extend_from_slice(b);
        }
        Value::List(items) => {
            buf.push(b'l');
            for item in items {
                encode_value(item, buf);
            }
            buf.push(b'e');
        }
        Value::Dict(entries) => {
            // BTreeMap iteration is already in ascending key order.
            buf.push(b'd');
            for (key, val) in entries {
                buf.extend_from_slice(key.len().to_string().as_bytes());
                buf.push(b':');
                buf.extend_from_slice(key);
                encode_value(val, buf);
            }
            buf.push(b'e');
        }
    }
}
