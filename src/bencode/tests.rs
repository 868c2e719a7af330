use std::collections::BTreeMap;

use bytes::Bytes;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-3e").unwrap(), Value::Integer(-3));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
}

#[test]
fn test_decode_integer_invalid() {
    assert!(matches!(
        decode(b"i03e"),
        Err(BencodeError::InvalidInteger(_))
    ));
    assert!(matches!(
        decode(b"i-0e"),
        Err(BencodeError::InvalidInteger(_))
    ));
    assert!(matches!(decode(b"ie"), Err(BencodeError::InvalidInteger(_))));
    assert!(matches!(
        decode(b"iabce"),
        Err(BencodeError::InvalidInteger(_))
    ));
}

#[test]
fn test_decode_integer_unterminated() {
    assert!(matches!(decode(b"i42"), Err(BencodeError::UnexpectedEof)));
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        decode(b"4:spam").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
    assert_eq!(decode(b"0:").unwrap(), Value::Bytes(Bytes::from_static(b"")));
}

#[test]
fn test_decode_bytes_too_short() {
    assert!(matches!(decode(b"5:spam"), Err(BencodeError::UnexpectedEof)));
}

#[test]
fn test_decode_bytes_invalid_length() {
    assert!(matches!(decode(b"03:foo"), Err(BencodeError::InvalidLength)));
    assert!(matches!(
        decode(b"1x2:foo"),
        Err(BencodeError::InvalidLength)
    ));
}

#[test]
fn test_decode_bytes_missing_colon() {
    assert!(matches!(decode(b"4spam"), Err(BencodeError::UnexpectedEof)));
}

#[test]
fn test_decode_list() {
    let value = decode(b"l4:spami42ee").unwrap();
    assert_eq!(
        value,
        Value::List(vec![
            Value::Bytes(Bytes::from_static(b"spam")),
            Value::Integer(42),
        ])
    );
}

#[test]
fn test_decode_list_unclosed() {
    assert!(matches!(
        decode(b"l4:spam"),
        Err(BencodeError::UnexpectedEof)
    ));
}

#[test]
fn test_decode_dict() {
    let value = decode(b"d3:bar4:spam3:fooi42ee").unwrap();
    let dict = value.as_dict().unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(
        dict.get(b"bar".as_slice()),
        Some(&Value::Bytes(Bytes::from_static(b"spam")))
    );
    assert_eq!(dict.get(b"foo".as_slice()), Some(&Value::Integer(42)));
}

#[test]
fn test_decode_dict_unclosed() {
    assert!(matches!(
        decode(b"d3:foo4:spam"),
        Err(BencodeError::UnexpectedEof)
    ));
}

#[test]
fn test_decode_dict_key_not_byte_string() {
    assert!(matches!(
        decode(b"di42e4:spame"),
        Err(BencodeError::InvalidDictKey)
    ));
}

#[test]
fn test_decode_unknown_type_tag() {
    assert!(matches!(
        decode(b"x42e"),
        Err(BencodeError::UnexpectedChar('x'))
    ));
}

#[test]
fn test_decode_empty_input() {
    assert!(matches!(decode(b""), Err(BencodeError::UnexpectedEof)));
}

#[test]
fn test_decode_trailing_data() {
    assert!(matches!(
        decode(b"i42eextra"),
        Err(BencodeError::TrailingData)
    ));
}

#[test]
fn test_decode_nesting_too_deep() {
    let input = vec![b'l'; 70];
    assert!(matches!(
        decode(&input),
        Err(BencodeError::NestingTooDeep)
    ));
}

#[test]
fn test_encode_integer() {
    assert_eq!(encode(&Value::Integer(42)), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)), b"i-42e");
    assert_eq!(encode(&Value::Integer(0)), b"i0e");
}

#[test]
fn test_encode_bytes() {
    assert_eq!(encode(&Value::Bytes(Bytes::from_static(b"spam"))), b"4:spam");
    assert_eq!(encode(&Value::Bytes(Bytes::from_static(b""))), b"0:");
}

#[test]
fn test_encode_list() {
    let list = Value::List(vec![
        Value::Bytes(Bytes::from_static(b"spam")),
        Value::Integer(42),
    ]);
    assert_eq!(encode(&list), b"l4:spami42ee");
}

#[test]
fn test_encode_dict_sorted() {
    let mut dict = BTreeMap::new();
    dict.insert(Bytes::from_static(b"foo"), Value::Integer(1));
    dict.insert(Bytes::from_static(b"bar"), Value::Integer(2));
    assert_eq!(encode(&Value::Dict(dict)), b"d3:bari2e3:fooi1ee");
}

#[test]
fn test_roundtrip_canonical() {
    let fixtures: &[&[u8]] = &[
        b"i42e",
        b"4:spam",
        b"le",
        b"de",
        b"l4:spami42ee",
        b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee",
    ];

    for fixture in fixtures {
        let decoded = decode(fixture).unwrap();
        assert_eq!(&encode(&decoded), fixture);
    }
}

#[test]
fn test_reencode_normalizes_key_order() {
    // `foo` appears before `bar` in the source; canonical output sorts them.
    let decoded = decode(b"d3:fooi1e3:bari2ee").unwrap();
    assert_eq!(encode(&decoded), b"d3:bari2e3:fooi1ee");
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());

    let value = Value::string("test");
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());

    let value = Value::Bytes(Bytes::from_static(&[0xff, 0xfe]));
    assert!(value.as_str().is_none());

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());
}

#[test]
fn test_value_from_impls() {
    assert_eq!(Value::from(7i64), Value::Integer(7));
    assert_eq!(Value::from("hi"), Value::string("hi"));
    assert_eq!(
        Value::from(vec![Value::Integer(1)]),
        Value::List(vec![Value::Integer(1)])
    );
}
