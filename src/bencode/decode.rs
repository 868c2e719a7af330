use std::collections::BTreeMap;

use bytes::Bytes;

use super::error::BencodeError;
use super::value::Value;

const MAX_DEPTH: usize = 64;

/// Decodes a single bencode value, consuming the entire buffer.
///
/// Bytes left over after the top-level value are an error
/// ([`BencodeError::TrailingData`]), never silently ignored.
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let mut parser = Parser { data, pos: 0 };
    let value = parser.value(0)?;

    if parser.pos != data.len() {
        return Err(BencodeError::TrailingData);
    }

    Ok(value)
}

struct Parser<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        if depth > MAX_DEPTH {
            return Err(BencodeError::NestingTooDeep);
        }

        match self.peek().ok_or(BencodeError::UnexpectedEof)? {
            b'i' => self.integer(),
            b'l' => self.list(depth),
            b'd' => self.dict(depth),
            b'0'..=b'9' => self.byte_string(),
            c => Err(BencodeError::UnexpectedChar(c as char)),
        }
    }

    fn integer(&mut self) -> Result<Value, BencodeError> {
        self.pos += 1;

        let start = self.pos;
        while self.peek().is_some_and(|b| b != b'e') {
            self.pos += 1;
        }
        if self.pos >= self.data.len() {
            return Err(BencodeError::UnexpectedEof);
        }

        let digits = &self.data[start..self.pos];
        self.pos += 1;
        parse_integer(digits).map(Value::Integer)
    }

    fn byte_string(&mut self) -> Result<Value, BencodeError> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b != b':') {
            self.pos += 1;
        }
        if self.pos >= self.data.len() {
            return Err(BencodeError::UnexpectedEof);
        }

        let len = parse_length(&self.data[start..self.pos])?;
        self.pos += 1;

        if len > self.data.len() - self.pos {
            return Err(BencodeError::UnexpectedEof);
        }

        let bytes = Bytes::copy_from_slice(&self.data[self.pos..self.pos + len]);
        self.pos += len;
        Ok(Value::Bytes(bytes))
    }

    fn list(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.pos += 1;
        let mut items = Vec::new();

        while self.peek().ok_or(BencodeError::UnexpectedEof)? != b'e' {
            items.push(self.value(depth + 1)?);
        }

        self.pos += 1;
        Ok(Value::List(items))
    }

    fn dict(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.pos += 1;
        let mut entries = BTreeMap::new();

        while self.peek().ok_or(BencodeError::UnexpectedEof)? != b'e' {
            let key = match self.value(depth + 1)? {
                Value::Bytes(key) => key,
                _ => return Err(BencodeError::InvalidDictKey),
            };
            let value = self.value(depth + 1)?;
            entries.insert(key, value);
        }

        self.pos += 1;
        Ok(Value::Dict(entries))
    }
}

fn parse_integer(digits: &[u8]) -> Result<i64, BencodeError> {
    let s = std::str::from_utf8(digits)
        .map_err(|_| BencodeError::InvalidInteger("non-ascii digits".into()))?;

    if s.is_empty() {
        return Err(BencodeError::InvalidInteger("empty".into()));
    }

    // No leading zeros: `0` is the only integer that may start with one,
    // and `-0` is not a thing.
    if s != "0" && (s.starts_with('0') || s.starts_with("-0")) {
        return Err(BencodeError::InvalidInteger(s.into()));
    }

    s.parse().map_err(|_| BencodeError::InvalidInteger(s.into()))
}

fn parse_length(digits: &[u8]) -> Result<usize, BencodeError> {
    let s = std::str::from_utf8(digits).map_err(|_| BencodeError::InvalidLength)?;

    if s.len() > 1 && s.starts_with('0') {
        return Err(BencodeError::InvalidLength);
    }

    s.parse().map_err(|_| BencodeError::InvalidLength)
}
