//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for
//! structured data, most importantly `.torrent` files. It has four data
//! types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Byte strings are raw bytes, not text; they are only interpreted as UTF-8
//! where a field is documented to be text. Dictionary keys are byte strings
//! and the canonical encoding orders them by ascending raw byte value, which
//! is what makes the info hash of a torrent reproducible: [`encode`] always
//! emits canonical bytes, no matter what order the source had.
//!
//! # Examples
//!
//! ```
//! use bitmeta::bencode::{decode, encode, Value};
//!
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list[0].as_str(), Some("spam"));
//! assert_eq!(list[1].as_integer(), Some(42));
//!
//! // Round-trip of canonical input reproduces the input bytes.
//! assert_eq!(encode(&value), b"l4:spami42ee");
//! ```
//!
//! # Error Handling
//!
//! [`decode`] is fail-fast: the first malformed token aborts the whole
//! decode and no partial tree is returned.
//!
//! - [`BencodeError::UnexpectedEof`] - input ended inside a value
//! - [`BencodeError::InvalidInteger`] - malformed integer (leading zeros, `-0`, empty)
//! - [`BencodeError::InvalidLength`] - malformed byte string length prefix
//! - [`BencodeError::InvalidDictKey`] - dictionary key is not a byte string
//! - [`BencodeError::UnexpectedChar`] - unrecognized leading type byte
//! - [`BencodeError::TrailingData`] - extra bytes after the top-level value
//! - [`BencodeError::NestingTooDeep`] - recursion limit exceeded (max 64 levels)
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::decode;
pub use encode::encode;
pub use error::BencodeError;
pub use value::Value;

#[cfg(test)]
mod tests;
