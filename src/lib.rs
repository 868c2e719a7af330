//! bitmeta - BitTorrent metadata parsing
//!
//! This library parses `.torrent` files into a structured, queryable
//! representation and derives the 20-byte info hash that identifies a
//! torrent to trackers and peers.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode encoding/decoding
//! - [`metainfo`] - BEP-3 torrent metadata and info hash

pub mod bencode;
pub mod metainfo;

pub use bencode::{decode, encode, BencodeError, Value};
pub use metainfo::{InfoHash, MetainfoError, Torrent, TorrentFile};
