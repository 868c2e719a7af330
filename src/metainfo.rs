//! Torrent metainfo handling ([BEP-3]).
//!
//! A `.torrent` file is a single bencoded dictionary with at least an
//! `announce` URL and an `info` dictionary holding `name`, `length`,
//! `piece length` and `pieces`. [`Torrent`] parses that structure in one
//! pass and computes the torrent's [`InfoHash`]: the SHA-1 digest of the
//! *canonically re-encoded* `info` dictionary, not of the source bytes.
//! Construction is all-or-nothing; a [`Torrent`] that exists is fully valid
//! and immutable.
//!
//! Multi-file torrents are detected and rejected with
//! [`MetainfoError::Unsupported`], which callers can tell apart from a
//! malformed file.
//!
//! # Examples
//!
//! ```no_run
//! use bitmeta::metainfo::Torrent;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let torrent = Torrent::load("example.torrent")?;
//!
//! println!("Name: {}", torrent.output_file_name());
//! println!("Size: {} bytes", torrent.total_size());
//! println!("Info hash: {}", torrent.info_hash());
//! println!("Tracker: {}", torrent.announce_url());
//! println!("Pieces: {} x {} bytes", torrent.piece_count(), torrent.piece_length());
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod info_hash;
mod torrent;

pub use error::MetainfoError;
pub use info_hash::InfoHash;
pub use torrent::{Torrent, TorrentFile};
