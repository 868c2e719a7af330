use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use bytes::Bytes;
use sha1::{Digest, Sha1};
use tracing::debug;

use super::error::MetainfoError;
use super::info_hash::InfoHash;
use crate::bencode::{decode, encode, Value};

/// A file the torrent resolves to on disk.
///
/// Single-file torrents have exactly one of these, named after `info.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentFile {
    name: String,
    length: u64,
}

impl TorrentFile {
    /// File name, relative to wherever the client writes output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the file in bytes.
    pub fn length(&self) -> u64 {
        self.length
    }
}

/// Parsed metadata of a single-file torrent.
///
/// Built in one pass from the file's bytes: decode, re-encode the `info`
/// subtree, hash it, extract the typed fields. Every field is fixed at
/// construction; nothing here mutates afterwards.
///
/// # Examples
///
/// ```no_run
/// use bitmeta::metainfo::Torrent;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let torrent = Torrent::load("example.torrent")?;
/// println!("{}", torrent);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Torrent {
    meta_info: Value,
    raw_info: Bytes,
    info_hash: InfoHash,
    announce: String,
    piece_length: u64,
    pieces: Vec<[u8; 20]>,
    files: Vec<TorrentFile>,
}

impl Torrent {
    /// Reads a `.torrent` file from disk and parses it.
    ///
    /// # Errors
    ///
    /// [`MetainfoError::Io`] if the file cannot be read; otherwise anything
    /// [`Torrent::from_bytes`] can return.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MetainfoError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        debug!("read {} bytes from {}", data.len(), path.display());
        Self::from_bytes(&data)
    }

    /// Parses a torrent from raw bytes.
    ///
    /// The info hash is computed over the *re-encoded* `info` dictionary,
    /// so a source file with non-canonical key order still yields the
    /// canonical hash.
    ///
    /// # Errors
    ///
    /// - [`MetainfoError::Bencode`] if the data is not valid bencode
    /// - [`MetainfoError::Unsupported`] if `info.files` is present
    ///   (multi-file torrents)
    /// - [`MetainfoError::MissingField`] / [`MetainfoError::TypeMismatch`] /
    ///   [`MetainfoError::CorruptField`] / [`MetainfoError::Encoding`] if a
    ///   torrent field is absent or invalid
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let meta_info = decode(data)?;
        let root = meta_info
            .as_dict()
            .ok_or(MetainfoError::TypeMismatch("root"))?;

        let info_value = root
            .get(b"info".as_slice())
            .ok_or(MetainfoError::MissingField("info"))?;
        let info = info_value
            .as_dict()
            .ok_or(MetainfoError::TypeMismatch("info"))?;

        if info.contains_key(b"files".as_slice()) {
            return Err(MetainfoError::Unsupported("multi-file torrents"));
        }

        let raw_info = Bytes::from(encode(info_value));
        let mut hasher = Sha1::new();
        hasher.update(&raw_info);
        let info_hash = InfoHash::new(hasher.finalize().into());

        let announce = text_field(root, "announce")?;
        let piece_length = int_field(info, "piece length")?;
        let pieces = piece_hashes(info)?;

        let name = text_field(info, "name")?;
        let length = int_field(info, "length")?;

        debug!(
            "parsed torrent {} ({} bytes, {} pieces, info hash {})",
            name,
            length,
            pieces.len(),
            info_hash
        );

        Ok(Self {
            meta_info,
            raw_info,
            info_hash,
            announce,
            piece_length,
            pieces,
            files: vec![TorrentFile { name, length }],
        })
    }

    /// The announce URL of the tracker.
    pub fn announce_url(&self) -> &str {
        &self.announce
    }

    /// The torrent's 20-byte identifier.
    pub fn info_hash(&self) -> &InfoHash {
        &self.info_hash
    }

    /// Number of bytes per piece.
    pub fn piece_length(&self) -> u64 {
        self.piece_length
    }

    /// SHA-1 hash of each piece, in piece order.
    pub fn pieces(&self) -> &[[u8; 20]] {
        &self.pieces
    }

    /// Number of pieces in the torrent.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Suggested name for the downloaded file.
    pub fn output_file_name(&self) -> &str {
        &self.files[0].name
    }

    /// Total number of bytes the torrent resolves to.
    ///
    /// Cannot fail: the single-file invariant is enforced at construction,
    /// so this is the sole file's length.
    pub fn total_size(&self) -> u64 {
        self.files[0].length
    }

    /// The files this torrent writes; always exactly one entry.
    pub fn files(&self) -> &[TorrentFile] {
        &self.files
    }

    /// The canonically re-encoded `info` dictionary.
    ///
    /// These are the exact bytes the info hash is a digest of.
    pub fn raw_info(&self) -> &Bytes {
        &self.raw_info
    }

    /// The full decoded metainfo dictionary.
    pub fn meta_info(&self) -> &Value {
        &self.meta_info
    }
}

impl fmt::Display for Torrent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} bytes, {} pieces of {} bytes) via {}, info hash {}",
            self.output_file_name(),
            self.total_size(),
            self.piece_count(),
            self.piece_length,
            self.announce,
            self.info_hash
        )
    }
}

fn text_field(
    dict: &BTreeMap<Bytes, Value>,
    key: &'static str,
) -> Result<String, MetainfoError> {
    let bytes = dict
        .get(key.as_bytes())
        .ok_or(MetainfoError::MissingField(key))?
        .as_bytes()
        .ok_or(MetainfoError::TypeMismatch(key))?;

    let text = std::str::from_utf8(bytes).map_err(|_| MetainfoError::Encoding(key))?;
    Ok(text.to_string())
}

fn int_field(dict: &BTreeMap<Bytes, Value>, key: &'static str) -> Result<u64, MetainfoError> {
    let value = dict
        .get(key.as_bytes())
        .ok_or(MetainfoError::MissingField(key))?
        .as_integer()
        .ok_or(MetainfoError::TypeMismatch(key))?;

    // Bencode integers are signed; a negative length is nonsense, not a
    // huge unsigned value.
    u64::try_from(value).map_err(|_| MetainfoError::CorruptField(key))
}

fn piece_hashes(info: &BTreeMap<Bytes, Value>) -> Result<Vec<[u8; 20]>, MetainfoError> {
    let data = info
        .get(b"pieces".as_slice())
        .ok_or(MetainfoError::MissingField("pieces"))?
        .as_bytes()
        .ok_or(MetainfoError::TypeMismatch("pieces"))?;

    if data.len() % 20 != 0 {
        return Err(MetainfoError::CorruptField("pieces"));
    }

    Ok(data
        .chunks_exact(20)
        .map(|chunk| {
            let mut hash = [0u8; 20];
            hash.copy_from_slice(chunk);
            hash
        })
        .collect())
}
