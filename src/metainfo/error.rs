use thiserror::Error;

use crate::bencode::BencodeError;

/// Errors that can occur when parsing a torrent file.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// The torrent file is not valid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// Reading the torrent file from disk failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A required field is absent.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field holds the wrong bencode type.
    #[error("type mismatch in field: {0}")]
    TypeMismatch(&'static str),

    /// A field is present and well-typed but its value is invalid.
    #[error("corrupt field: {0}")]
    CorruptField(&'static str),

    /// A text field is not valid UTF-8.
    #[error("invalid utf-8 in field: {0}")]
    Encoding(&'static str),

    /// The torrent is structurally valid but uses a feature this crate
    /// does not implement.
    #[error("unsupported feature: {0}")]
    Unsupported(&'static str),

    /// An info hash must be exactly 20 bytes.
    #[error("invalid info hash length")]
    InvalidHashLength,
}
