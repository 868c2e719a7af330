use thiserror::Error;

#[derive(Debug, Error)]
pub enum BencodeError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    #[error("invalid byte string length prefix")]
    InvalidLength,

    #[error("dictionary key is not a byte string")]
    InvalidDictKey,

    #[error("unexpected character: {0}")]
    UnexpectedChar(char),

    #[error("trailing data after value")]
    TrailingData,

    #[error("nesting too deep")]
    NestingTooDeep,
}
