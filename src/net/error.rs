//! Errors of the wire layer.

use thiserror::Error;

/// A value or message that could not be decoded. Any of these on a live
/// connection is fatal: the peers are out of sync, and the connection is
/// dropped rather than resynchronized.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("not a valid integer: {0:?}")]
    InvalidInt(String),

    #[error("index {index} is out of range for {what}")]
    IndexOutOfRange { what: &'static str, index: usize },

    #[error("invalid base64 payload")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("text payload is not valid utf-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("unknown message kind: {0:?}")]
    UnknownMessageKind(String),

    #[error("malformed message: {0}")]
    Malformed(String),
}

/// A failure of the network layer as a whole.
#[derive(Debug, Error)]
pub enum NetError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("the peer closed the connection")]
    ConnectionClosed,

    #[error("the local player failed: {0}")]
    Player(String),
}
