//! Protocol error types.

use thiserror::Error;

/// Protocol-level errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The payload is not a valid message of the expected type.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<prost::DecodeError> for Error {
    fn from(err: prost::DecodeError) -> Self {
        Error::Decode(err.to_string())
    }
}
