//! Codec error types.

use std::fmt::Display;

use thiserror::Error;

use sweep_model::Format;

/// A byte buffer could not be decoded into a table, or a table could not be
/// serialized back out.
///
/// Messages carry the underlying codec failure verbatim; these are
/// deterministic failures, so no retry will succeed without user correction.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to decode {format} input: {message}")]
    Decode { format: Format, message: String },

    #[error("failed to encode {format} output: {message}")]
    Encode { format: Format, message: String },
}

impl CodecError {
    pub fn decode(format: Format, source: impl Display) -> Self {
        Self::Decode {
            format,
            message: source.to_string(),
        }
    }

    pub fn encode(format: Format, source: impl Display) -> Self {
        Self::Encode {
            format,
            message: source.to_string(),
        }
    }
}
