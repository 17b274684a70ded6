use thiserror::Error;

use sweep_clean::CleanError;
use sweep_codec::CodecError;
use sweep_model::UnsupportedFormat;

/// Failure while converting a single file.
///
/// All variants are deterministic: retrying without changing the input or
/// the request cannot succeed.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormat),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Clean(#[from] CleanError),
}
