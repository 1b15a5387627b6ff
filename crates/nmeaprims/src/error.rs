use nmeaprims_frame::{CodecError, FrameError};
use nmeaprims_registry::DispatchError;

/// Errors from parsing or encoding a sentence, classified by stage.
#[derive(Debug, thiserror::Error)]
pub enum NmeaError {
    /// Malformed envelope or checksum mismatch.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// No codec for the sentence id or sub-variant.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Known sentence with an unexpected shape.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

impl NmeaError {
    /// True for sentences outside every registered codec, which callers
    /// usually log and skip.
    pub fn is_unknown_sentence(&self) -> bool {
        matches!(
            self,
            NmeaError::Dispatch(
                DispatchError::UnknownSentence(_) | DispatchError::UnknownVariant { .. }
            )
        )
    }

    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, NmeaError::Frame(FrameError::ChecksumMismatch { .. }))
    }
}

pub type Result<T> = std::result::Result<T, NmeaError>;
