/// Errors that can occur while tokenizing or building a sentence frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The line does not begin with `$`.
    #[error("missing start delimiter '$'")]
    MissingStartDelimiter,

    /// The line has no `*hh` footer and checksum-less frames are not accepted.
    #[error("missing checksum footer")]
    MissingChecksum,

    /// The text after `*` is not exactly two hex digits.
    #[error("invalid checksum field {0:?}")]
    InvalidChecksumField(String),

    /// The declared checksum does not match the one computed from the body.
    #[error("checksum mismatch (declared {declared:02X}, computed {computed:02X})")]
    ChecksumMismatch { declared: u8, computed: u8 },

    /// The header token cannot be split into talker id and sentence id.
    #[error("invalid sentence header {0:?}")]
    InvalidHeader(String),

    /// The talker id is missing or is not two ASCII alphanumerics.
    #[error("invalid talker id {0:?}")]
    InvalidTalker(String),

    /// A field holds a character that would break the wire envelope.
    #[error("reserved character {ch:?} in field {index}")]
    ReservedCharacter { index: usize, ch: char },

    /// The line contains non-ASCII bytes.
    #[error("sentence contains non-ASCII data")]
    NonAscii,

    /// The line exceeds the configured maximum length.
    #[error("line too long ({len} bytes, max {max})")]
    LineTooLong { len: usize, max: usize },

    /// An I/O error occurred while reading or writing lines.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before another line was available.
    #[error("stream closed")]
    ConnectionClosed,
}

/// Errors raised by a sentence codec once a frame has been dispatched to it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The frame is too short to contain a mandatory field.
    #[error("truncated {sentence_id} sentence ({actual} fields, need {required})")]
    TruncatedSentence {
        sentence_id: String,
        required: usize,
        actual: usize,
    },

    /// An encoder was handed a packet of another kind.
    #[error("encoder for {expected} received a {actual} packet")]
    PacketMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, FrameError>;
