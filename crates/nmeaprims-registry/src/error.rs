/// Errors that can occur while registering or dispatching codecs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No codec is registered for the sentence id.
    #[error("unknown sentence {0:?}")]
    UnknownSentence(String),

    /// Codecs exist for the sentence id but none accepts the frame.
    #[error("no {sentence_id} variant for {discriminator:?}")]
    UnknownVariant {
        sentence_id: String,
        discriminator: String,
    },

    /// No codec is registered for the packet kind being encoded.
    #[error("no codec registered for packet {0}")]
    UnregisteredPacket(&'static str),

    /// A codec for the packet id is already registered.
    #[error("packet {0} is already registered")]
    DuplicatePacket(&'static str),

    /// The sentence id already has the configured maximum of variants.
    #[error("sentence {sentence_id} exceeds {max} variants")]
    TooManyVariants {
        sentence_id: &'static str,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, DispatchError>;
