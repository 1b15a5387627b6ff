use std::fmt;

use nmeaprims_frame::{CodecError, Frame};

/// Predicate selecting a sub-variant from the frame's leading fields.
pub type MatchFn = fn(&Frame) -> bool;

/// Field list to packet.
pub type DecodeFn<P> = fn(&Frame) -> Result<P, CodecError>;

/// Packet to data fields (header token excluded).
pub type EncodeFn<P> = fn(&P) -> Result<Vec<String>, CodecError>;

/// Stable discriminator of a decoded packet, distinct from the wire sentence id.
pub trait PacketKind {
    fn packet_id(&self) -> &'static str;
}

/// One registered codec: how to recognize, decode and encode one packet kind.
///
/// Entries are plain function tables, immutable once registered.
pub struct CodecEntry<P> {
    /// Wire sentence id (`XDR`, `PNIX`).
    pub sentence_id: &'static str,
    /// Packet discriminator produced by `decode` (`XDR`, `NIX_REPLY`).
    pub packet_id: &'static str,
    /// Accepts frames belonging to this variant.
    pub matches: MatchFn,
    pub decode: DecodeFn<P>,
    pub encode: EncodeFn<P>,
}

impl<P> Clone for CodecEntry<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for CodecEntry<P> {}

impl<P> fmt::Debug for CodecEntry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecEntry")
            .field("sentence_id", &self.sentence_id)
            .field("packet_id", &self.packet_id)
            .finish_non_exhaustive()
    }
}

impl<P> PartialEq for CodecEntry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.sentence_id == other.sentence_id && self.packet_id == other.packet_id
    }
}

impl<P> CodecEntry<P> {
    /// Decode a frame already dispatched to this entry.
    pub fn decode(&self, frame: &Frame) -> Result<P, CodecError> {
        (self.decode)(frame)
    }

    /// Encode a packet into data fields.
    pub fn encode(&self, packet: &P) -> Result<Vec<String>, CodecError> {
        (self.encode)(packet)
    }

    /// True if this entry accepts the frame.
    pub fn matches(&self, frame: &Frame) -> bool {
        (self.matches)(frame)
    }
}

/// Match predicate for sentence ids with a single layout.
pub fn match_any(_frame: &Frame) -> bool {
    true
}
