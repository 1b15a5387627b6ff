use std::fmt;

use nmeaprims_frame::CodecError;
use nmeaprims_registry::PacketKind;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hdt::{self, HdtPacket};
use crate::nix::{self, NixReceivedPacket, NixReplyPacket};
use crate::vtg::{self, VtgPacket};
use crate::xdr::{self, XdrPacket};

/// Stable packet discriminator.
///
/// Distinct from the wire sentence id: both NIX variants arrive as `PNIX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceKind {
    Xdr,
    NixReply,
    NixReceived,
    Vtg,
    Hdt,
}

impl SentenceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SentenceKind::Xdr => "XDR",
            SentenceKind::NixReply => "NIX_REPLY",
            SentenceKind::NixReceived => "NIX_RECEIVED",
            SentenceKind::Vtg => "VTG",
            SentenceKind::Hdt => "HDT",
        }
    }
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded sentence.
///
/// With the `serde` feature, packets serialize tagged by `sentenceId`:
/// `{"sentenceId":"NIX_REPLY","sequence":7,...}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "sentenceId")
)]
pub enum Packet {
    #[cfg_attr(feature = "serde", serde(rename = "XDR"))]
    Xdr(XdrPacket),
    #[cfg_attr(feature = "serde", serde(rename = "NIX_REPLY"))]
    NixReply(NixReplyPacket),
    #[cfg_attr(feature = "serde", serde(rename = "NIX_RECEIVED"))]
    NixReceived(NixReceivedPacket),
    #[cfg_attr(feature = "serde", serde(rename = "VTG"))]
    Vtg(VtgPacket),
    #[cfg_attr(feature = "serde", serde(rename = "HDT"))]
    Hdt(HdtPacket),
}

impl Packet {
    pub fn sentence_id(&self) -> SentenceKind {
        match self {
            Packet::Xdr(_) => SentenceKind::Xdr,
            Packet::NixReply(_) => SentenceKind::NixReply,
            Packet::NixReceived(_) => SentenceKind::NixReceived,
            Packet::Vtg(_) => SentenceKind::Vtg,
            Packet::Hdt(_) => SentenceKind::Hdt,
        }
    }

    /// Human-readable sentence name.
    pub fn sentence_name(&self) -> Option<&'static str> {
        let name = match self {
            Packet::Xdr(_) => xdr::SENTENCE_NAME,
            Packet::NixReply(_) | Packet::NixReceived(_) => nix::SENTENCE_NAME,
            Packet::Vtg(_) => vtg::SENTENCE_NAME,
            Packet::Hdt(_) => hdt::SENTENCE_NAME,
        };
        Some(name)
    }

    /// Talker id the packet was received from. Always `None` for
    /// proprietary sentences.
    pub fn talker_id(&self) -> Option<&str> {
        match self {
            Packet::Xdr(p) => p.talker_id.as_deref(),
            Packet::Vtg(p) => p.talker_id.as_deref(),
            Packet::Hdt(p) => p.talker_id.as_deref(),
            Packet::NixReply(_) | Packet::NixReceived(_) => None,
        }
    }
}

impl PacketKind for Packet {
    fn packet_id(&self) -> &'static str {
        self.sentence_id().as_str()
    }
}

/// Error for an encoder handed a packet of another kind.
pub(crate) fn mismatch(expected: SentenceKind, actual: &Packet) -> CodecError {
    CodecError::PacketMismatch {
        expected: expected.as_str(),
        actual: actual.packet_id(),
    }
}
