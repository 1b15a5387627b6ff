//! HDT: true heading from a gyro or integrated system.
//!
//! ```text
//!        1   2
//!        |   |
//! $--HDT,x.x,T*hh
//! ```

use nmeaprims_frame::{format_float, parse_float_safe, CodecError, Frame};
use nmeaprims_registry::{match_any, CodecEntry};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::packet::{mismatch, Packet, SentenceKind};

pub const SENTENCE_ID: &str = "HDT";
pub const SENTENCE_NAME: &str = "Heading - true";

const REQUIRED_FIELDS: usize = 2;
const TRUE: &str = "T";

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct HdtPacket {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub talker_id: Option<String>,
    /// Degrees true.
    pub heading: f64,
}

pub const ENTRY: CodecEntry<Packet> = CodecEntry {
    sentence_id: SENTENCE_ID,
    packet_id: SentenceKind::Hdt.as_str(),
    matches: match_any,
    decode,
    encode,
};

pub fn decode(frame: &Frame) -> Result<Packet, CodecError> {
    frame.require_fields(REQUIRED_FIELDS)?;
    Ok(Packet::Hdt(HdtPacket {
        talker_id: frame.talker_id.clone(),
        heading: parse_float_safe(frame.field(1)),
    }))
}

pub fn encode(packet: &Packet) -> Result<Vec<String>, CodecError> {
    let Packet::Hdt(hdt) = packet else {
        return Err(mismatch(SentenceKind::Hdt, packet));
    };
    Ok(vec![format_float(hdt.heading), TRUE.to_string()])
}
