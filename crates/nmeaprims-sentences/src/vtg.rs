//! VTG: track made good and ground speed.
//!
//! ```text
//!        1      2 3      4 5    6 7    8 9
//!        |      | |      | |    | |    | |
//! $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,a*hh
//! ```

use nmeaprims_frame::{
    format_float, format_opt, parse_float_opt, parse_float_safe, CodecError, Frame,
};
use nmeaprims_registry::{match_any, CodecEntry};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::packet::{mismatch, Packet, SentenceKind};

pub const SENTENCE_ID: &str = "VTG";
pub const SENTENCE_NAME: &str = "Track made good and ground speed";

/// Header through the knots unit.
const REQUIRED_FIELDS: usize = 7;

const TRUE: &str = "T";
const MAGNETIC: &str = "M";
const KNOTS: &str = "N";
const KMPH: &str = "K";

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct VtgPacket {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub talker_id: Option<String>,
    pub track_true: f64,
    pub track_magnetic: f64,
    pub speed_knots: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub speed_kmph: Option<f64>,
    /// FAA mode indicator (`A`utonomous, `D`ifferential, ...).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub mode: Option<char>,
}

pub const ENTRY: CodecEntry<Packet> = CodecEntry {
    sentence_id: SENTENCE_ID,
    packet_id: SentenceKind::Vtg.as_str(),
    matches: match_any,
    decode,
    encode,
};

pub fn decode(frame: &Frame) -> Result<Packet, CodecError> {
    frame.require_fields(REQUIRED_FIELDS)?;
    Ok(Packet::Vtg(VtgPacket {
        talker_id: frame.talker_id.clone(),
        track_true: parse_float_safe(frame.field(1)),
        track_magnetic: parse_float_safe(frame.field(3)),
        speed_knots: parse_float_safe(frame.field(5)),
        speed_kmph: parse_float_opt(frame.field(7)),
        mode: frame.field(9).and_then(|mode| mode.chars().next()),
    }))
}

pub fn encode(packet: &Packet) -> Result<Vec<String>, CodecError> {
    let Packet::Vtg(vtg) = packet else {
        return Err(mismatch(SentenceKind::Vtg, packet));
    };

    let (speed_kmph, kmph_unit) = match vtg.speed_kmph {
        Some(speed) => (format_float(speed), KMPH.to_string()),
        None => (String::new(), String::new()),
    };
    Ok(vec![
        format_float(vtg.track_true),
        TRUE.to_string(),
        format_float(vtg.track_magnetic),
        MAGNETIC.to_string(),
        format_float(vtg.speed_knots),
        KNOTS.to_string(),
        speed_kmph,
        kmph_unit,
        format_opt(vtg.mode, String::from),
    ])
}
