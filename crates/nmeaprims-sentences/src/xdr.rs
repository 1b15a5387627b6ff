//! XDR: heading, pitch and roll from a magnetic compass.
//!
//! ```text
//!         1 2     3 4 5     6 7 8     9 10 11     12 13 14    15 16 17
//!         | |     | | |     | | |     | |  |      |  |  |     |  |  |
//! $HCXDR,A,272.8,D,A,272.8,D,A,+03.1,D,A,-000.4,D,C,+30.6,C,G,002*hh
//! ```
//!
//! | Field | Meaning                    |
//! |-------|----------------------------|
//! | 2     | Heading (degrees)          |
//! | 5     | Heading repeated (ignored) |
//! | 8     | Pitch (degrees)            |
//! | 11    | Roll (degrees)             |
//! | 14    | Sensor temperature (°C)    |
//! | 15+   | Further groups, kept as-is |

use nmeaprims_frame::{
    format_min_decimals, format_signed_padded, parse_float_safe, CodecError, Frame,
};
use nmeaprims_registry::CodecEntry;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::packet::{mismatch, Packet, SentenceKind};

pub const SENTENCE_ID: &str = "XDR";
pub const SENTENCE_NAME: &str = "Orientation - heading pitch and roll";

/// Header plus fields 1..=14.
const REQUIRED_FIELDS: usize = 15;

/// Header through the temperature unit; anything later is an extra group.
const GROUP_FIELDS: usize = 16;

const ANGULAR: &str = "A";
const DEGREES: &str = "D";
const TEMPERATURE: &str = "C";
const CELSIUS: &str = "C";

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct XdrPacket {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub talker_id: Option<String>,
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
    pub altimeter_temp: f64,
    /// Raw fields after the temperature group (`G,002` on the compass).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub extra_groups: Vec<String>,
}

pub const ENTRY: CodecEntry<Packet> = CodecEntry {
    sentence_id: SENTENCE_ID,
    packet_id: SentenceKind::Xdr.as_str(),
    matches: is_orientation,
    decode,
    encode,
};

/// Only the angular-displacement layout is decoded; other XDR transducer
/// sets fall through as an unknown variant.
fn is_orientation(frame: &Frame) -> bool {
    frame.has_discriminators(&[ANGULAR])
        && frame.field(3).map_or(true, |unit| unit == DEGREES)
}

pub fn decode(frame: &Frame) -> Result<Packet, CodecError> {
    frame.require_fields(REQUIRED_FIELDS)?;
    Ok(Packet::Xdr(XdrPacket {
        talker_id: frame.talker_id.clone(),
        heading: parse_float_safe(frame.field(2)),
        pitch: parse_float_safe(frame.field(8)),
        roll: parse_float_safe(frame.field(11)),
        altimeter_temp: parse_float_safe(frame.field(14)),
        extra_groups: frame
            .fields
            .get(GROUP_FIELDS..)
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
    }))
}

pub fn encode(packet: &Packet) -> Result<Vec<String>, CodecError> {
    let Packet::Xdr(xdr) = packet else {
        return Err(mismatch(SentenceKind::Xdr, packet));
    };

    let heading = format_min_decimals(xdr.heading, 1);
    let mut fields = vec![
        ANGULAR.to_string(),
        heading.clone(),
        DEGREES.to_string(),
        ANGULAR.to_string(),
        heading,
        DEGREES.to_string(),
        ANGULAR.to_string(),
        format_signed_padded(xdr.pitch, 5, 1),
        DEGREES.to_string(),
        ANGULAR.to_string(),
        format_signed_padded(xdr.roll, 6, 1),
        DEGREES.to_string(),
        TEMPERATURE.to_string(),
        format_signed_padded(xdr.altimeter_temp, 5, 1),
        CELSIUS.to_string(),
    ];
    fields.extend(xdr.extra_groups.iter().cloned());
    Ok(fields)
}
