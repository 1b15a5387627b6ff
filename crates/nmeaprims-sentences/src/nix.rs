//! PNIX: L3 GPM300 sonar modem messages.
//!
//! Two layouts share the `PNIX` sentence id and are told apart by the
//! first two data fields.
//!
//! Reply (remote acknowledge):
//!
//! ```text
//!       1  2  3        4                 5     6
//!       |  |  |        |                 |     |
//! $PNIX,US,TR,sequence,src>dst1..>dstN,slant,range*hh
//! ```
//!
//! Received message:
//!
//! ```text
//!       1  2  3     4        5   6   7   8        9      10     11   12   13       14             15    16
//!       |  |  |     |        |   |   |   |        |      |      |    |    |        |              |     |
//! $PNIX,US,RX,selrx,r.rrrrrr,dop,snr,err,d.dddddd,rx_pwr,rx_mgm,data,prot,acoustic,src>dst1..dstN,slant,range*hh
//! ```

use nmeaprims_frame::{
    format_address_chain, format_float, format_opt, parse_float_opt, parse_float_safe,
    parse_int_as, parse_src_destinations, CodecError, Frame,
};
use nmeaprims_registry::CodecEntry;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::packet::{mismatch, Packet, SentenceKind};

pub const SENTENCE_ID: &str = "PNIX";
pub const SENTENCE_NAME: &str = "L3 GPM300 Sonar Modem Message";

const MODEM: &str = "US";
const REPLY: &str = "TR";
const RECEIVED: &str = "RX";

/// Header through the address chain.
const REPLY_REQUIRED_FIELDS: usize = 5;
/// Header through the protocol number; baud rate onwards may be cut.
const RECEIVED_REQUIRED_FIELDS: usize = 13;

/// Reply from one or more modems.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NixReplyPacket {
    pub sequence: u32,
    pub src: u32,
    pub destinations: Vec<u32>,
    /// Transpond slant time in seconds, first to last destination.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub slant: Option<f64>,
    /// Transpond slant range in meters at the local sound speed.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub range: Option<f64>,
}

/// Message received by the modem with its link statistics.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NixReceivedPacket {
    /// Selected receiver number.
    pub selrx: u32,
    /// Receive time, microsecond resolution.
    pub receive_time: f64,
    /// Doppler in knots.
    pub dop: f64,
    /// SNR in dB.
    pub snr: f64,
    /// Corrected errors; -1 flags corruption.
    pub err: i32,
    pub transpond_delay: f64,
    pub rx_power: f64,
    pub rw_margin: f64,
    /// Base64 payload, passed through undecoded.
    pub data: String,
    pub protocol: u32,
    /// Modem rate label such as `MASQ20`; empty when not reported.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub acoustic_baud_rate: String,
    pub src: u32,
    pub destinations: Vec<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub slant: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub range: Option<f64>,
}

pub const REPLY_ENTRY: CodecEntry<Packet> = CodecEntry {
    sentence_id: SENTENCE_ID,
    packet_id: SentenceKind::NixReply.as_str(),
    matches: is_reply,
    decode: decode_reply,
    encode: encode_reply,
};

pub const RECEIVED_ENTRY: CodecEntry<Packet> = CodecEntry {
    sentence_id: SENTENCE_ID,
    packet_id: SentenceKind::NixReceived.as_str(),
    matches: is_received,
    decode: decode_received,
    encode: encode_received,
};

fn is_reply(frame: &Frame) -> bool {
    frame.has_discriminators(&[MODEM, REPLY])
}

fn is_received(frame: &Frame) -> bool {
    frame.has_discriminators(&[MODEM, RECEIVED])
}

pub fn decode_reply(frame: &Frame) -> Result<Packet, CodecError> {
    frame.require_fields(REPLY_REQUIRED_FIELDS)?;
    let chain = parse_src_destinations(frame.field(4));
    Ok(Packet::NixReply(NixReplyPacket {
        sequence: parse_int_as(frame.field(3)),
        src: chain.src,
        destinations: chain.destinations,
        slant: parse_float_opt(frame.field(5)),
        range: parse_float_opt(frame.field(6)),
    }))
}

pub fn decode_received(frame: &Frame) -> Result<Packet, CodecError> {
    frame.require_fields(RECEIVED_REQUIRED_FIELDS)?;
    let chain = parse_src_destinations(frame.field(14));
    Ok(Packet::NixReceived(NixReceivedPacket {
        selrx: parse_int_as(frame.field(3)),
        receive_time: parse_float_safe(frame.field(4)),
        dop: parse_float_safe(frame.field(5)),
        snr: parse_float_safe(frame.field(6)),
        err: parse_int_as(frame.field(7)),
        transpond_delay: parse_float_safe(frame.field(8)),
        rx_power: parse_float_safe(frame.field(9)),
        rw_margin: parse_float_safe(frame.field(10)),
        data: frame.field(11).unwrap_or_default().to_string(),
        protocol: parse_int_as(frame.field(12)),
        acoustic_baud_rate: frame.field(13).unwrap_or_default().to_string(),
        src: chain.src,
        destinations: chain.destinations,
        slant: parse_float_opt(frame.field(15)),
        range: parse_float_opt(frame.field(16)),
    }))
}

pub fn encode_reply(packet: &Packet) -> Result<Vec<String>, CodecError> {
    let Packet::NixReply(reply) = packet else {
        return Err(mismatch(SentenceKind::NixReply, packet));
    };

    Ok(vec![
        MODEM.to_string(),
        REPLY.to_string(),
        reply.sequence.to_string(),
        format_address_chain(reply.src, &reply.destinations),
        format_opt(reply.slant, format_float),
        format_opt(reply.range, format_float),
    ])
}

pub fn encode_received(packet: &Packet) -> Result<Vec<String>, CodecError> {
    let Packet::NixReceived(rx) = packet else {
        return Err(mismatch(SentenceKind::NixReceived, packet));
    };

    Ok(vec![
        MODEM.to_string(),
        RECEIVED.to_string(),
        rx.selrx.to_string(),
        format_float(rx.receive_time),
        format_float(rx.dop),
        format_float(rx.snr),
        rx.err.to_string(),
        format_float(rx.transpond_delay),
        format_float(rx.rx_power),
        format_float(rx.rw_margin),
        rx.data.clone(),
        rx.protocol.to_string(),
        rx.acoustic_baud_rate.clone(),
        format_address_chain(rx.src, &rx.destinations),
        format_opt(rx.slant, format_float),
        format_opt(rx.range, format_float),
    ])
}
