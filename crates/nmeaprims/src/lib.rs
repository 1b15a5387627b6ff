//! Decode and encode NMEA-0183-style instrument sentences.
//!
//! nmeaprims turns lines such as `$HCXDR,...*1F` or `$PNIX,US,TR,...*0B`
//! into typed [`Packet`]s and back, verifying the XOR checksum on the way
//! in and regenerating it on the way out.
//!
//! # Crate Structure
//!
//! - [`frame`]: Framing, checksums, tolerant field primitives, line I/O
//! - [`registry`]: Sentence-id and sub-variant dispatch to codecs
//! - [`sentences`]: The packet union and built-in codecs (XDR, NIX, VTG, HDT)
//!
//! ```
//! use nmeaprims::{encode_packet, parse_sentence, Packet};
//!
//! let packet = parse_sentence("$PNIX,US,TR,7,0>31>0,7.196334,10794.502*0B").unwrap();
//! let Packet::NixReply(reply) = &packet else { unreachable!() };
//! assert_eq!(reply.destinations, vec![31, 0]);
//!
//! let line = encode_packet(None, &packet).unwrap();
//! assert_eq!(line, "$PNIX,US,TR,7,0>31>0,7.196334,10794.502*0B\r\n");
//! ```

pub mod error;
pub mod parser;

/// Re-export frame types.
pub mod frame {
    pub use nmeaprims_frame::*;
}

/// Re-export registry types.
pub mod registry {
    pub use nmeaprims_registry::*;
}

/// Re-export sentence codecs and packet types.
pub mod sentences {
    pub use nmeaprims_sentences::*;
}

pub use error::{NmeaError, Result};
pub use nmeaprims_sentences::{Packet, SentenceKind};
pub use parser::{encode_packet, parse_sentence, SentenceParser};
