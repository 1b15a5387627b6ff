//! Sentence framing for NMEA-0183-style protocols.
//!
//! This is the lowest layer of nmeaprims. Every sentence is framed as:
//! - A `$` start delimiter
//! - A header token (talker id + sentence id, or a `P`-prefixed proprietary id)
//! - Comma-separated fields, empty fields preserved
//! - A `*hh` XOR checksum footer and CR/LF
//!
//! The crate also owns the tolerant field primitives every sentence codec
//! builds on, so codecs never repeat "is this field present" logic.

pub mod checksum;
pub mod codec;
pub mod error;
pub mod fields;
pub mod reader;
pub mod talker;
pub mod writer;

#[cfg(feature = "async")]
pub mod async_codec;

pub use checksum::{append_checksum_footer, compute_checksum, verify_checksum};
pub use codec::{
    decode_frame, encode_frame, split_header, ChecksumPolicy, Frame, FrameConfig,
    DEFAULT_MAX_LINE_LENGTH,
};
pub use error::{CodecError, FrameError, Result};
pub use fields::{
    format_address_chain, format_float, format_min_decimals, format_opt, format_signed_padded,
    parse_float_opt, parse_float_safe, parse_int_as, parse_int_opt, parse_int_safe,
    parse_src_destinations, AddressChain,
};
pub use reader::SentenceReader;
pub use writer::SentenceWriter;

#[cfg(feature = "async")]
pub use async_codec::SentenceCodec;
