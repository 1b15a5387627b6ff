use std::fmt;
use std::sync::{Arc, OnceLock};

use nmeaprims_frame::{decode_frame, encode_frame, Frame, FrameConfig};
use nmeaprims_registry::CodecRegistry;
use nmeaprims_sentences::{default_registry, Packet};
use tracing::{debug, trace};

use crate::error::Result;

/// Composes tokenizer, checksum, dispatch and codec into one call.
///
/// Holds no mutable state; clones share the registry.
#[derive(Clone)]
pub struct SentenceParser {
    registry: Arc<CodecRegistry<Packet>>,
    frame_config: FrameConfig,
}

impl SentenceParser {
    /// Parser over the built-in codecs with default frame limits.
    pub fn new() -> Self {
        Self::with_registry(default_registry())
    }

    pub fn with_registry(registry: Arc<CodecRegistry<Packet>>) -> Self {
        Self::with_config(registry, FrameConfig::default())
    }

    pub fn with_config(registry: Arc<CodecRegistry<Packet>>, frame_config: FrameConfig) -> Self {
        Self {
            registry,
            frame_config,
        }
    }

    /// Decode one sentence line, with or without trailing CR/LF.
    pub fn parse(&self, line: &str) -> Result<Packet> {
        let frame = decode_frame(line, &self.frame_config)?;
        self.decode(&frame)
    }

    /// Dispatch an already tokenized frame to its codec.
    pub fn decode(&self, frame: &Frame) -> Result<Packet> {
        let entry = self.registry.lookup(frame)?;
        let packet = entry.decode(frame).inspect_err(|err| {
            debug!(sentence_id = %frame.sentence_id, error = %err, "codec rejected frame");
        })?;
        trace!(packet_id = entry.packet_id, "decoded packet");
        Ok(packet)
    }

    /// Build the frame for a packet without rendering it.
    ///
    /// An explicit `talker_id` wins over the one recorded on the packet.
    /// Proprietary sentences carry no talker either way.
    pub fn to_frame(&self, talker_id: Option<&str>, packet: &Packet) -> Result<Frame> {
        let entry = self.registry.lookup_packet(packet)?;
        let fields = entry.encode(packet)?;
        let talker_id = talker_id.or_else(|| packet.talker_id());
        Ok(Frame::new(talker_id, entry.sentence_id, fields)?)
    }

    /// Encode a packet as a wire line ending in `*hh\r\n`.
    pub fn encode(&self, talker_id: Option<&str>, packet: &Packet) -> Result<String> {
        let frame = self.to_frame(talker_id, packet)?;
        Ok(encode_frame(&frame, &self.frame_config)?)
    }

    pub fn registry(&self) -> &Arc<CodecRegistry<Packet>> {
        &self.registry
    }

    pub fn frame_config(&self) -> &FrameConfig {
        &self.frame_config
    }
}

impl Default for SentenceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SentenceParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceParser")
            .field("sentence_ids", &self.registry.sentence_ids())
            .field("frame_config", &self.frame_config)
            .finish()
    }
}

fn shared_parser() -> &'static SentenceParser {
    static PARSER: OnceLock<SentenceParser> = OnceLock::new();
    PARSER.get_or_init(SentenceParser::new)
}

/// Decode one sentence line with the built-in codecs.
pub fn parse_sentence(line: &str) -> Result<Packet> {
    shared_parser().parse(line)
}

/// Encode a packet with the built-in codecs.
pub fn encode_packet(talker_id: Option<&str>, packet: &Packet) -> Result<String> {
    shared_parser().encode(talker_id, packet)
}

#[cfg(test)]
mod tests {
    use nmeaprims_frame::{ChecksumPolicy, CodecError, FrameError};
    use nmeaprims_registry::{DispatchError, RegistryConfig};
    use nmeaprims_sentences::{nix, HdtPacket, ENTRIES};

    use super::*;
    use crate::error::NmeaError;

    #[test]
    fn explicit_talker_overrides_packet() {
        let packet = Packet::Hdt(HdtPacket {
            talker_id: Some("HE".to_string()),
            heading: 274.07,
        });
        let parser = SentenceParser::new();

        assert_eq!(parser.encode(None, &packet).unwrap(), "$HEHDT,274.07,T*19\r\n");
        assert_eq!(
            parser.encode(Some("GP"), &packet).unwrap(),
            "$GPHDT,274.07,T*03\r\n"
        );
    }

    #[test]
    fn standard_sentence_needs_a_talker() {
        let packet = Packet::Hdt(HdtPacket {
            talker_id: None,
            heading: 1.0,
        });
        let err = SentenceParser::new().encode(None, &packet).unwrap_err();
        assert!(matches!(err, NmeaError::Frame(FrameError::InvalidTalker(_))));
    }

    #[test]
    fn proprietary_sentence_drops_talker() {
        let parser = SentenceParser::new();
        let packet = parser
            .parse("$PNIX,US,TR,7,0>31>0,7.196334,10794.502*0B")
            .unwrap();
        let frame = parser.to_frame(Some("GP"), &packet).unwrap();
        assert_eq!(frame.talker_id, None);
        assert_eq!(frame.header(), "PNIX");
    }

    #[test]
    fn optional_checksum_policy() {
        let config = FrameConfig {
            checksum: ChecksumPolicy::Optional,
            ..FrameConfig::default()
        };
        let parser = SentenceParser::with_config(default_registry(), config);
        let packet = parser.parse("$HEHDT,274.07,T").unwrap();
        assert_eq!(packet.talker_id(), Some("HE"));

        let err = SentenceParser::new().parse("$HEHDT,274.07,T").unwrap_err();
        assert!(matches!(err, NmeaError::Frame(FrameError::MissingChecksum)));
    }

    #[test]
    fn restricted_registry_reports_unknown_sentence() {
        let registry = CodecRegistry::from_entries_with_config(
            &[nix::REPLY_ENTRY],
            RegistryConfig::default(),
        )
        .unwrap();
        let parser = SentenceParser::with_registry(Arc::new(registry));

        let err = parser.parse("$HEHDT,274.07,T*19").unwrap_err();
        assert!(err.is_unknown_sentence());

        let err = parser
            .encode(Some("HE"), &Packet::Hdt(HdtPacket::default()))
            .unwrap_err();
        assert!(matches!(
            err,
            NmeaError::Dispatch(DispatchError::UnregisteredPacket("HDT"))
        ));
    }

    #[test]
    fn codec_errors_propagate() {
        let err = SentenceParser::new().parse("$HEHDT*55").unwrap_err();
        assert!(matches!(
            err,
            NmeaError::Codec(CodecError::TruncatedSentence { .. })
        ));
    }

    #[test]
    fn shared_parser_covers_every_codec() {
        assert_eq!(shared_parser().registry().len(), ENTRIES.len());
    }
}
