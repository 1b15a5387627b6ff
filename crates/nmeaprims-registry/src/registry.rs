use std::collections::HashMap;

use nmeaprims_frame::Frame;
use tracing::debug;

use crate::config::RegistryConfig;
use crate::entry::{CodecEntry, PacketKind};
use crate::error::{DispatchError, Result};

/// Number of leading data fields quoted when no variant matches.
const DISCRIMINATOR_FIELDS: usize = 2;

/// Sentence-id keyed table of codec entries.
///
/// Variants sharing a sentence id are tried in registration order; the first
/// whose match predicate accepts the frame wins. Lookups take `&self` only,
/// so a built registry is safe to share across threads.
pub struct CodecRegistry<P> {
    variants: HashMap<&'static str, Vec<CodecEntry<P>>>,
    packets: HashMap<&'static str, CodecEntry<P>>,
    config: RegistryConfig,
}

impl<P> CodecRegistry<P> {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            variants: HashMap::new(),
            packets: HashMap::new(),
            config,
        }
    }

    /// Build a registry from a static entry table.
    pub fn from_entries(entries: &[CodecEntry<P>]) -> Result<Self> {
        Self::from_entries_with_config(entries, RegistryConfig::default())
    }

    /// Build a registry from a static entry table with explicit config.
    pub fn from_entries_with_config(
        entries: &[CodecEntry<P>],
        config: RegistryConfig,
    ) -> Result<Self> {
        let mut registry = Self::with_config(config);
        for entry in entries {
            registry.register(*entry)?;
        }
        Ok(registry)
    }

    /// Register a codec entry.
    pub fn register(&mut self, entry: CodecEntry<P>) -> Result<()> {
        if self.config.reject_duplicate_packets && self.packets.contains_key(entry.packet_id) {
            return Err(DispatchError::DuplicatePacket(entry.packet_id));
        }

        let registered = self.variants.get(entry.sentence_id).map_or(0, Vec::len);
        if registered >= self.config.max_variants_per_sentence {
            return Err(DispatchError::TooManyVariants {
                sentence_id: entry.sentence_id,
                max: self.config.max_variants_per_sentence,
            });
        }

        self.variants.entry(entry.sentence_id).or_default().push(entry);
        self.packets.insert(entry.packet_id, entry);
        Ok(())
    }

    /// Find the codec for a tokenized frame.
    pub fn lookup(&self, frame: &Frame) -> Result<&CodecEntry<P>> {
        let Some(variants) = self.variants.get(frame.sentence_id.as_str()) else {
            debug!(sentence_id = %frame.sentence_id, "no codec for sentence");
            return Err(DispatchError::UnknownSentence(frame.sentence_id.clone()));
        };

        match variants.iter().find(|entry| entry.matches(frame)) {
            Some(entry) => Ok(entry),
            None => {
                let discriminator = frame
                    .data_fields()
                    .iter()
                    .take(DISCRIMINATOR_FIELDS)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(",");
                debug!(
                    sentence_id = %frame.sentence_id,
                    discriminator = %discriminator,
                    "no codec variant for sentence"
                );
                Err(DispatchError::UnknownVariant {
                    sentence_id: frame.sentence_id.clone(),
                    discriminator,
                })
            }
        }
    }

    /// Find the codec registered for a packet id.
    pub fn lookup_packet_id(&self, packet_id: &'static str) -> Result<&CodecEntry<P>> {
        self.packets
            .get(packet_id)
            .ok_or(DispatchError::UnregisteredPacket(packet_id))
    }

    /// Find the codec that encodes `packet`.
    pub fn lookup_packet(&self, packet: &P) -> Result<&CodecEntry<P>>
    where
        P: PacketKind,
    {
        self.lookup_packet_id(packet.packet_id())
    }

    /// Check if any codec handles the sentence id.
    pub fn has_sentence(&self, sentence_id: &str) -> bool {
        self.variants.contains_key(sentence_id)
    }

    /// Entries registered for a sentence id, in match order.
    pub fn variants(&self, sentence_id: &str) -> &[CodecEntry<P>] {
        self.variants
            .get(sentence_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Get sentence ids that have registered codecs.
    pub fn sentence_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.variants.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.variants.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl<P> Default for CodecRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
