use std::sync::{Arc, OnceLock};

use nmeaprims_registry::{CodecEntry, CodecRegistry, Result};

use crate::packet::Packet;
use crate::{hdt, nix, vtg, xdr};

/// Every built-in sentence codec.
pub const ENTRIES: [CodecEntry<Packet>; 5] = [
    xdr::ENTRY,
    nix::REPLY_ENTRY,
    nix::RECEIVED_ENTRY,
    vtg::ENTRY,
    hdt::ENTRY,
];

static DEFAULT_REGISTRY: OnceLock<Arc<CodecRegistry<Packet>>> = OnceLock::new();

/// Build a fresh registry holding the built-in codecs.
pub fn builtin_registry() -> Result<CodecRegistry<Packet>> {
    CodecRegistry::from_entries(&ENTRIES)
}

/// Shared registry of the built-in codecs, built on first use.
pub fn default_registry() -> Arc<CodecRegistry<Packet>> {
    DEFAULT_REGISTRY
        .get_or_init(|| {
            // ENTRIES has distinct packet ids and two variants at most per sentence.
            Arc::new(builtin_registry().expect("built-in codec table should register"))
        })
        .clone()
}
