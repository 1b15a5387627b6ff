//! Sentence codec dispatch.
//!
//! Maps a tokenized frame to the codec that decodes it, keyed by sentence id
//! and refined by per-entry match predicates for sentence families whose
//! sub-variants share one id (NIX `US,TR` vs `US,RX`).
//!
//! The registry is generic over the packet type so codecs live in their own
//! crate. Build it once, then share it read-only (`Arc`, `&'static`).

pub mod config;
pub mod entry;
pub mod error;
pub mod registry;

pub use config::RegistryConfig;
pub use entry::{match_any, CodecEntry, DecodeFn, EncodeFn, MatchFn, PacketKind};
pub use error::{DispatchError, Result};
pub use registry::CodecRegistry;
