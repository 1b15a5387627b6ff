//! Sentence codecs for nmeaprims.
//!
//! Each codec is a declarative field mapping from a [`Frame`](nmeaprims_frame::Frame)
//! to one [`Packet`] variant and back, registered as a
//! [`CodecEntry`](nmeaprims_registry::CodecEntry). Adding a sentence means
//! adding a module and an entry to [`ENTRIES`]; the frame and registry layers
//! stay untouched.
//!
//! | Wire id | Discriminators | Packet         |
//! |---------|----------------|----------------|
//! | `XDR`   | `A`, `D`       | `XDR`          |
//! | `PNIX`  | `US`, `TR`     | `NIX_REPLY`    |
//! | `PNIX`  | `US`, `RX`     | `NIX_RECEIVED` |
//! | `VTG`   |                | `VTG`          |
//! | `HDT`   |                | `HDT`          |

pub mod hdt;
pub mod nix;
pub mod packet;
pub mod registry;
pub mod vtg;
pub mod xdr;

pub use hdt::HdtPacket;
pub use nix::{NixReceivedPacket, NixReplyPacket};
pub use packet::{Packet, SentenceKind};
pub use registry::{builtin_registry, default_registry, ENTRIES};
pub use vtg::VtgPacket;
pub use xdr::XdrPacket;
