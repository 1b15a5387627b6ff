/// Controls registration behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, registering a second entry for the same packet id fails
    /// with `DispatchError::DuplicatePacket`. When false, the later entry
    /// becomes the encoder for that packet id.
    pub reject_duplicate_packets: bool,
    /// Maximum number of variants registered under one sentence id.
    pub max_variants_per_sentence: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            reject_duplicate_packets: true,
            max_variants_per_sentence: 32,
        }
    }
}
