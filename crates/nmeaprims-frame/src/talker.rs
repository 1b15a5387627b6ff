//! Well-known talker ids.
//!
//! A header token starting with `P` is proprietary and carries no talker id.
//! Every other header is a two-character talker id followed by the sentence id.

/// Global Positioning System receiver.
pub const GPS: &str = "GP";

/// Mixed GNSS receiver.
pub const GNSS: &str = "GN";

/// GLONASS receiver.
pub const GLONASS: &str = "GL";

/// Magnetic heading compass.
pub const HEADING_COMPASS: &str = "HC";

/// North-seeking gyro.
pub const GYRO: &str = "HE";

/// Integrated instrumentation.
pub const INTEGRATED_INSTRUMENTATION: &str = "II";

/// Integrated navigation.
pub const INTEGRATED_NAVIGATION: &str = "IN";

/// Depth sounder.
pub const DEPTH_SOUNDER: &str = "SD";

/// Transducer.
pub const TRANSDUCER: &str = "YX";

/// Prefix marking a proprietary sentence.
pub const PROPRIETARY_PREFIX: char = 'P';

/// Length of a talker id on the wire.
pub const TALKER_LEN: usize = 2;

/// Returns a human-readable name for a talker id.
pub fn talker_name(id: &str) -> &'static str {
    match id {
        GPS => "GPS",
        GNSS => "GNSS",
        GLONASS => "GLONASS",
        HEADING_COMPASS => "HEADING_COMPASS",
        GYRO => "GYRO",
        INTEGRATED_INSTRUMENTATION => "INTEGRATED_INSTRUMENTATION",
        INTEGRATED_NAVIGATION => "INTEGRATED_NAVIGATION",
        DEPTH_SOUNDER => "DEPTH_SOUNDER",
        TRANSDUCER => "TRANSDUCER",
        _ => "UNKNOWN",
    }
}

/// Returns true if the header token or sentence id is proprietary.
pub fn is_proprietary(token: &str) -> bool {
    token.starts_with(PROPRIETARY_PREFIX)
}

/// Returns true if `id` is a syntactically valid talker id.
pub fn is_valid_talker(id: &str) -> bool {
    id.len() == TALKER_LEN && id.bytes().all(|b| b.is_ascii_alphanumeric())
}
