//! XOR checksum over the sentence body.
//!
//! The body is every character between `$` and `*`, both exclusive. All
//! functions here skip a leading `$` so callers may pass either form.

/// Compute the raw checksum byte of a sentence body.
pub fn checksum(body: &str) -> u8 {
    strip_start(body).bytes().fold(0u8, |acc, b| acc ^ b)
}

/// Compute the checksum as two uppercase, zero-padded hex digits.
pub fn compute_checksum(body: &str) -> String {
    format!("{:02X}", checksum(body))
}

/// Parse a declared checksum (two hex digits, either case).
pub fn parse_checksum(declared: &str) -> Option<u8> {
    if declared.len() != 2 || !declared.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(declared, 16).ok()
}

/// Check a declared checksum against the body.
pub fn verify_checksum(body: &str, declared: &str) -> bool {
    parse_checksum(declared) == Some(checksum(body))
}

/// Return `body*hh\r\n` with a freshly computed checksum.
pub fn append_checksum_footer(body: &str) -> String {
    let mut line = String::with_capacity(body.len() + 5);
    line.push_str(body);
    line.push('*');
    line.push_str(&compute_checksum(body));
    line.push_str("\r\n");
    line
}

fn strip_start(body: &str) -> &str {
    body.strip_prefix('$').unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NIX_REPLY_BODY: &str = "PNIX,US,TR,7,0>31>0,7.196334,10794.502";
    const XDR_BODY: &str = "HCXDR,A,272.3,D,A,272.3,D,A,+03.3,D,A,-000.5,D,C,+30.6,C,G,002";

    #[test]
    fn computes_known_checksums() {
        assert_eq!(compute_checksum(NIX_REPLY_BODY), "0B");
        assert_eq!(compute_checksum(XDR_BODY), "1F");
        assert_eq!(compute_checksum("IIVTG,210.43,T,210.43,M,5.65,N,,,A"), "67");
    }

    #[test]
    fn leading_dollar_is_ignored() {
        assert_eq!(
            checksum(NIX_REPLY_BODY),
            checksum(&format!("${NIX_REPLY_BODY}"))
        );
    }

    #[test]
    fn empty_body_is_zero_padded() {
        assert_eq!(compute_checksum(""), "00");
        // 'A' ^ 'B' = 0x03
        assert_eq!(compute_checksum("AB"), "03");
    }

    #[test]
    fn verify_accepts_computed_value_in_either_case() {
        for body in [NIX_REPLY_BODY, XDR_BODY, "", "GPGGA,,,,"] {
            assert!(verify_checksum(body, &compute_checksum(body)));
        }
        assert!(verify_checksum("GPHDT,274.07,T", "03"));
        let lower = compute_checksum(XDR_BODY).to_ascii_lowercase();
        assert!(verify_checksum(XDR_BODY, "1f"));
        assert!(verify_checksum(XDR_BODY, &lower));
    }

    #[test]
    fn single_character_flip_changes_checksum() {
        // sequence 7 -> 6 flips the low bit: 0x0B -> 0x0A
        let flipped = "PNIX,US,TR,6,0>31>0,7.196334,10794.502";
        assert_eq!(compute_checksum(flipped), "0A");
        assert!(!verify_checksum(flipped, "0B"));

        // 272.3 -> 273.3 flips the low bit of one digit: 0x1F -> 0x1E
        let flipped = "HCXDR,A,273.3,D,A,272.3,D,A,+03.3,D,A,-000.5,D,C,+30.6,C,G,002";
        assert_eq!(compute_checksum(flipped), "1E");
    }

    #[test]
    fn malformed_declared_values_never_verify() {
        assert!(!verify_checksum(NIX_REPLY_BODY, ""));
        assert!(!verify_checksum(NIX_REPLY_BODY, "B"));
        assert!(!verify_checksum(NIX_REPLY_BODY, "0B0"));
        assert!(!verify_checksum(NIX_REPLY_BODY, "+B"));
        assert!(!verify_checksum(NIX_REPLY_BODY, "ZZ"));
    }

    #[test]
    fn footer_appends_checksum_and_crlf() {
        assert_eq!(
            append_checksum_footer(&format!("${NIX_REPLY_BODY}")),
            "$PNIX,US,TR,7,0>31>0,7.196334,10794.502*0B\r\n"
        );
    }
}
