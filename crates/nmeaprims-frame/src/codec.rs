use bytes::{Buf, Bytes, BytesMut};
use tracing::{debug, trace};

use crate::checksum::{append_checksum_footer, checksum, parse_checksum};
use crate::error::{CodecError, FrameError, Result};
use crate::talker::{is_proprietary, is_valid_talker, talker_name, TALKER_LEN};

/// Start delimiter of every sentence.
pub const START_DELIMITER: char = '$';

/// Separator between the body and the checksum.
pub const CHECKSUM_DELIMITER: char = '*';

/// Field separator inside the body.
pub const FIELD_SEPARATOR: char = ',';

/// Default maximum line length in bytes.
///
/// Plain NMEA caps sentences at 82 characters, but acoustic modem sentences
/// carry up to 1024 characters of Base64 payload.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;

/// Characters a field must never contain on the wire.
const RESERVED: [char; 6] = ['$', '!', '*', ',', '\r', '\n'];

/// A tokenized sentence.
///
/// `fields[0]` is the header token (`HCXDR`, `PNIX`), so field indices match
/// the positions documented for each sentence. Empty fields are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Talker id; `None` for proprietary sentences.
    pub talker_id: Option<String>,
    /// Sentence id, including the `P` prefix of proprietary sentences.
    pub sentence_id: String,
    /// All comma-separated tokens of the body, header first.
    pub fields: Vec<String>,
    /// Checksum declared on the wire, if the line carried one.
    pub checksum: Option<u8>,
}

impl Frame {
    /// Build a frame for encoding from a talker, a sentence id and the data fields.
    ///
    /// Proprietary sentence ids ignore `talker_id`; all others require one.
    pub fn new(talker_id: Option<&str>, sentence_id: &str, data: Vec<String>) -> Result<Self> {
        if sentence_id.is_empty() || !sentence_id.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(FrameError::InvalidHeader(sentence_id.to_string()));
        }

        let talker_id = if is_proprietary(sentence_id) {
            None
        } else {
            match talker_id {
                Some(talker) if is_valid_talker(talker) => Some(talker.to_string()),
                other => {
                    return Err(FrameError::InvalidTalker(
                        other.unwrap_or_default().to_string(),
                    ))
                }
            }
        };

        let header = format!("{}{sentence_id}", talker_id.as_deref().unwrap_or_default());
        let mut fields = Vec::with_capacity(data.len() + 1);
        fields.push(header);
        fields.extend(data);

        Ok(Self {
            talker_id,
            sentence_id: sentence_id.to_string(),
            fields,
            checksum: None,
        })
    }

    /// Field at `index`, or `None` past the end of the sentence.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Data fields (everything after the header token).
    pub fn data_fields(&self) -> &[String] {
        self.fields.get(1..).unwrap_or_default()
    }

    /// Header token as it appears on the wire.
    pub fn header(&self) -> &str {
        self.field(0).unwrap_or_default()
    }

    /// Device class of the talker, or `None` for a proprietary sentence.
    pub fn talker_name(&self) -> Option<&'static str> {
        self.talker_id.as_deref().map(talker_name)
    }

    /// Fail unless the sentence has at least `required` fields (header included).
    pub fn require_fields(&self, required: usize) -> std::result::Result<(), CodecError> {
        if self.fields.len() < required {
            return Err(CodecError::TruncatedSentence {
                sentence_id: self.sentence_id.clone(),
                required,
                actual: self.fields.len(),
            });
        }
        Ok(())
    }

    /// True when the data fields begin with `discriminators`.
    pub fn has_discriminators(&self, discriminators: &[&str]) -> bool {
        discriminators
            .iter()
            .enumerate()
            .all(|(i, expected)| self.field(i + 1) == Some(*expected))
    }
}

/// Whether a frame may omit its `*hh` footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChecksumPolicy {
    /// Reject checksum-less frames unless the talker is exempt.
    #[default]
    Required,
    /// Accept checksum-less frames from any talker.
    Optional,
}

/// Configuration for the sentence tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    /// Maximum line length in bytes, excluding CR/LF. Default: 4096.
    pub max_line_length: usize,
    /// Checksum requirement for incoming frames.
    pub checksum: ChecksumPolicy,
    /// Talker ids known to omit the checksum footer.
    pub checksum_exempt_talkers: Vec<String>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            checksum: ChecksumPolicy::Required,
            checksum_exempt_talkers: Vec::new(),
        }
    }
}

impl FrameConfig {
    fn accepts_missing_checksum(&self, talker_id: Option<&str>) -> bool {
        match self.checksum {
            ChecksumPolicy::Optional => true,
            ChecksumPolicy::Required => talker_id.is_some_and(|talker| {
                self.checksum_exempt_talkers
                    .iter()
                    .any(|exempt| exempt == talker)
            }),
        }
    }
}

/// Tokenize one sentence line.
///
/// Trailing CR/LF is stripped. The checksum is verified before the frame is
/// returned; a mismatch is always an error.
pub fn decode_frame(line: &str, config: &FrameConfig) -> Result<Frame> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);

    if line.len() > config.max_line_length {
        return Err(FrameError::LineTooLong {
            len: line.len(),
            max: config.max_line_length,
        });
    }
    if !line.is_ascii() {
        return Err(FrameError::NonAscii);
    }

    let rest = line
        .strip_prefix(START_DELIMITER)
        .ok_or(FrameError::MissingStartDelimiter)?;

    let (body, declared) = match rest.rfind(CHECKSUM_DELIMITER) {
        Some(pos) => {
            let text = &rest[pos + 1..];
            let declared = parse_checksum(text)
                .ok_or_else(|| FrameError::InvalidChecksumField(text.to_string()))?;
            (&rest[..pos], Some(declared))
        }
        None => (rest, None),
    };

    let fields: Vec<String> = body.split(FIELD_SEPARATOR).map(str::to_string).collect();
    let (talker_id, sentence_id) = split_header(&fields[0])?;

    match declared {
        Some(declared) => {
            let computed = checksum(body);
            if declared != computed {
                debug!(
                    sentence_id = %sentence_id,
                    declared = format_args!("{declared:02X}"),
                    computed = format_args!("{computed:02X}"),
                    "checksum mismatch"
                );
                return Err(FrameError::ChecksumMismatch { declared, computed });
            }
        }
        None if config.accepts_missing_checksum(talker_id.as_deref()) => {}
        None => return Err(FrameError::MissingChecksum),
    }

    trace!(
        sentence_id = %sentence_id,
        talker = talker_id.as_deref().map_or("PROPRIETARY", talker_name),
        fields = fields.len(),
        "decoded frame"
    );
    Ok(Frame {
        talker_id,
        sentence_id,
        fields,
        checksum: declared,
    })
}

/// Render a frame as a wire line with a freshly computed checksum footer.
///
/// Any checksum stored on the frame is ignored.
pub fn encode_frame(frame: &Frame, config: &FrameConfig) -> Result<String> {
    for (index, field) in frame.fields.iter().enumerate() {
        if let Some(ch) = field.chars().find(|ch| RESERVED.contains(ch)) {
            return Err(FrameError::ReservedCharacter { index, ch });
        }
        if !field.is_ascii() {
            return Err(FrameError::NonAscii);
        }
    }

    let mut body = String::with_capacity(frame.fields.iter().map(|f| f.len() + 1).sum());
    body.push(START_DELIMITER);
    body.push_str(&frame.fields.join(","));
    let line = append_checksum_footer(&body);

    let len = line.len() - 2;
    if len > config.max_line_length {
        return Err(FrameError::LineTooLong {
            len,
            max: config.max_line_length,
        });
    }

    trace!(sentence_id = %frame.sentence_id, len, "encoded frame");
    Ok(line)
}

/// Split the header token into talker id and sentence id.
pub fn split_header(header: &str) -> Result<(Option<String>, String)> {
    if header.is_empty() || !header.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(FrameError::InvalidHeader(header.to_string()));
    }
    if is_proprietary(header) {
        if header.len() < 2 {
            return Err(FrameError::InvalidHeader(header.to_string()));
        }
        return Ok((None, header.to_string()));
    }
    if header.len() <= TALKER_LEN {
        return Err(FrameError::InvalidHeader(header.to_string()));
    }
    let (talker, sentence) = header.split_at(TALKER_LEN);
    Ok((Some(talker.to_string()), sentence.to_string()))
}

/// Take the next LF-terminated line out of `src`.
///
/// Returns `Ok(None)` when no complete line is buffered yet. A line that grows
/// past `max_line_length` without a terminator is discarded up to the next LF
/// and reported once as [`FrameError::LineTooLong`]; `discarding` carries that
/// state across calls.
pub fn split_line(
    src: &mut BytesMut,
    max_line_length: usize,
    discarding: &mut bool,
) -> Result<Option<Bytes>> {
    loop {
        let newline = src.iter().position(|b| *b == b'\n');

        if *discarding {
            match newline {
                Some(pos) => {
                    src.advance(pos + 1);
                    *discarding = false;
                    continue;
                }
                None => {
                    src.clear();
                    return Ok(None);
                }
            }
        }

        match newline {
            Some(pos) => {
                let line = src.split_to(pos + 1).freeze();
                let content_len = trimmed_len(&line);
                if content_len > max_line_length {
                    return Err(FrameError::LineTooLong {
                        len: content_len,
                        max: max_line_length,
                    });
                }
                return Ok(Some(line));
            }
            // Allow one trailing CR beyond the limit before giving up on the line.
            None if src.len() > max_line_length + 1 => {
                let len = src.len();
                debug!(len, max = max_line_length, "discarding over-long line");
                src.clear();
                *discarding = true;
                return Err(FrameError::LineTooLong {
                    len,
                    max: max_line_length,
                });
            }
            None => return Ok(None),
        }
    }
}

/// Decode a raw line taken from a byte stream, or `Ok(None)` for a blank one.
pub fn decode_line(line: &[u8], config: &FrameConfig) -> Result<Option<Frame>> {
    let text = std::str::from_utf8(line).map_err(|_| FrameError::NonAscii)?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    decode_frame(text, config).map(Some)
}

fn trimmed_len(line: &[u8]) -> usize {
    line.iter()
        .rposition(|b| *b != b'\r' && *b != b'\n')
        .map_or(0, |pos| pos + 1)
}
