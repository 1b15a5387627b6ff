//! `tokio_util::codec` adapter with the same line semantics as
//! [`SentenceReader`](crate::SentenceReader) and [`SentenceWriter`](crate::SentenceWriter).

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::codec::{decode_line, encode_frame, split_line, Frame, FrameConfig};
use crate::error::FrameError;

/// Line codec yielding one tokenized [`Frame`] per sentence.
#[derive(Debug, Clone, Default)]
pub struct SentenceCodec {
    config: FrameConfig,
    discarding: bool,
}

impl SentenceCodec {
    /// Create a codec with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with explicit configuration.
    pub fn with_config(config: FrameConfig) -> Self {
        Self {
            config,
            discarding: false,
        }
    }

    /// Current codec configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl Decoder for SentenceCodec {
    type Item = Frame;
    type Error = FrameError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Frame>, FrameError> {
        while let Some(line) = split_line(src, self.config.max_line_length, &mut self.discarding)? {
            if let Some(frame) = decode_line(&line, &self.config)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Frame>, FrameError> {
        if let Some(frame) = self.decode(src)? {
            return Ok(Some(frame));
        }
        let rest = src.split();
        if std::mem::take(&mut self.discarding) {
            return Ok(None);
        }
        decode_line(&rest, &self.config)
    }
}

impl Encoder<Frame> for SentenceCodec {
    type Error = FrameError;

    fn encode(&mut self, frame: Frame, dst: &mut BytesMut) -> Result<(), FrameError> {
        let line = encode_frame(&frame, &self.config)?;
        dst.reserve(line.len());
        dst.put_slice(line.as_bytes());
        Ok(())
    }
}
