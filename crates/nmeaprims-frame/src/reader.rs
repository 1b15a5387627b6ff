use std::io::{ErrorKind, Read};

use bytes::BytesMut;

use crate::codec::{decode_line, split_line, Frame, FrameConfig};
use crate::error::{FrameError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 1024;
const READ_CHUNK_SIZE: usize = 1024;

/// Reads sentence lines from any `Read` stream and tokenizes them.
///
/// Handles partial reads internally: callers always get complete frames.
/// Blank lines are skipped. An over-long line is reported once and the
/// reader resynchronizes at the next line feed.
pub struct SentenceReader<T> {
    inner: T,
    buf: BytesMut,
    config: FrameConfig,
    discarding: bool,
    eof: bool,
}

impl<T: Read> SentenceReader<T> {
    /// Create a new sentence reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new sentence reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
            discarding: false,
            eof: false,
        }
    }

    /// Read the next complete frame (blocking).
    ///
    /// A final line without a terminator is decoded at EOF. After that,
    /// returns `Err(FrameError::ConnectionClosed)`.
    pub fn read_frame(&mut self) -> Result<Frame> {
        loop {
            while let Some(line) =
                split_line(&mut self.buf, self.config.max_line_length, &mut self.discarding)?
            {
                if let Some(frame) = decode_line(&line, &self.config)? {
                    return Ok(frame);
                }
            }

            if self.eof {
                let rest = self.buf.split();
                if self.discarding {
                    self.discarding = false;
                    continue;
                }
                return match decode_line(&rest, &self.config)? {
                    Some(frame) => Ok(frame),
                    None => Err(FrameError::ConnectionClosed),
                };
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                self.eof = true;
                continue;
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Update maximum line length for subsequent reads.
    pub fn set_max_line_length(&mut self, max_line_length: usize) {
        self.config.max_line_length = max_line_length;
    }

    /// Current sentence reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl<T: Read> Iterator for SentenceReader<T> {
    type Item = Result<Frame>;

    /// Yields frames until the stream closes; per-line errors are yielded
    /// and iteration continues.
    fn next(&mut self) -> Option<Self::Item> {
        match self.read_frame() {
            Err(FrameError::ConnectionClosed) => None,
            other => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const NIX_REPLY: &str = "$PNIX,US,TR,7,0>31>0,7.196334,10794.502*0B\r\n";
    const XDR: &str = "$HCXDR,A,272.3,D,A,272.3,D,A,+03.3,D,A,-000.5,D,C,+30.6,C,G,002*1F\r\n";
    const VTG: &str = "$IIVTG,210.43,T,210.43,M,5.65,N,,,A*67\r\n";

    fn reader(text: &str) -> SentenceReader<Cursor<Vec<u8>>> {
        SentenceReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn read_single_frame() {
        let mut reader = reader(NIX_REPLY);
        let frame = reader.read_frame().unwrap();

        assert_eq!(frame.sentence_id, "PNIX");
        assert_eq!(frame.field(4), Some("0>31>0"));
        assert!(matches!(
            reader.read_frame(),
            Err(FrameError::ConnectionClosed)
        ));
    }

    #[test]
    fn read_multiple_frames() {
        let mut reader = reader(&format!("{NIX_REPLY}{XDR}{VTG}"));

        let f1 = reader.read_frame().unwrap();
        let f2 = reader.read_frame().unwrap();
        let f3 = reader.read_frame().unwrap();

        assert_eq!(f1.sentence_id, "PNIX");
        assert_eq!(f2.sentence_id, "XDR");
        assert_eq!(f3.sentence_id, "VTG");
    }

    #[test]
    fn skips_blank_lines_and_accepts_bare_lf() {
        let text = format!("\r\n\n{}\n", NIX_REPLY.trim_end());
        let mut reader = reader(&text);
        assert_eq!(reader.read_frame().unwrap().sentence_id, "PNIX");
    }

    #[test]
    fn decodes_unterminated_final_line() {
        let mut reader = reader(NIX_REPLY.trim_end());
        assert_eq!(reader.read_frame().unwrap().sentence_id, "PNIX");
        assert!(matches!(
            reader.read_frame(),
            Err(FrameError::ConnectionClosed)
        ));
    }

    #[test]
    fn partial_read_handling() {
        let byte_reader = ByteByByteReader {
            bytes: format!("{XDR}{VTG}").into_bytes(),
            pos: 0,
        };
        let mut reader = SentenceReader::new(byte_reader);

        assert_eq!(reader.read_frame().unwrap().sentence_id, "XDR");
        assert_eq!(reader.read_frame().unwrap().sentence_id, "VTG");
    }

    #[test]
    fn connection_closed_cleanly() {
        let mut reader = reader("");
        let err = reader.read_frame().unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
    }

    #[test]
    fn bad_line_does_not_poison_stream() {
        let text = format!("garbage\r\n$PNIX,US,TR,7,0>31>0,7.196334,10794.502*0C\r\n{VTG}");
        let mut reader = reader(&text);

        assert!(matches!(
            reader.read_frame(),
            Err(FrameError::MissingStartDelimiter)
        ));
        assert!(matches!(
            reader.read_frame(),
            Err(FrameError::ChecksumMismatch { .. })
        ));
        assert_eq!(reader.read_frame().unwrap().sentence_id, "VTG");
    }

    #[test]
    fn oversized_line_in_stream_resyncs() {
        let text = format!("${}\r\n{VTG}", "X".repeat(200));
        let cfg = FrameConfig {
            max_line_length: 64,
            ..FrameConfig::default()
        };
        let mut reader = SentenceReader::with_config(Cursor::new(text.into_bytes()), cfg);

        let err = reader.read_frame().unwrap_err();
        assert!(matches!(err, FrameError::LineTooLong { max: 64, .. }));
        assert_eq!(reader.read_frame().unwrap().sentence_id, "VTG");
    }

    #[test]
    fn oversized_unterminated_tail_is_dropped() {
        let text = format!("{VTG}${}", "X".repeat(2000));
        let cfg = FrameConfig {
            max_line_length: 64,
            ..FrameConfig::default()
        };
        let mut reader = SentenceReader::with_config(Cursor::new(text.into_bytes()), cfg);

        assert_eq!(reader.read_frame().unwrap().sentence_id, "VTG");
        assert!(matches!(
            reader.read_frame(),
            Err(FrameError::LineTooLong { .. })
        ));
        assert!(matches!(
            reader.read_frame(),
            Err(FrameError::ConnectionClosed)
        ));
    }

    #[test]
    fn iterator_stops_at_close() {
        let text = format!("{NIX_REPLY}garbage\n{VTG}");
        let results: Vec<Result<Frame>> = reader(&text).collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn accessors_and_into_inner() {
        let mut reader = reader("");

        let _ = reader.get_ref();
        let _ = reader.get_mut();
        reader.set_max_line_length(82);
        assert_eq!(reader.config().max_line_length, 82);
        let _inner = reader.into_inner();
    }

    #[test]
    fn interrupted_read_retries() {
        let reader = InterruptedThenData {
            state: 0,
            bytes: NIX_REPLY.as_bytes().to_vec(),
            pos: 0,
        };
        let mut framed = SentenceReader::new(reader);
        assert_eq!(framed.read_frame().unwrap().sentence_id, "PNIX");
    }

    #[test]
    fn read_would_block_propagates_io_error() {
        let reader = WouldBlock;
        let mut framed = SentenceReader::new(reader);
        let err = framed.read_frame().unwrap_err();
        assert!(matches!(err, FrameError::Io(e) if e.kind() == ErrorKind::WouldBlock));
    }

    #[derive(Debug)]
    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }

            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    struct InterruptedThenData {
        state: u8,
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for InterruptedThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.state == 0 {
                self.state = 1;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            if self.pos >= self.bytes.len() {
                return Ok(0);
            }
            let remaining = self.bytes.len() - self.pos;
            let n = remaining.min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    struct WouldBlock;

    impl Read for WouldBlock {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::WouldBlock))
        }
    }
}
