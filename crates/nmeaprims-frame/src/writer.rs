use std::io::{ErrorKind, Write};

use crate::codec::{encode_frame, Frame, FrameConfig};
use crate::error::{FrameError, Result};

/// Writes complete sentence lines to any `Write` stream.
///
/// Every frame gets a freshly computed checksum and a CR/LF terminator.
pub struct SentenceWriter<T> {
    inner: T,
    config: FrameConfig,
}

impl<T: Write> SentenceWriter<T> {
    /// Create a new sentence writer with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new sentence writer with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self { inner, config }
    }

    /// Encode and write a frame (blocking).
    pub fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        let line = encode_frame(frame, &self.config)?;
        self.write_line(&line)
    }

    /// Write an already encoded line as-is.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let bytes = line.as_bytes();
        let mut offset = 0usize;
        while offset < bytes.len() {
            match self.inner.write(&bytes[offset..]) {
                Ok(0) => return Err(FrameError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
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

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current sentence writer configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}
