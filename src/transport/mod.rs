//! # Printer Transport Layer
//!
//! This module provides the raw byte sinks that rendered rows are written to.
//!
//! ## Available Transports
//!
//! - [`device`]: Printer character devices (USB, serial, RFCOMM)
//! - [`WriteSink`]: Any [`std::io::Write`] (stdout, TCP streams, files)
//! - [`RecordingSink`]: Keeps every write separately, for tests
//! - `Vec<u8>`: Appends everything into one buffer

use std::io::Write;

use crate::error::ThaiPrintError;

pub mod device;

pub use device::DeviceTransport;

/// A destination for raw printer bytes.
///
/// Each call is one raw write. [`crate::thai::print_thai`] makes three calls
/// per line and relies on the printer not feeding paper between them.
pub trait RawSink {
    /// Write `data` to the printer unchanged.
    fn write_raw(&mut self, data: &[u8]) -> Result<(), ThaiPrintError>;
}

impl RawSink for Vec<u8> {
    fn write_raw(&mut self, data: &[u8]) -> Result<(), ThaiPrintError> {
        self.extend_from_slice(data);
        Ok(())
    }
}

/// Records each write as its own entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    pub writes: Vec<Vec<u8>>,
}

impl RawSink for RecordingSink {
    fn write_raw(&mut self, data: &[u8]) -> Result<(), ThaiPrintError> {
        self.writes.push(data.to_vec());
        Ok(())
    }
}

/// Adapts any [`Write`] into a [`RawSink`], flushing after every write.
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> RawSink for WriteSink<W> {
    fn write_raw(&mut self, data: &[u8]) -> Result<(), ThaiPrintError> {
        self.inner.write_all(data)?;
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_vec_sink_appends() {
        let mut sink = Vec::new();
        sink.write_raw(&[1, 2]).unwrap();
        sink.write_raw(&[3]).unwrap();
        assert_eq!(sink, vec![1, 2, 3]);
    }

    #[test]
    fn test_recording_sink_keeps_writes_apart() {
        let mut sink = RecordingSink::default();
        sink.write_raw(&[1, 2]).unwrap();
        sink.write_raw(&[]).unwrap();
        assert_eq!(sink.writes, vec![vec![1, 2], vec![]]);
    }

    #[test]
    fn test_write_sink_forwards() {
        let mut sink = WriteSink::new(Vec::new());
        sink.write_raw(b"ab").unwrap();
        sink.write_raw(b"c").unwrap();
        assert_eq!(sink.into_inner(), b"abc".to_vec());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "printer offline"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_sink_propagates_errors() {
        let mut sink = WriteSink::new(FailingWriter);
        let err = sink.write_raw(b"x").unwrap_err();
        assert!(matches!(err, ThaiPrintError::Io(_)));
    }
}
