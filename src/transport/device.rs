//! # Printer Device Transport
//!
//! Writes raw bytes to a printer character device: a USB printer class
//! device (`/dev/usb/lp0`), a USB serial adapter (`/dev/ttyUSB0`) or a
//! Bluetooth RFCOMM binding (`/dev/rfcomm0`).
//!
//! ## TTY Configuration
//!
//! When the device is a TTY it is switched to raw mode so glyph bytes in the
//! 144–254 range reach the printer unmodified:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no LF to CR LF translation,
//!   which would break the row overlay)
//! - **8-bit characters**: CS8 (8 data bits, no parity)
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)
//!
//! Non-TTY devices (such as `/dev/usb/lp0`) are written as plain files.
//!
//! ## Chunked Writes
//!
//! Large writes are split into chunks with a small delay between them so
//! slow links do not overrun the printer's input buffer.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use super::RawSink;
use crate::error::ThaiPrintError;

/// Default printer device path
pub const DEFAULT_DEVICE: &str = "/dev/usb/lp0";

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Printer Device Transport
///
/// ## Example
///
/// ```no_run
/// use thaiprint::transport::DeviceTransport;
/// use thaiprint::protocol::commands;
/// use thaiprint::thai;
///
/// let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
/// transport.write_all(&commands::select_thai_code_table())?;
/// thai::print_thai(&mut transport, "สวัสดีครับ")?;
///
/// # Ok::<(), thaiprint::error::ThaiPrintError>(())
/// ```
pub struct DeviceTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport {
    /// Open a printer device for writing.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the `lp` or `dialout` group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, ThaiPrintError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            ThaiPrintError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_if_tty(&file)?;
        log::info!("opened printer device {}", path.display());

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Set the chunk size for large writes. Default is 4096 bytes.
    ///
    /// A size of zero is treated as one byte per chunk.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks. Default is 2ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    /// Write data to the printer and flush.
    ///
    /// Small writes are sent directly. Large writes are chunked.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), ThaiPrintError> {
        if data.is_empty() {
            return Ok(());
        }

        if data.len() <= self.chunk_size {
            self.file
                .write_all(data)
                .map_err(|e| ThaiPrintError::Transport(format!("Write failed: {}", e)))?;
        } else {
            for chunk in data.chunks(self.chunk_size) {
                self.file
                    .write_all(chunk)
                    .map_err(|e| ThaiPrintError::Transport(format!("Write failed: {}", e)))?;

                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }

        self.file
            .flush()
            .map_err(|e| ThaiPrintError::Transport(format!("Flush failed: {}", e)))?;
        log::debug!("wrote {} bytes", data.len());

        Ok(())
    }
}

impl RawSink for DeviceTransport {
    fn write_raw(&mut self, data: &[u8]) -> Result<(), ThaiPrintError> {
        self.write_all(data)
    }
}

#[cfg(unix)]
fn configure_if_tty(file: &File) -> Result<(), ThaiPrintError> {
    let fd = file.as_raw_fd();
    if unsafe { libc::isatty(fd) } == 1 {
        configure_tty_raw(fd)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn configure_if_tty(_file: &File) -> Result<(), ThaiPrintError> {
    Ok(())
}

/// Configure a file descriptor for raw TTY mode.
///
/// IXON/IXOFF/IXANY are disabled as well: XON/XOFF flow control would
/// swallow 0x11 and 0x13 if they ever appear in the data.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> Result<(), ThaiPrintError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(ThaiPrintError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(ThaiPrintError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    log::debug!("configured fd {} for raw mode", fd);
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_path() {
        assert_eq!(DEFAULT_DEVICE, "/dev/usb/lp0");
    }

    #[test]
    fn test_open_missing_device() {
        let err = DeviceTransport::open("/nonexistent/thaiprint/lp0")
            .err()
            .unwrap();
        assert!(matches!(err, ThaiPrintError::Transport(_)));
        assert!(err.to_string().contains("/nonexistent/thaiprint/lp0"));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_to_null_device() {
        let mut transport = DeviceTransport::open("/dev/null").unwrap();
        transport.set_chunk_size(2);
        transport.set_chunk_delay(Duration::ZERO);
        transport.write_raw(&[1, 2, 3, 4, 5]).unwrap();
        transport.write_raw(&[]).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_chunk_size_clamped() {
        let mut transport = DeviceTransport::open("/dev/null").unwrap();
        transport.set_chunk_size(0);
        transport.set_chunk_delay(Duration::ZERO);
        transport.write_all(&[0xA1, 0x0A]).unwrap();
    }

    // Note: Most transport tests require actual hardware.
}
