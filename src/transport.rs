//! Console byte transport seam.

use core::fmt;

use crate::error::Disconnected;

/// Byte-level console transport (UART, USB CDC, or a test double).
///
/// Reads are non-blocking: `WouldBlock` means no byte is available right
/// now, [`Disconnected`] means no byte will ever be available again.
pub trait ConsoleIo {
    /// Poll for one input byte without blocking.
    fn read_byte(&mut self) -> nb::Result<u8, Disconnected>;

    /// Write raw bytes to the sink.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Write a line followed by the terminal's CRLF ending.
    fn write_line(&mut self, line: &str) {
        self.write_bytes(line.as_bytes());
        self.write_bytes(b"\r\n");
    }
}

/// [`core::fmt::Write`] adapter so handlers can use `write!` on a transport.
pub struct IoWriter<'a, T: ?Sized>(pub &'a mut T);

impl<T: ConsoleIo + ?Sized> fmt::Write for IoWriter<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_bytes(s.as_bytes());
        Ok(())
    }
}
