//! Fixed-capacity buffer for one argument line.

use heapless::Vec;

/// Bounded append buffer.
///
/// `push` fails closed: bytes past the capacity are dropped, never written
/// out of bounds.
pub struct LineBuffer<const N: usize> {
    buf: Vec<u8, N>,
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append one byte; dropped silently if the buffer is full.
    pub fn push(&mut self, byte: u8) {
        let _ = self.buf.push(byte);
    }

    /// Discard the contents.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Stored bytes as a string slice; non-UTF-8 content reads as empty.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf).unwrap_or("")
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
