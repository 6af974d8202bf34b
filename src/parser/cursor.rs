/// Read position over a counted byte buffer.
///
/// Tracks `(position, remaining)` explicitly; every scan is bounded by the
/// remaining length, so embedded NUL and non-UTF-8 bytes are ordinary data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Offset of the cursor in the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Returns `true` once every byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// The unconsumed tail of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.buffer[self.position..]
    }

    /// Borrows `range` of the underlying buffer.
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.buffer[start..end]
    }

    /// Moves the cursor forward by at most `count` bytes.
    pub fn advance(&mut self, count: usize) {
        self.position += count.min(self.remaining());
    }

    /// Offset of `needle` relative to the cursor, if it occurs in the rest.
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        find_subslice(self.rest(), needle)
    }

    /// Returns `true` when the rest starts with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consumes one line and returns it without its terminator.
    ///
    /// A line ends at the first `\r` or `\n`; `\r\n` counts as a single
    /// terminator. The final line may end at the buffer end instead.
    pub fn take_line(&mut self) -> &'a [u8] {
        let rest = self.rest();
        let Some(end) = rest.iter().position(|&b| b == b'\r' || b == b'\n') else {
            self.position = self.buffer.len();
            return rest;
        };

        let mut consumed = end + 1;
        if rest[end] == b'\r' && rest.get(end + 1) == Some(&b'\n') {
            consumed += 1;
        }

        self.position += consumed;
        &rest[..end]
    }
}

pub(crate) fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    haystack.windows(needle.len()).position(|window| window == needle)
}
