//! Immutable text cursor for inline scanning.
//!
//! A cursor is a `Copy` view over a string plus a byte position. It is never
//! mutated: every movement returns a new cursor, so scanners can hold on to
//! an earlier position and fall back to it for free.

/// A position inside a text run.
///
/// Positions are byte offsets and always sit on a `char` boundary. The
/// delimiter characters the inline parser cares about are ASCII, so every
/// advance it makes is both a byte count and a code point count.
///
/// # Example
/// ```
/// use ferrospan::cursor::TextCursor;
///
/// let cursor = TextCursor::new("Hello, World!");
/// assert_eq!(cursor.peek(), Some('H'));
///
/// let moved = cursor.advance(7);
/// assert_eq!(moved.peek(), Some('W'));
/// assert_eq!(cursor.position(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextCursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> TextCursor<'a> {
    /// Create a cursor at the start of `text`.
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// The full text this cursor walks over.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.text.len() - self.pos
    }

    /// Check if the cursor is at the end of the text.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Return a cursor moved forward by `n` bytes.
    #[inline]
    pub fn advance(self, n: usize) -> Self {
        self.move_to(self.pos + n)
    }

    /// Return a cursor at an absolute position.
    #[inline]
    pub fn move_to(self, pos: usize) -> Self {
        debug_assert!(pos <= self.text.len());
        debug_assert!(self.text.is_char_boundary(pos));
        Self {
            text: self.text,
            pos,
        }
    }

    /// The current byte, or `None` at the end.
    #[inline]
    pub fn peek_byte(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// The current character, or `None` at the end.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    /// The character starting at byte offset `pos`.
    #[inline]
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|rest| rest.chars().next())
    }

    /// The character ending right before byte offset `pos`.
    #[inline]
    pub fn char_before(&self, pos: usize) -> Option<char> {
        self.text.get(..pos).and_then(|head| head.chars().next_back())
    }

    /// The literal text between two byte offsets.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    /// The unscanned suffix.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Offset of the first byte at or after the cursor that differs from `b`.
    #[inline]
    pub fn run_end(&self, b: u8) -> usize {
        let bytes = self.text.as_bytes();
        let mut end = self.pos;
        while end < bytes.len() && bytes[end] == b {
            end += 1;
        }
        end
    }

    /// Offset where the run of `b` containing the cursor starts.
    #[inline]
    pub fn run_start(&self, b: u8) -> usize {
        let bytes = self.text.as_bytes();
        let mut start = self.pos;
        while start > 0 && bytes[start - 1] == b {
            start -= 1;
        }
        start
    }
}

impl std::fmt::Debug for TextCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextCursor")
            .field("position", &self.pos)
            .field("remaining", &self.remaining())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_new() {
        let cursor = TextCursor::new("Hello");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.remaining(), 5);
        assert!(!cursor.is_eof());
    }

    #[test]
    fn test_cursor_empty() {
        let cursor = TextCursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.peek_byte(), None);
    }

    #[test]
    fn test_cursor_advance_is_pure() {
        let cursor = TextCursor::new("Hello");
        let moved = cursor.advance(2);
        assert_eq!(cursor.position(), 0);
        assert_eq!(moved.position(), 2);
        assert_eq!(moved.peek(), Some('l'));
        assert_eq!(moved.rest(), "llo");
    }

    #[test]
    fn test_cursor_move_to_end() {
        let cursor = TextCursor::new("abc").move_to(3);
        assert!(cursor.is_eof());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_cursor_multibyte_neighbours() {
        let cursor = TextCursor::new("é*ü");
        assert_eq!(cursor.char_before(2), Some('é'));
        assert_eq!(cursor.char_at(3), Some('ü'));
        assert_eq!(cursor.char_before(0), None);
        assert_eq!(cursor.char_at(5), None);
    }

    #[test]
    fn test_cursor_runs() {
        let cursor = TextCursor::new("a***b").move_to(2);
        assert_eq!(cursor.run_start(b'*'), 1);
        assert_eq!(cursor.run_end(b'*'), 4);
    }

    #[test]
    fn test_cursor_slice() {
        let cursor = TextCursor::new("hello world");
        assert_eq!(cursor.slice(6, 11), "world");
    }
}
