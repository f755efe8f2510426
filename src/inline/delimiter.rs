//! Delimiter run scanning for `*`.
//!
//! Classifies a run as left-flanking (may open) and/or right-flanking
//! (may close) from the characters just outside the run.

use unicode_categories::UnicodeCategories;

use crate::cursor::TextCursor;

/// The emphasis delimiter character.
pub const STAR: u8 = b'*';

/// A scanned run of `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    /// Delimiters not yet consumed, counted from the cursor to the end of the run.
    pub count: usize,
    /// Left-flanking.
    pub can_open: bool,
    /// Right-flanking.
    pub can_close: bool,
}

impl Delimiter {
    /// Same flanking, fewer delimiters.
    #[inline]
    pub fn with_count(self, count: usize) -> Self {
        debug_assert!(count >= 1);
        Self { count, ..self }
    }

    /// The run as literal text.
    #[inline]
    pub fn literal(&self) -> String {
        "*".repeat(self.count)
    }
}

/// Scan the `*` run at the cursor.
///
/// The flanking context is taken from the whole run, even when the cursor
/// sits in the middle of it after part of the run was already consumed.
pub fn scan_delimiter(cursor: TextCursor<'_>) -> Delimiter {
    debug_assert_eq!(cursor.peek_byte(), Some(STAR));

    let delim_start = cursor.run_start(STAR);
    let delim_end = cursor.run_end(STAR);

    let before = cursor.char_before(delim_start);
    let after = cursor.char_at(delim_end);
    let (can_open, can_close) = flanking(before, after);

    Delimiter {
        count: delim_end - cursor.position(),
        can_open,
        can_close,
    }
}

/// Compute `(can_open, can_close)` from the neighbours of a run.
/// `None` is a string boundary and counts as whitespace.
pub fn flanking(before: Option<char>, after: Option<char>) -> (bool, bool) {
    let whitespace_before = is_whitespace(before);
    let whitespace_after = is_whitespace(after);
    let punctuation_before = is_punctuation(before);
    let punctuation_after = is_punctuation(after);

    let can_open =
        !whitespace_after && (!punctuation_after || whitespace_before || punctuation_before);
    let can_close =
        !whitespace_before && (!punctuation_before || whitespace_after || punctuation_after);

    (can_open, can_close)
}

#[inline]
fn is_whitespace(c: Option<char>) -> bool {
    c.is_none_or(char::is_whitespace)
}

#[inline]
fn is_punctuation(c: Option<char>) -> bool {
    match c {
        Some(c) if c.is_ascii() => ASCII_PUNCTUATION[c as usize],
        Some(c) => c.is_punctuation(),
        None => false,
    }
}

/// ASCII punctuation as defined by CommonMark.
static ASCII_PUNCTUATION: [bool; 128] = {
    let mut table = [false; 128];
    let chars = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
    let mut i = 0;
    while i < chars.len() {
        table[chars[i] as usize] = true;
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_at(text: &str, pos: usize) -> Delimiter {
        scan_delimiter(TextCursor::new(text).move_to(pos))
    }

    #[test]
    fn test_opener_at_start() {
        let d = scan_at("*foo*", 0);
        assert_eq!(d.count, 1);
        assert!(d.can_open);
        assert!(!d.can_close);
    }

    #[test]
    fn test_closer_at_end() {
        let d = scan_at("*foo*", 4);
        assert!(!d.can_open);
        assert!(d.can_close);
    }

    #[test]
    fn test_surrounded_by_spaces_is_inert() {
        let d = scan_at("a * b", 2);
        assert!(!d.can_open);
        assert!(!d.can_close);
    }

    #[test]
    fn test_intraword_is_both() {
        let d = scan_at("foo*bar", 3);
        assert!(d.can_open);
        assert!(d.can_close);
    }

    #[test]
    fn test_count_is_remaining_run() {
        assert_eq!(scan_at("***x", 0).count, 3);
        assert_eq!(scan_at("***x", 1).count, 2);
        assert_eq!(scan_at("***x", 2).count, 1);
    }

    #[test]
    fn test_partial_run_keeps_flanking() {
        let full = scan_at("a ***b", 2);
        let rest = scan_at("a ***b", 4);
        assert_eq!((full.can_open, full.can_close), (rest.can_open, rest.can_close));
    }

    #[test]
    fn test_punctuation_rules() {
        // Followed by punctuation, preceded by a letter: not left-flanking.
        let d = scan_at("a*\"foo\"", 1);
        assert!(!d.can_open);
        assert!(d.can_close);
        // Preceded by whitespace, followed by punctuation: left-flanking.
        let d = scan_at(" *\"foo\"", 1);
        assert!(d.can_open);
    }

    #[test]
    fn test_unicode_punctuation_and_space() {
        // U+00A0 is whitespace, U+00BF is punctuation.
        let (open, close) = flanking(Some('\u{a0}'), Some('¿'));
        assert!(open);
        assert!(!close);
        let (open, _) = flanking(Some('x'), Some('\u{2014}'));
        assert!(!open);
    }

    #[test]
    fn test_literal() {
        let d = scan_at("**", 0);
        assert_eq!(d.literal(), "**");
        assert_eq!(d.with_count(1).literal(), "*");
    }
}
