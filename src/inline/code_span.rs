//! Code span scanning.
//!
//! A backtick run opens a span that only a run of exactly the same length
//! closes. Runs of other lengths inside are part of the code.

use crate::cursor::TextCursor;

pub const BACKTICK: u8 = b'`';

/// Outcome of scanning at a backtick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSpanScan<'a> {
    /// Matched span; holds the verbatim text between the fences.
    Span(&'a str),
    /// No closing run; holds the opening run, to be emitted as text.
    Unmatched(&'a str),
}

/// Scan a code span starting at the cursor.
///
/// Returns the outcome and the cursor to resume from: after the closing run
/// on success, right after the opening run otherwise.
pub fn scan_code_span(cursor: TextCursor<'_>) -> (CodeSpanScan<'_>, TextCursor<'_>) {
    debug_assert_eq!(cursor.peek_byte(), Some(BACKTICK));

    let open_start = cursor.position();
    let open_end = cursor.run_end(BACKTICK);
    let open_len = open_end - open_start;

    let mut search = cursor.move_to(open_end);
    while let Some(offset) = memchr::memchr(BACKTICK, search.rest().as_bytes()) {
        let run = search.advance(offset);
        let run_end = run.run_end(BACKTICK);
        if run_end - run.position() == open_len {
            let code = cursor.slice(open_end, run.position());
            return (CodeSpanScan::Span(code), run.move_to(run_end));
        }
        search = run.move_to(run_end);
    }

    log::trace!("unmatched backtick run of length {open_len} at {open_start}");
    (
        CodeSpanScan::Unmatched(cursor.slice(open_start, open_end)),
        cursor.move_to(open_end),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> (CodeSpanScan<'_>, usize) {
        let (result, next) = scan_code_span(TextCursor::new(text));
        (result, next.position())
    }

    #[test]
    fn test_simple_code_span() {
        assert_eq!(scan("`code` rest"), (CodeSpanScan::Span("code"), 6));
    }

    #[test]
    fn test_double_backtick_with_inner_single() {
        assert_eq!(scan("``a`b``"), (CodeSpanScan::Span("a`b"), 7));
    }

    #[test]
    fn test_longer_inner_run_is_skipped() {
        assert_eq!(scan("`a``b`"), (CodeSpanScan::Span("a``b"), 6));
    }

    #[test]
    fn test_content_not_trimmed() {
        assert_eq!(scan("` x `"), (CodeSpanScan::Span(" x "), 5));
    }

    #[test]
    fn test_empty_content() {
        // A lone run has nothing after it to close it.
        assert_eq!(scan("``"), (CodeSpanScan::Unmatched("``"), 2));
    }

    #[test]
    fn test_unmatched_resumes_after_opener() {
        assert_eq!(scan("`abc"), (CodeSpanScan::Unmatched("`"), 1));
        assert_eq!(scan("`abc``"), (CodeSpanScan::Unmatched("`"), 1));
    }

    #[test]
    fn test_scan_from_middle() {
        let cursor = TextCursor::new("x `y` z").move_to(2);
        let (result, next) = scan_code_span(cursor);
        assert_eq!(result, CodeSpanScan::Span("y"));
        assert_eq!(next.position(), 5);
    }
}
