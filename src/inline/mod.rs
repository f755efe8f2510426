//! Inline parser.
//!
//! A single left-to-right pass dispatches on the current byte:
//! - `` ` ``: code span scanner
//! - `*`: emphasis resolver
//! - anything else: one text node up to the next special byte
//!
//! Pending openers live on [`DelimiterStacks`]. At the end of the text any
//! opener still pending is flushed back as literal text.

mod code_span;
mod delimiter;
mod emphasis;

pub use code_span::{CodeSpanScan, scan_code_span};
pub use delimiter::{Delimiter, flanking, scan_delimiter};
pub use emphasis::{DelimiterStacks, resolve_delimiter};

use crate::Options;
use crate::cursor::TextCursor;
use crate::node::Node;
use code_span::BACKTICK;
use delimiter::STAR;

const NEWLINE: u8 = b'\n';

/// Reusable inline parser.
///
/// Keeps stack capacity between calls; no parse state survives a call.
#[derive(Debug, Default)]
pub struct InlineParser {
    options: Options,
    stacks: DelimiterStacks,
}

impl InlineParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            stacks: DelimiterStacks::new(),
        }
    }

    /// Parse one text run into inline nodes, in document order.
    pub fn parse(&mut self, text: &str) -> Vec<Node> {
        let stacks = std::mem::take(&mut self.stacks);
        let mut run = InlineRun::with_stacks(text, self.options, stacks);
        while run.step() {}
        let nodes = run.stacks.flush();
        self.stacks = run.stacks;
        nodes
    }
}

/// One in-progress parse of a text run.
///
/// Driven by [`step`](Self::step); every step moves the cursor forward by at
/// least one byte, so a run over `n` bytes finishes in at most `n` steps.
///
/// # Example
/// ```
/// use ferrospan::{InlineRun, Options};
///
/// let mut run = InlineRun::new("*a **b** c*", Options::default());
/// while run.step() {
///     assert_eq!(run.delimiter_depth(), run.segment_depth());
/// }
/// let nodes = run.finish();
/// assert_eq!(nodes[0].to_string(), r#"em(text("a "), strong(text("b")), text(" c"))"#);
/// ```
#[derive(Debug)]
pub struct InlineRun<'a> {
    cursor: TextCursor<'a>,
    options: Options,
    stacks: DelimiterStacks,
}

impl<'a> InlineRun<'a> {
    pub fn new(text: &'a str, options: Options) -> Self {
        Self::with_stacks(text, options, DelimiterStacks::new())
    }

    fn with_stacks(text: &'a str, options: Options, mut stacks: DelimiterStacks) -> Self {
        stacks.clear();
        Self {
            cursor: TextCursor::new(text),
            options,
            stacks,
        }
    }

    /// Current byte offset into the text.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor.is_eof()
    }

    #[inline]
    pub fn delimiter_depth(&self) -> usize {
        self.stacks.delimiter_depth()
    }

    #[inline]
    pub fn segment_depth(&self) -> usize {
        self.stacks.segment_depth()
    }

    /// Process the next construct. Returns `false` once the text is exhausted.
    pub fn step(&mut self) -> bool {
        let Some(b) = self.cursor.peek_byte() else {
            return false;
        };
        let start = self.cursor.position();

        match b {
            BACKTICK => self.code_span(),
            STAR => self.delimiter_run(),
            NEWLINE if self.options.soft_breaks => {
                self.stacks.emit(Node::soft_break());
                self.cursor = self.cursor.advance(1);
            }
            _ => self.plain_run(),
        }

        debug_assert!(self.cursor.position() > start);
        true
    }

    /// Run to the end and return the nodes, flushing unmatched openers.
    pub fn finish(mut self) -> Vec<Node> {
        while self.step() {}
        self.stacks.flush()
    }

    fn code_span(&mut self) {
        let (scan, next) = scan_code_span(self.cursor);
        let node = match scan {
            CodeSpanScan::Span(code) => Node::code_span(code),
            CodeSpanScan::Unmatched(run) => Node::text(run),
        };
        self.stacks.emit(node);
        self.cursor = next;
    }

    fn delimiter_run(&mut self) {
        let delim = scan_delimiter(self.cursor);
        let consumed = resolve_delimiter(&mut self.stacks, delim, &self.options);
        self.cursor = self.cursor.advance(consumed);
    }

    fn plain_run(&mut self) {
        let rest = self.cursor.rest().as_bytes();
        let stop = if self.options.soft_breaks {
            memchr::memchr3(BACKTICK, STAR, NEWLINE, rest)
        } else {
            memchr::memchr2(BACKTICK, STAR, rest)
        };
        let len = stop.unwrap_or(rest.len());

        let mut text = self.cursor.slice(self.cursor.position(), self.cursor.position() + len);
        if stop.is_some_and(|i| rest[i] == NEWLINE) {
            text = text.trim_end_matches([' ', '\t']);
        }
        if !text.is_empty() {
            self.stacks.emit(Node::text(text));
        }
        self.cursor = self.cursor.advance(len);
    }
}
