//! ferrospan: inline parser for emphasis, strong emphasis and code spans
//!
//! Takes the raw text of paragraphs and headers from an already-built block
//! tree and turns it into inline nodes, following the CommonMark delimiter
//! run algorithm in a simplified form.
//!
//! # Design Principles
//! - One left-to-right pass with an explicit loop; no recursion per input byte
//! - Total: malformed markup degrades to literal text, never an error
//! - Immutable tree values; children always in document order
//!
//! # Known Deviations from CommonMark
//! - A closing run of 3+ matched against an equal opener is a single
//!   `strong`, never `strong` + `em`.
//! - A `*` run that can neither open nor close is dropped unless
//!   [`Options::keep_inert_delimiters`] is set.
//! - The multiple-of-3 rule is only applied with [`Options::rule_of_three`].

pub mod cursor;
pub mod inline;
pub mod node;
pub mod transform;

// Re-export primary types
pub use inline::{InlineParser, InlineRun};
pub use node::{Child, HeadingLevel, Node, NodeKind, OpenNode};
pub use transform::{parse_document, parse_document_with_options};

/// Inline parsing options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Turn each `\n` outside a code span into a `softbreak` node, dropping
    /// spaces and tabs right before it.
    pub soft_breaks: bool,
    /// Emit `*` runs that can neither open nor close as literal text.
    pub keep_inert_delimiters: bool,
    /// Apply the CommonMark multiple-of-3 rule when matching openers.
    pub rule_of_three: bool,
}

/// Parse a text run into inline nodes.
///
/// # Example
/// ```
/// let nodes = ferrospan::parse_inlines("*foo **bar** baz*");
/// assert_eq!(nodes.len(), 1);
/// assert_eq!(
///     nodes[0].to_string(),
///     r#"em(text("foo "), strong(text("bar")), text(" baz"))"#
/// );
/// ```
pub fn parse_inlines(text: &str) -> Vec<Node> {
    parse_inlines_with_options(text, Options::default())
}

/// Parse a text run with options.
pub fn parse_inlines_with_options(text: &str, options: Options) -> Vec<Node> {
    InlineRun::new(text, options).finish()
}
