//! Emphasis and strong emphasis resolution.
//!
//! Openers wait on a delimiter stack. Each opener owns a segment: the nodes
//! emitted while it was the innermost open delimiter. A closer pops the
//! segment of its opener and wraps it in an `em` or `strong` node.

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::delimiter::Delimiter;
use crate::Options;
use crate::node::Node;

/// The delimiter stack, its parallel segment stack, and the base output.
///
/// Both stacks are only changed together, so their lengths are always equal.
#[derive(Debug, Default)]
pub struct DelimiterStacks {
    base: Vec<Node>,
    delimiters: SmallVec<[Delimiter; 8]>,
    segments: SmallVec<[Vec<Node>; 8]>,
}

impl DelimiterStacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending openers.
    #[inline]
    pub fn delimiter_depth(&self) -> usize {
        self.delimiters.len()
    }

    /// Number of open segments.
    #[inline]
    pub fn segment_depth(&self) -> usize {
        self.segments.len()
    }

    /// Append a node to the innermost open segment, or to the base output.
    #[inline]
    pub fn emit(&mut self, node: Node) {
        match self.segments.last_mut() {
            Some(segment) => segment.push(node),
            None => self.base.push(node),
        }
    }

    /// Push an opener with the segment it starts out with.
    fn push(&mut self, delim: Delimiter, segment: Vec<Node>) {
        self.delimiters.push(delim);
        self.segments.push(segment);
        debug_assert_eq!(self.delimiters.len(), self.segments.len());
    }

    /// Index of the innermost opener the closer may match.
    fn find_opener(&self, closer: &Delimiter, options: &Options) -> Option<usize> {
        self.delimiters
            .iter()
            .rposition(|opener| matches(opener, closer, options))
    }

    /// Pop everything from index `k` up.
    ///
    /// Openers above `k` never found a closer: each becomes literal text
    /// followed by its segment, appended to the segment of `k` in stack order.
    /// Returns the opener at `k` and the flattened segment.
    fn close_at(&mut self, k: usize) -> Option<(Delimiter, Vec<Node>)> {
        let flattened = self.delimiters.len().saturating_sub(k + 1);
        if flattened > 0 {
            log::trace!("flattening {flattened} unmatched opener(s) above depth {k}");
        }

        let mut delimiters = self.delimiters.drain(k..);
        let mut segments = self.segments.drain(k..);
        let opener = delimiters.next()?;
        let mut inner = segments.next().unwrap_or_default();
        for (delim, segment) in delimiters.zip(segments) {
            inner.push(Node::text(delim.literal()));
            inner.extend(segment);
        }
        Some((opener, inner))
    }

    /// Flatten every pending opener onto the base output and return it.
    ///
    /// Each opener's literal lands where it was scanned, in push order.
    /// The stacks are left empty and ready for reuse.
    pub fn flush(&mut self) -> Vec<Node> {
        if !self.delimiters.is_empty() {
            log::debug!("{} opener(s) left unmatched at end of text", self.delimiters.len());
        }
        for (delim, segment) in self.delimiters.drain(..).zip(self.segments.drain(..)) {
            self.base.push(Node::text(delim.literal()));
            self.base.extend(segment);
        }
        std::mem::take(&mut self.base)
    }

    /// Drop all state.
    pub fn clear(&mut self) {
        self.base.clear();
        self.delimiters.clear();
        self.segments.clear();
    }
}

/// Whether `opener` may be closed by `closer`.
///
/// Every opener matches unless the CommonMark multiple-of-3 rule is enabled.
fn matches(opener: &Delimiter, closer: &Delimiter, options: &Options) -> bool {
    if !options.rule_of_three {
        return true;
    }
    let ambiguous = (opener.can_open && opener.can_close) || (closer.can_open && closer.can_close);
    let sum = opener.count + closer.count;
    !(ambiguous && sum % 3 == 0 && !(opener.count % 3 == 0 && closer.count % 3 == 0))
}

/// Resolve the `*` run scanned at the current position.
///
/// Returns how many delimiters were consumed, which is how far the caller
/// must advance. Always at least 1. When the closer is longer than its
/// opener only the matched part is consumed; the rest is scanned again.
pub fn resolve_delimiter(
    stacks: &mut DelimiterStacks,
    delim: Delimiter,
    options: &Options,
) -> usize {
    let matched = if delim.can_close {
        stacks
            .find_opener(&delim, options)
            .and_then(|k| stacks.close_at(k))
    } else {
        None
    };

    let Some((opener, inner)) = matched else {
        if delim.can_open {
            stacks.push(delim, Vec::new());
        } else if options.keep_inert_delimiters {
            stacks.emit(Node::text(delim.literal()));
        } else {
            log::trace!("dropping inert run of {} delimiter(s)", delim.count);
        }
        return delim.count;
    };

    let count = opener.count.min(delim.count);
    let node = if count == 1 {
        Node::emphasis(inner)
    } else {
        Node::strong(inner)
    };

    match opener.count.cmp(&delim.count) {
        Ordering::Greater => stacks.push(opener.with_count(opener.count - count), vec![node]),
        Ordering::Equal | Ordering::Less => stacks.emit(node),
    }
    count
}
