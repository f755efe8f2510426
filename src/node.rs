//! Document tree shared by the block and inline layers.
//!
//! Two node types exist: [`OpenNode`] is still being built by a block
//! parser and can take more children, [`Node`] is closed. Closing is a
//! one-way conversion, so a closed node can never be reopened.
//!
//! Children are always stored in left-to-right document order. Builders
//! append; nothing in this crate ever hands out a reversed child list.

use std::fmt;

/// Heading level, always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// `None` outside `1..=6`.
    pub const fn new(level: u8) -> Option<Self> {
        match level {
            1..=6 => Some(Self(level)),
            _ => None,
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Node type together with the data that belongs to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of a document.
    Document,
    /// Thematic break.
    HRule,
    /// Paragraph. Holds one raw string until inlines are parsed.
    Paragraph,
    /// Block quote.
    BlockQuote,
    /// Indented code block.
    CodeBlock,
    /// Fenced code block.
    FencedCode {
        /// Fence character (`` ` `` or `~`).
        fence: char,
        /// Info string after the opening fence.
        info: String,
    },
    /// List container.
    List,
    /// List item.
    Item {
        /// Content indentation of the item.
        padding: usize,
    },
    /// Heading. Holds one raw string until inlines are parsed.
    Header {
        level: HeadingLevel,
    },
    /// Literal text; its single child is a string.
    Text,
    /// Line break inside a paragraph.
    SoftBreak,
    /// Emphasis (`*em*`).
    Emphasis,
    /// Strong emphasis (`**strong**`).
    Strong,
    /// Code span; its single child is the verbatim code.
    CodeSpan,
}

impl NodeKind {
    /// Short name used by the expression notation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::HRule => "hrule",
            Self::Paragraph => "paragraph",
            Self::BlockQuote => "block-quote",
            Self::CodeBlock => "code-block",
            Self::FencedCode { .. } => "fenced-code",
            Self::List => "list",
            Self::Item { .. } => "item",
            Self::Header { .. } => "header",
            Self::Text => "text",
            Self::SoftBreak => "softbreak",
            Self::Emphasis => "em",
            Self::Strong => "strong",
            Self::CodeSpan => "code-span",
        }
    }

    /// Whether this is a leaf block whose strings hold inline markup.
    #[inline]
    pub fn has_inline_content(&self) -> bool {
        matches!(self, Self::Paragraph | Self::Header { .. })
    }
}

/// A child of a node: either another node or a raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Node(Node),
    Text(String),
}

impl Child {
    /// The child node, if this is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Text(_) => None,
        }
    }

    /// The raw string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Node(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// A node that is still accepting children.
///
/// Every operation consumes the node and returns the updated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenNode {
    kind: NodeKind,
    children: Vec<Child>,
}

impl OpenNode {
    /// Start a node with no children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Append a child after the existing ones.
    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Replace the kind, e.g. to record a heading level found late.
    pub fn with_kind(self, kind: NodeKind) -> Self {
        Self {
            kind,
            children: self.children,
        }
    }

    /// Close the node. There is no way back.
    ///
    /// `text` and `code-span` nodes close with exactly one string child:
    /// the literal text of whatever was appended, in order.
    pub fn close(self) -> Node {
        Node::new(self.kind, self.children)
    }
}

/// A closed, immutable node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Child>,
}

impl Node {
    /// Build a closed node directly, normalizing literal kinds to one string child.
    pub(crate) fn new(kind: NodeKind, children: Vec<Child>) -> Self {
        let children = match kind {
            NodeKind::Text | NodeKind::CodeSpan if !is_single_string(&children) => {
                let mut literal = String::new();
                collect_strings(&children, &mut literal);
                vec![Child::Text(literal)]
            }
            _ => children,
        };
        Self { kind, children }
    }

    /// A `text` node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text, vec![Child::Text(text.into())])
    }

    /// A `code-span` node holding the verbatim code.
    pub fn code_span(code: impl Into<String>) -> Self {
        Self::new(NodeKind::CodeSpan, vec![Child::Text(code.into())])
    }

    pub fn soft_break() -> Self {
        Self::new(NodeKind::SoftBreak, Vec::new())
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Emphasis, children.into_iter().map(Child::Node).collect())
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Strong, children.into_iter().map(Child::Node).collect())
    }

    /// A paragraph holding unparsed inline text.
    pub fn paragraph(raw: impl Into<String>) -> Self {
        Self::new(NodeKind::Paragraph, vec![Child::Text(raw.into())])
    }

    /// A heading holding unparsed inline text.
    pub fn header(level: HeadingLevel, raw: impl Into<String>) -> Self {
        Self::new(NodeKind::Header { level }, vec![Child::Text(raw.into())])
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Children in document order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// The string of a `text` or `code-span` node.
    pub fn literal(&self) -> Option<&str> {
        match (&self.kind, self.children.as_slice()) {
            (NodeKind::Text | NodeKind::CodeSpan, [Child::Text(text)]) => Some(text),
            _ => None,
        }
    }

    /// Same kind and data, new children.
    pub fn with_children(self, children: Vec<Child>) -> Self {
        Self::new(self.kind, children)
    }

    pub fn into_parts(self) -> (NodeKind, Vec<Child>) {
        (self.kind, self.children)
    }
}

#[inline]
fn is_single_string(children: &[Child]) -> bool {
    matches!(children, [Child::Text(_)])
}

fn collect_strings(children: &[Child], out: &mut String) {
    for child in children {
        match child {
            Child::Text(text) => out.push_str(text),
            Child::Node(node) => collect_strings(&node.children, out),
        }
    }
}

/// Compact expression notation, e.g. `em(text("foo"), strong(text("bar")))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())?;
        match &self.kind {
            NodeKind::Header { level } => write!(f, "[{level}]")?,
            NodeKind::Item { padding } => write!(f, "[{padding}]")?,
            NodeKind::FencedCode { fence, info } => write!(f, "[{fence}{info}]")?,
            _ => {}
        }
        if self.children.is_empty() && matches!(self.kind, NodeKind::HRule | NodeKind::SoftBreak) {
            return Ok(());
        }
        f.write_str("(")?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match child {
                Child::Node(node) => write!(f, "{node}")?,
                Child::Text(text) => write!(f, "{text:?}")?,
            }
        }
        f.write_str(")")
    }
}

/// Join nodes with `", "` in expression notation.
pub fn display_nodes(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
