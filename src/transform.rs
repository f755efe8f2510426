//! Apply the inline parser to a finished block tree.
//!
//! The tree is rebuilt node by node. Only the raw strings of paragraphs and
//! headers are replaced, by their parsed inline nodes; kinds, data and every
//! other child pass through unchanged.

use crate::Options;
use crate::inline::InlineParser;
use crate::node::{Child, Node};

/// Parse the inline content of every paragraph and header in `document`.
///
/// # Example
/// ```
/// use ferrospan::{HeadingLevel, Node, NodeKind, OpenNode, parse_document};
///
/// let doc = OpenNode::new(NodeKind::Document)
///     .with_child(Node::header(HeadingLevel::new(1).unwrap(), "*Title*"))
///     .close();
/// let doc = parse_document(doc);
/// assert_eq!(doc.to_string(), r#"document(header[1](em(text("Title"))))"#);
/// ```
pub fn parse_document(document: Node) -> Node {
    parse_document_with_options(document, Options::default())
}

/// Like [`parse_document`], with explicit inline options.
pub fn parse_document_with_options(document: Node, options: Options) -> Node {
    let mut parser = InlineParser::with_options(options);
    transform(document, &mut parser)
}

fn transform(node: Node, parser: &mut InlineParser) -> Node {
    let inline = node.kind().has_inline_content();
    let (kind, children) = node.into_parts();

    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Child::Text(raw) if inline => {
                let nodes = parser.parse(&raw);
                log::trace!("{}: {} inline node(s)", kind.name(), nodes.len());
                out.extend(nodes.into_iter().map(Child::Node));
            }
            Child::Node(child) => out.push(Child::Node(transform(child, parser))),
            text @ Child::Text(_) => out.push(text),
        }
    }
    Node::new(kind, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{HeadingLevel, NodeKind, OpenNode};

    #[test]
    fn test_paragraph_children_replaced() {
        let para = parse_document(Node::paragraph("a **b**"));
        assert_eq!(para.kind(), &NodeKind::Paragraph);
        assert_eq!(para.to_string(), r#"paragraph(text("a "), strong(text("b")))"#);
    }

    #[test]
    fn test_header_level_untouched() {
        let level = HeadingLevel::new(4).unwrap();
        let header = parse_document(Node::header(level, "`x`"));
        assert_eq!(header.kind(), &NodeKind::Header { level });
        assert_eq!(header.to_string(), r#"header[4](code-span("x"))"#);
    }

    #[test]
    fn test_code_block_text_untouched() {
        let block = Node::new(NodeKind::CodeBlock, vec![Child::from("*not em*")]);
        let doc = OpenNode::new(NodeKind::Document).with_child(block).close();
        assert_eq!(
            parse_document(doc).to_string(),
            r#"document(code-block("*not em*"))"#
        );
    }

    #[test]
    fn test_nested_containers() {
        let item = OpenNode::new(NodeKind::Item { padding: 2 })
            .with_child(Node::paragraph("*a*"))
            .close();
        let list = OpenNode::new(NodeKind::List).with_child(item).close();
        let quote = OpenNode::new(NodeKind::BlockQuote)
            .with_child(list)
            .with_child(Node::new(NodeKind::HRule, Vec::new()))
            .close();
        assert_eq!(
            parse_document(quote).to_string(),
            r#"block-quote(list(item[2](paragraph(em(text("a"))))), hrule)"#
        );
    }

    #[test]
    fn test_empty_paragraph() {
        assert_eq!(parse_document(Node::paragraph("")).to_string(), "paragraph()");
    }
}
