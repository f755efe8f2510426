//! ferrospan CLI - print the inline tree of Markdown paragraphs
//!
//! Usage: `ferrospan [--soft-breaks] [--keep-inert] [--rule-of-three] [FILE|-]`
//!
//! Blank-line separated chunks of the input become paragraphs. Each parsed
//! paragraph is printed on its own line in expression notation.

use std::io::{self, Read, Write};

use ferrospan::{Child, Node, NodeKind, OpenNode, Options, parse_document_with_options};

fn main() -> io::Result<()> {
    env_logger::init();

    let (options, path) = parse_args(std::env::args().skip(1))?;

    let input = match path.as_deref() {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let document = parse_document_with_options(paragraphs(&input), options);

    let mut out = io::stdout().lock();
    for child in document.children() {
        if let Child::Node(node) = child {
            writeln!(out, "{node}")?;
        }
    }
    Ok(())
}

/// Split the command line into options and an optional input path.
///
/// `-` is a path meaning stdin. Any other argument starting with `--` must be
/// a known flag.
fn parse_args(args: impl IntoIterator<Item = String>) -> io::Result<(Options, Option<String>)> {
    let mut options = Options::default();
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "--soft-breaks" => options.soft_breaks = true,
            "--keep-inert" => options.keep_inert_delimiters = true,
            "--rule-of-three" => options.rule_of_three = true,
            flag if flag.starts_with("--") => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unknown flag: {flag}"),
                ));
            }
            _ => path = Some(arg),
        }
    }
    Ok((options, path))
}

/// Wrap each blank-line separated chunk in a paragraph.
fn paragraphs(input: &str) -> Node {
    let mut document = OpenNode::new(NodeKind::Document);
    let mut chunk: Vec<&str> = Vec::new();
    for line in input.lines().chain(std::iter::once("")) {
        if line.trim().is_empty() {
            if !chunk.is_empty() {
                document = document.with_child(Node::paragraph(chunk.join("\n")));
                chunk.clear();
            }
        } else {
            chunk.push(line);
        }
    }
    document.close()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_known_flags_and_path() {
        let (options, path) =
            parse_args(args(&["--soft-breaks", "--rule-of-three", "notes.md"])).unwrap();
        assert!(options.soft_breaks);
        assert!(options.rule_of_three);
        assert!(!options.keep_inert_delimiters);
        assert_eq!(path.as_deref(), Some("notes.md"));
    }

    #[test]
    fn test_dash_is_stdin_path() {
        let (options, path) = parse_args(args(&["--keep-inert", "-"])).unwrap();
        assert!(options.keep_inert_delimiters);
        assert_eq!(path.as_deref(), Some("-"));
        assert_eq!(parse_args(args(&[])).unwrap(), (Options::default(), None));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = parse_args(args(&["--soft-break", "notes.md"])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("--soft-break"));
    }

    #[test]
    fn test_paragraph_chunks() {
        let doc = paragraphs("a\nb\n\n\nc\n");
        assert_eq!(doc.children().len(), 2);
    }
}
