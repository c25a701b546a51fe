// src/render/markdown.rs
// =============================================================================
// Markdown output for the link tree.
//
// Output rules:
//   heading level N  -> N '#' characters, a space, the label, "\n"
//   heading w/o text -> label is "Content not found"
//   NoHeading key    -> no line, its links are written in place
//   link             -> "[label](url)\n\n"
//   link w/o text    -> skipped
// =============================================================================

use tracing::debug;

use crate::tree::{Heading, HeadingKey, Link, LinkTree, Node};

/// Label written for headings that have no text.
pub const MISSING_HEADING_TEXT: &str = "Content not found";

// Cleans up text taken from the page
//
// Trims both ends, then collapses every run of whitespace (line breaks
// included) into a single space.
//
// Example: "  Foo\n\nBar  " -> "Foo Bar"
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Renders the whole tree
//
// An empty tree renders to an empty string.
pub fn links_tree_to_markdown(tree: &LinkTree) -> String {
    let mut out = String::new();
    build_md(&tree.root, &mut out);
    out
}

fn build_md(node: &Node, out: &mut String) {
    match node {
        Node::Section(entries) => {
            for (key, child) in entries {
                if let HeadingKey::Heading(heading) = key {
                    out.push_str(&heading_line(heading));
                }
                build_md(child, out);
            }
        }
        Node::Leaf(links) => {
            for link in links {
                match link_line(link) {
                    Some(line) => out.push_str(&line),
                    None => debug!(url = %link.url, "skipping link without text"),
                }
            }
        }
    }
}

fn heading_line(heading: &Heading) -> String {
    let label = heading
        .text
        .as_deref()
        .map(normalize_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| MISSING_HEADING_TEXT.to_string());

    format!("{} {}\n", "#".repeat(heading.level as usize), label)
}

fn link_line(link: &Link) -> Option<String> {
    let label = normalize_text(link.text.as_deref()?);
    if label.is_empty() {
        return None;
    }
    Some(format!("[{}]({})\n\n", label, link.url))
}
