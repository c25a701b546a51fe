// src/tree/model.rs
// =============================================================================
// The link tree: headings with the links that belong to them.
//
// The tree mixes two kinds of levels:
// - Section: an ordered list of (heading, child node) pairs
// - Leaf: an ordered list of links
//
// Instead of a map with a nullable key, "no heading found" is its own
// variant of HeadingKey. Everything here is owned data, so the parsed HTML
// document can be dropped once the tree is built.
// =============================================================================

/// A heading element (<h1> .. <h6>) copied out of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 (most significant) to 6
    pub level: u8,
    /// Raw text content, None when the element has no text at all
    pub text: Option<String>,
}

/// A link element with an absolute http(s) target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    /// Raw visible text, None when the element has no text at all
    pub text: Option<String>,
}

/// Key of a Section entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadingKey {
    Heading(Heading),
    /// The link had no preceding heading in any of its ancestors
    NoHeading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Entries keep the order in which their heading was first seen
    Section(Vec<(HeadingKey, Node)>),
    Leaf(Vec<Link>),
}

/// Result of the tree builder.
///
/// The root is always a `Node::Section` keyed by the page's top-level
/// headings. Each of those maps to a `Node::Section` keyed by nearest
/// headings, whose values are `Node::Leaf`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTree {
    pub root: Node,
}

impl LinkTree {
    pub fn new(sections: Vec<(HeadingKey, Node)>) -> Self {
        Self {
            root: Node::Section(sections),
        }
    }

    /// True when the page had no headings at all
    pub fn is_empty(&self) -> bool {
        match &self.root {
            Node::Section(entries) => entries.is_empty(),
            Node::Leaf(links) => links.is_empty(),
        }
    }

    /// Total number of links across all sections (duplicates included)
    pub fn link_count(&self) -> usize {
        count_links(&self.root)
    }
}

fn count_links(node: &Node) -> usize {
    match node {
        Node::Section(entries) => entries.iter().map(|(_, child)| count_links(child)).sum(),
        Node::Leaf(links) => links.len(),
    }
}

#[cfg(test)]
impl Heading {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: Some(text.into()),
        }
    }
}

#[cfg(test)]
impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: Some(text.into()),
        }
    }
}
