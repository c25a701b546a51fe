// src/render/mod.rs
// =============================================================================
// This module serializes a link tree to Markdown text.
//
// Depth-first walk, in the tree's insertion order:
// - headings become ATX headings ("## Title")
// - links become "[label](url)" paragraphs
// =============================================================================

mod markdown;

pub use markdown::links_tree_to_markdown;
