// src/tree/mod.rs
// =============================================================================
// This module turns a flat HTML page into a nested link tree.
//
// Submodules:
// - model: the owned tree types (Heading, Link, HeadingKey, Node, LinkTree)
// - headers: top-level heading discovery and nearest-heading search
// - links: link filtering, per-section extraction and grouping
//
// build_link_tree() is the entry point the rest of the app uses.
// =============================================================================

mod headers;
mod links;
mod model;

pub use links::build_link_tree;
pub use model::{Heading, HeadingKey, Link, LinkTree, Node};
