// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool has a single command with two named options:
//   --link  the page to outline (required)
//   --file  where to write the Markdown outline (default: linktree.md)
//
// There are no subcommands, so the Cli struct is the whole interface.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// Default output path used when --file is not given
pub const DEFAULT_OUTPUT: &str = "linktree.md";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to generate the parsing code for us
#[derive(Parser, Debug)]
#[command(
    name = "link-tree",
    version,
    about = "Outline a web page's headings and their links as nested Markdown",
    long_about = "link-tree fetches a single web page, finds its heading hierarchy, \
                  assigns every absolute http(s) link to its nearest heading and writes \
                  the result as a nested Markdown outline."
)]
pub struct Cli {
    /// URL of the page to outline (e.g., https://example.com/docs)
    #[arg(long)]
    pub link: String,

    /// Path of the Markdown file to write (overwritten if it exists)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub file: PathBuf,
}
