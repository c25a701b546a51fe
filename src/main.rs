// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, filtered by RUST_LOG, printed to stderr)
// 2. Parse --link and --file with clap
// 3. Run the pipeline: fetch -> build tree -> render -> write
// 4. Exit with a code that says what went wrong:
//      0 = outline written
//      1 = unexpected error
//      2 = the page could not be fetched
//      3 = the output file could not be written
//
// Each stage only needs the previous stage's output, and they run one after
// another. If anything fails before the write, no file is created.
// =============================================================================

mod cli;
mod fetch;
mod output;
mod render;
mod tree;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::Cli;
use fetch::{FetchError, FetchOptions};
use output::WriteError;

const EXIT_FAILURE: i32 = 1;
const EXIT_FETCH: i32 = 2;
const EXIT_WRITE: i32 = 3;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // clap prints usage and exits by itself on bad arguments
    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

// Runs the whole pipeline for one page
async fn run(cli: &Cli) -> Result<()> {
    let html = fetch::load_page(&cli.link, &FetchOptions::default())
        .await
        .with_context(|| format!("could not load {}", cli.link))?;

    let tree = tree::build_link_tree(&html);
    info!(links = tree.link_count(), "built link tree");
    if tree.is_empty() {
        info!("no headings found, the outline will be empty");
    }

    let markdown = render::links_tree_to_markdown(&tree);

    output::save_as_md(&markdown, &cli.file)
        .with_context(|| format!("could not save {}", cli.file.display()))?;

    println!("Link tree written to {}", cli.file.display());
    Ok(())
}

// Picks the process exit code for a failed run
fn exit_code(err: &anyhow::Error) -> i32 {
    if err.chain().any(|cause| cause.is::<FetchError>()) {
        EXIT_FETCH
    } else if err.chain().any(|cause| cause.is::<WriteError>()) {
        EXIT_WRITE
    } else {
        EXIT_FAILURE
    }
}
