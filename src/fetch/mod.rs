// src/fetch/mod.rs
// =============================================================================
// This module downloads the page we are going to outline.
//
// It is the first stage of the pipeline:
//   fetch -> build tree -> render -> write
//
// One GET request, no retries. A non-success status is an error that carries
// the status code so main() can report it.
// =============================================================================

mod page;

pub use page::{load_page, FetchError, FetchOptions};
