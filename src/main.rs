//! snipstash - Code Snippet Store
//!
//! A small command-line tool for storing, searching, exporting, and
//! importing short code snippets tagged with metadata. The whole
//! collection is kept newest-first in memory and mirrored into a single
//! JSON slot on disk after every mutation.

use std::error::Error;

mod cli;
mod clipboard;
mod error;
mod models;

fn main() -> Result<(), Box<dyn Error>> {
    color_eyre::install()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::execute_cli(&args)
}
