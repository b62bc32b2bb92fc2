//! CLI module for snipstash
//! Thin command dispatch over the snippet store. The store instance is
//! built once here and handed to each command; commands print results
//! directly and surface recoverable errors as notices.

pub mod commands;

use crate::models::{SnippetStore, StorageManager};
use colored::Colorize;
use std::error::Error;

/// Executes a CLI command based on the provided arguments
pub fn execute_cli(args: &[String]) -> Result<(), Box<dyn Error>> {
    if args.is_empty() {
        print_help();
        return Ok(());
    }

    let storage = StorageManager::new()?;
    let mut store = SnippetStore::open(storage);

    match args[0].as_str() {
        "add" | "new" => {
            if args.len() < 3 {
                println!("{}  Error: Missing title or code", "┃".bright_magenta());
                println!(
                    "{}  Usage: snipstash add <TITLE> <CODE> [LANGUAGE] [TAGS]",
                    "┃".bright_magenta()
                );
                return Ok(());
            }

            let language = args.get(3).map(String::as_str);
            let tags_raw = args.get(4).map(String::as_str).unwrap_or("");
            commands::add_snippet(&mut store, &args[1], language, &args[2], tags_raw)?;
        }
        "list" | "ls" => {
            commands::list_snippets(&store)?;
        }
        "show" | "view" | "cat" => {
            if args.len() < 2 {
                println!(
                    "{}  Error: Missing snippet name or ID",
                    "┃".bright_magenta()
                );
                println!(
                    "{}  Usage: snipstash show <SNIPPET_NAME_OR_ID>",
                    "┃".bright_magenta()
                );
                return Ok(());
            }

            commands::show_snippet(&store, &args[1])?;
        }
        "search" | "find" => {
            if args.len() < 2 {
                println!("{}  Error: Missing search query", "┃".bright_magenta());
                println!(
                    "{}  Usage: snipstash search <QUERY>",
                    "┃".bright_magenta()
                );
                return Ok(());
            }

            commands::search_snippets(&store, &args[1])?;
        }
        "delete" | "rm" => {
            if args.len() < 2 {
                println!("{}  Error: Missing snippet ID", "┃".bright_magenta());
                println!(
                    "{}  Usage: snipstash delete <SNIPPET_ID>",
                    "┃".bright_magenta()
                );
                return Ok(());
            }

            commands::delete_snippet(&mut store, &args[1])?;
        }
        "copy" | "cp" => {
            if args.len() < 2 {
                println!(
                    "{}  Error: Missing snippet name or ID",
                    "┃".bright_magenta()
                );
                println!(
                    "{}  Usage: snipstash copy <SNIPPET_NAME_OR_ID>",
                    "┃".bright_magenta()
                );
                return Ok(());
            }

            commands::copy_snippet(&store, &args[1])?;
        }
        "export" => {
            commands::export_snippets(&store, args.get(1).map(String::as_str))?;
        }
        "import" => {
            if args.len() < 2 {
                println!("{}  Error: Missing import file", "┃".bright_magenta());
                println!(
                    "{}  Usage: snipstash import <FILE>",
                    "┃".bright_magenta()
                );
                return Ok(());
            }

            commands::import_snippets(&mut store, &args[1])?;
        }
        "help" => {
            print_help();
        }
        _ => {
            println!("{}  Unknown command: {}", "┃".bright_magenta(), args[0]);

            print_help();
        }
    }

    Ok(())
}

/// Prints the help message with available commands
fn print_help() {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "SNIPSTASH - CODE SNIPPET STORE".bold()
    );

    println!("{}  {}", "┃".bright_magenta(), "USAGE:".bright_yellow());
    println!("{}  snipstash [COMMAND] [ARGS]", "┃".bright_magenta());
    println!("{}  {}", "┃".bright_magenta(), "COMMANDS:".bright_yellow());
    println!(
        "{}  {:<35} {}",
        "┃".bright_magenta(),
        "add <TITLE> <CODE> [LANG] [TAGS]".bright_white(),
        "Store a new snippet (tags are comma-separated)"
    );
    println!(
        "{}  {:<35} {}",
        "┃".bright_magenta(),
        "list, ls".bright_white(),
        "List all snippets, newest first"
    );
    println!(
        "{}  {:<35} {}",
        "┃".bright_magenta(),
        "show, view <NAME_OR_ID>".bright_white(),
        "Display a snippet (partial name works)"
    );
    println!(
        "{}  {:<35} {}",
        "┃".bright_magenta(),
        "search, find <QUERY>".bright_white(),
        "Search titles, code, tags, and languages"
    );
    println!(
        "{}  {:<35} {}",
        "┃".bright_magenta(),
        "delete, rm <ID>".bright_white(),
        "Delete a snippet by ID"
    );
    println!(
        "{}  {:<35} {}",
        "┃".bright_magenta(),
        "copy, cp <NAME_OR_ID>".bright_white(),
        "Copy a snippet's code to the clipboard"
    );
    println!(
        "{}  {:<35} {}",
        "┃".bright_magenta(),
        "export [PATH]".bright_white(),
        "Export all snippets to a JSON bundle"
    );
    println!(
        "{}  {:<35} {}",
        "┃".bright_magenta(),
        "import <FILE>".bright_white(),
        "Import snippets from a JSON bundle"
    );
    println!(
        "{}  {:<35} {}",
        "┃".bright_magenta(),
        "help".bright_white(),
        "Display this help message"
    );
}
