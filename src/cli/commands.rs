use std::error::Error;
use std::path::Path;

use colored::Colorize;
use uuid::Uuid;

use crate::clipboard;
use crate::error::StoreError;
use crate::models::{Snippet, SnippetStore, export};

/// Prints a recoverable store error as a transient notice.
fn print_notice(err: &StoreError) {
    println!("{}  {}", "┃".bright_magenta(), err.to_string().bright_red());
}

/// Adds a snippet from raw CLI input
pub fn add_snippet(
    store: &mut SnippetStore,
    title: &str,
    language: Option<&str>,
    code: &str,
    tags_raw: &str,
) -> Result<(), Box<dyn Error>> {
    match store.add(title, language, code, tags_raw) {
        Ok(snippet) => {
            println!(
                "{}  {} {}",
                "┃".bright_magenta(),
                "ADDED".bright_green().bold(),
                snippet.title.bright_white().bold()
            );
            println!(
                "{}  {}: {}",
                "┃".bright_magenta(),
                "ID".bright_black(),
                snippet.id
            );
        }
        Err(err) => print_notice(&err),
    }

    Ok(())
}

/// Lists every stored snippet, newest first
pub fn list_snippets(store: &SnippetStore) -> Result<(), Box<dyn Error>> {
    let snippets = store.snippets();

    if snippets.is_empty() {
        println!(
            "{}  No snippets stored. Add your first with: snipstash add <TITLE> <CODE>",
            "┃".bright_magenta()
        );
        return Ok(());
    }

    println!(
        "{}  {} snippets:",
        "┃".bright_magenta(),
        snippets.len().to_string().bright_yellow()
    );
    println!("{}", "─".repeat(60).bright_magenta());

    for (idx, snippet) in snippets.iter().enumerate() {
        print_snippet_summary(idx, snippet);

        if idx < snippets.len() - 1 {
            println!(
                "{}  {}",
                "┃".bright_magenta(),
                "─".repeat(40).bright_black()
            );
        }
    }

    Ok(())
}

fn print_snippet_summary(idx: usize, snippet: &Snippet) {
    println!(
        "{}  {}. {}",
        "┃".bright_magenta(),
        (idx + 1).to_string().bright_yellow(),
        snippet.title.bright_white().bold()
    );

    if let Some(language) = &snippet.language {
        println!(
            "{}     {}: {}",
            "┃".bright_magenta(),
            "Language".bright_green(),
            language
        );
    }

    if !snippet.tags.is_empty() {
        println!(
            "{}     {}: {}",
            "┃".bright_magenta(),
            "Tags".bright_blue(),
            snippet.tags.join(", ")
        );
    }

    println!(
        "{}     {}: {}",
        "┃".bright_magenta(),
        "Created".bright_cyan(),
        snippet.created_at.format("%Y-%m-%d %H:%M")
    );
    println!(
        "{}     {}: {}",
        "┃".bright_magenta(),
        "ID".bright_black(),
        snippet.id
    );
}

/// Shows the full content of a snippet resolved by name or id
pub fn show_snippet(store: &SnippetStore, name_or_id: &str) -> Result<(), Box<dyn Error>> {
    let Some(snippet) = store.find(name_or_id) else {
        println!(
            "{}  No snippet found matching: {}",
            "┃".bright_magenta(),
            name_or_id
        );
        suggest_snippets(store);
        return Ok(());
    };

    println!(
        "{}  {} {}",
        "┃".bright_magenta(),
        "SNIPPET".bright_green().bold(),
        snippet.title.bold()
    );
    println!("{}", "─".repeat(60).bright_magenta());

    if let Some(language) = &snippet.language {
        println!(
            "{}  {}: {}",
            "┃".bright_magenta(),
            "Language".bright_yellow(),
            language
        );
    }
    if !snippet.tags.is_empty() {
        println!(
            "{}  {}: {}",
            "┃".bright_magenta(),
            "Tags".bright_blue(),
            snippet.tags.join(", ")
        );
    }
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Created".bright_cyan(),
        snippet.created_at.format("%Y-%m-%d %H:%M")
    );
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "ID".bright_black(),
        snippet.id
    );
    println!("{}", "─".repeat(60).bright_magenta());

    for line in snippet.code.lines() {
        println!("{}  {}", "┃".bright_magenta(), line);
    }

    Ok(())
}

/// Lists a few stored titles to help the user pick
fn suggest_snippets(store: &SnippetStore) {
    let snippets = store.snippets();
    if snippets.is_empty() {
        return;
    }

    println!("{}  Available snippets:", "┃".bright_magenta());
    println!("{}", "─".repeat(60).bright_magenta());

    for (idx, snippet) in snippets.iter().enumerate().take(10) {
        println!(
            "{}  {}. {}",
            "┃".bright_magenta(),
            (idx + 1).to_string().yellow(),
            snippet.title.bright_white()
        );
    }

    if snippets.len() > 10 {
        println!(
            "{}  ... and {} more",
            "┃".bright_magenta(),
            snippets.len() - 10
        );
    }
}

/// Searches snippets matching a query string
pub fn search_snippets(store: &SnippetStore, query: &str) -> Result<(), Box<dyn Error>> {
    let results: Vec<&Snippet> = store.search(query).collect();

    println!(
        "{}  {} '{}'",
        "┃".bright_magenta(),
        "SEARCH RESULTS FOR".bold(),
        query.bright_white()
    );

    if results.is_empty() {
        println!(
            "{}  No snippets found matching query: {}",
            "┃".bright_magenta(),
            query
        );
        return Ok(());
    }

    println!(
        "{}  Found {} snippets matching '{}':",
        "┃".bright_magenta(),
        results.len(),
        query
    );
    println!("{}", "─".repeat(60).bright_magenta());

    for (idx, snippet) in results.iter().enumerate() {
        print_snippet_summary(idx, snippet);

        if idx < results.len() - 1 {
            println!(
                "{}  {}",
                "┃".bright_magenta(),
                "─".repeat(40).bright_black()
            );
        }
    }

    Ok(())
}

/// Deletes a snippet by id
pub fn delete_snippet(store: &mut SnippetStore, id: &str) -> Result<(), Box<dyn Error>> {
    let Ok(id) = Uuid::parse_str(id) else {
        println!(
            "{}  Not a valid snippet ID: {}",
            "┃".bright_magenta(),
            id
        );
        println!(
            "{}  Use 'snipstash list' to see snippet IDs",
            "┃".bright_magenta()
        );
        return Ok(());
    };

    match store.delete(id) {
        Ok(true) => println!(
            "{}  {} snippet {}",
            "┃".bright_magenta(),
            "DELETED".bright_red().bold(),
            id
        ),
        Ok(false) => println!(
            "{}  No snippet found with ID: {}",
            "┃".bright_magenta(),
            id
        ),
        Err(err) => print_notice(&err),
    }

    Ok(())
}

/// Copies a snippet's code to the system clipboard
pub fn copy_snippet(store: &SnippetStore, name_or_id: &str) -> Result<(), Box<dyn Error>> {
    let Some(snippet) = store.find(name_or_id) else {
        println!(
            "{}  No snippet found matching: {}",
            "┃".bright_magenta(),
            name_or_id
        );
        return Ok(());
    };

    match clipboard::copy_text(&snippet.code) {
        Ok(()) => println!(
            "{}  {} '{}' to clipboard ({} lines)",
            "┃".bright_magenta(),
            "COPIED".bright_green().bold(),
            snippet.title.bright_white(),
            snippet.line_count()
        ),
        Err(err) => print_notice(&err),
    }

    Ok(())
}

/// Exports the full collection to a JSON bundle
pub fn export_snippets(store: &SnippetStore, path: Option<&str>) -> Result<(), Box<dyn Error>> {
    let filename = export::default_export_filename();
    let path = Path::new(path.unwrap_or(&filename));

    let data = store.export_data();

    match export::write_export_file(&data, path) {
        Ok(()) => println!(
            "{}  {} {} snippets to {}",
            "┃".bright_magenta(),
            "EXPORTED".bright_green().bold(),
            data.snippets.len(),
            path.display().to_string().bright_white()
        ),
        Err(err) => print_notice(&err),
    }

    Ok(())
}

/// Imports a JSON bundle, prepending its snippets to the collection
pub fn import_snippets(store: &mut SnippetStore, path: &str) -> Result<(), Box<dyn Error>> {
    let bundle = match export::read_import_file(Path::new(path)) {
        Ok(bundle) => bundle,
        Err(err) => {
            print_notice(&err);
            return Ok(());
        }
    };

    match store.import_bundle(bundle) {
        Ok(count) => println!(
            "{}  {} {} snippets from {}",
            "┃".bright_magenta(),
            "IMPORTED".bright_green().bold(),
            count,
            path.bright_white()
        ),
        Err(err) => print_notice(&err),
    }

    Ok(())
}
