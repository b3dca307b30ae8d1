use std::io::Write;
use std::sync::Arc;

use crate::clients::interpark::InterparkClient;
use crate::config::Config;
use crate::db::{HistoryEntry, Store};
use crate::models::book::Book;
use crate::services::{ActiveView, SearchSession};

/// Interactive prompt loop that drives a [`SearchSession`].
///
/// Best sellers are loaded on entry. The prompt accepts a keyword to search,
/// a row number to open (detail view, or re-run a history entry), `h`/empty
/// for history, `rm <n>` to delete a history entry, `b` to reload best
/// sellers, and `q` to quit.
pub async fn cmd_browse(config: &Config) -> anyhow::Result<()> {
    if config.catalog.api_key.is_empty() {
        println!("No catalog API key configured.");
        println!("Set [catalog] api_key in config.toml ('hondana init' creates one).");
        return Ok(());
    }

    let catalog = Arc::new(InterparkClient::new(&config.catalog)?);
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let mut session = SearchSession::new(catalog, store);

    session.load_best_sellers().await;
    render(&session);

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "q" | "quit" => break,

            "" | "h" | "history" => {
                session.focus_input().await;
                render(&session);
            }

            "b" | "best" => {
                session.load_best_sellers().await;
                render(&session);
            }

            _ => {
                if let Some(rest) = input.strip_prefix("rm ") {
                    handle_remove(&mut session, rest.trim()).await;
                    render(&session);
                } else if let Ok(n) = input.parse::<usize>() {
                    handle_selection(&mut session, n).await;
                } else {
                    session.submit(input).await;
                    render(&session);
                }
            }
        }
    }

    Ok(())
}

async fn handle_remove(session: &mut SearchSession, target: &str) {
    if session.view() != ActiveView::History {
        println!("Open the history view first ('h').");
        return;
    }

    // `rm 2` deletes by row number, `rm frieren` by keyword.
    let keyword = if let Ok(n) = target.parse::<usize>() {
        match session.history().get(n.wrapping_sub(1)) {
            Some(entry) => entry.keyword.clone(),
            None => {
                println!("No history entry {n}.");
                return;
            }
        }
    } else {
        target.to_string()
    };

    session.delete_history(&keyword).await;
}

async fn handle_selection(session: &mut SearchSession, n: usize) {
    match session.view() {
        ActiveView::Results => match session.results().get(n.wrapping_sub(1)) {
            Some(book) => render_detail(book),
            None => println!("No result {n}."),
        },
        ActiveView::History => {
            let keyword = session
                .history()
                .get(n.wrapping_sub(1))
                .map(|entry| entry.keyword.clone());
            match keyword {
                Some(keyword) => {
                    session.submit(&keyword).await;
                    render(session);
                }
                None => println!("No history entry {n}."),
            }
        }
    }
}

fn render(session: &SearchSession) {
    match session.view() {
        ActiveView::Results => render_results(session.results()),
        ActiveView::History => render_history(session.history()),
    }
}

fn render_results(books: &[Book]) {
    if books.is_empty() {
        println!("No books to show.");
        println!("Enter a keyword to search, or 'q' to quit.");
        return;
    }

    println!("Books ({} total)", books.len());
    println!("{:-<60}", "");

    for (i, book) in books.iter().enumerate() {
        let snippet: String = book.description.chars().take(60).collect();
        println!("[{}] {}", i + 1, book.title);
        println!("    {} | ID: {}", snippet, book.id);
    }

    println!();
    println!("Keyword to search | number for details | 'h' history | 'b' best sellers | 'q' quit");
}

fn render_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("No search history yet.");
        println!("Enter a keyword to search.");
        return;
    }

    println!("Recent Searches ({} total)", entries.len());
    println!("{:-<60}", "");

    for (i, entry) in entries.iter().enumerate() {
        println!("[{}] {}", i + 1, entry.keyword);
    }

    println!();
    println!("Number to search again | 'rm <n>' to delete | 'b' best sellers | 'q' quit");
}

fn render_detail(book: &Book) {
    println!("Book Info");
    println!("{:-<60}", "");
    println!("Title:       {}", book.title);
    println!("ID:          {}", book.id);
    println!("Cover:       {}", book.cover_url);
    println!("Description: {}", book.description);
}
