use tracing::warn;

use crate::clients::interpark::InterparkClient;
use crate::config::Config;
use crate::db::Store;
use crate::services::BookCatalog;

pub async fn cmd_search(config: &Config, query: &str) -> anyhow::Result<()> {
    if config.catalog.api_key.is_empty() {
        println!("No catalog API key configured.");
        println!("Set [catalog] api_key in config.toml ('hondana init' creates one).");
        return Ok(());
    }

    println!("Searching for: {query}");

    let catalog = InterparkClient::new(&config.catalog)?;
    let store = Store::new(&config.general.database_path).await?;

    // The keyword is recorded whether or not the search succeeds.
    let (searched, recorded) = tokio::join!(catalog.search(query), store.record_keyword(query));
    recorded?;

    let books = match searched {
        Ok(books) => books,
        Err(e) => {
            warn!("Search for '{query}' failed: {e}");
            println!("Search failed: {e}");
            return Ok(());
        }
    };

    if books.is_empty() {
        println!("No books found matching '{query}'");
        return Ok(());
    }

    println!();
    println!("Search Results:");
    println!("{:-<60}", "");

    for book in &books {
        let snippet: String = book.description.chars().take(60).collect();
        println!("• {}", book.title);
        println!("  {} | ID: {}", snippet, book.id);
        println!();
    }

    Ok(())
}
