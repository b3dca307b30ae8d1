use crate::clients::interpark::InterparkClient;
use crate::config::Config;
use crate::services::BookCatalog;

pub async fn cmd_best_sellers(config: &Config) -> anyhow::Result<()> {
    if config.catalog.api_key.is_empty() {
        println!("No catalog API key configured.");
        println!("Set [catalog] api_key in config.toml ('hondana init' creates one).");
        return Ok(());
    }

    let catalog = InterparkClient::new(&config.catalog)?;
    let books = catalog.best_sellers().await?;

    if books.is_empty() {
        println!("No best sellers returned.");
        return Ok(());
    }

    println!("Best Sellers ({} total)", books.len());
    println!("{:-<60}", "");

    for (i, book) in books.iter().enumerate() {
        let snippet: String = book.description.chars().take(60).collect();
        println!("[{}] {}", i + 1, book.title);
        println!("    {} | ID: {}", snippet, book.id);
    }

    Ok(())
}
