use crate::config::Config;
use crate::db::Store;

pub async fn cmd_history(config: &Config, limit: usize) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let entries = store.recent_keywords().await?;

    if entries.is_empty() {
        println!("No search history.");
        println!();
        println!("Search with: hondana search \"keyword\"");
        return Ok(());
    }

    let shown = entries.len().min(limit);
    println!("Recent Searches (last {shown}):");
    println!("{:-<60}", "");

    for entry in entries.iter().take(limit) {
        println!("• {}", entry.keyword);
    }

    Ok(())
}

pub async fn cmd_history_remove(config: &Config, keyword: &str) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let removed = store.delete_keyword(keyword).await?;

    if removed == 0 {
        println!("No history entries match '{keyword}'.");
    } else {
        println!("✓ Removed {removed} history entr{} for '{keyword}'", if removed == 1 { "y" } else { "ies" });
    }

    Ok(())
}
