//! Store-level tests for the search-history table.

use hondana::db::Store;

async fn temp_store(tag: &str) -> Store {
    let path = std::env::temp_dir().join(format!(
        "hondana-history-test-{}-{tag}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    Store::new(&format!("sqlite:{}", path.display()))
        .await
        .unwrap()
}

#[tokio::test]
async fn insert_then_list_yields_most_recent_first() {
    let store = temp_store("recent-first").await;

    store.record_keyword("alpha").await.unwrap();
    store.record_keyword("beta").await.unwrap();
    store.record_keyword("gamma").await.unwrap();

    let entries = store.recent_keywords().await.unwrap();
    let keywords: Vec<&str> = entries.iter().map(|e| e.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["gamma", "beta", "alpha"]);
}

#[tokio::test]
async fn insert_assigns_increasing_ids() {
    let store = temp_store("ids").await;

    let first = store.record_keyword("one").await.unwrap();
    let second = store.record_keyword("two").await.unwrap();

    assert!(second.id > first.id);
    assert_eq!(first.keyword, "one");
}

#[tokio::test]
async fn duplicates_get_distinct_rows() {
    let store = temp_store("duplicates").await;

    store.record_keyword("same").await.unwrap();
    store.record_keyword("same").await.unwrap();

    let entries = store.recent_keywords().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_ne!(entries[0].id, entries[1].id);
}

#[tokio::test]
async fn delete_removes_all_exact_matches() {
    let store = temp_store("delete-all").await;

    store.record_keyword("drop").await.unwrap();
    store.record_keyword("keep").await.unwrap();
    store.record_keyword("drop").await.unwrap();

    let removed = store.delete_keyword("drop").await.unwrap();
    assert_eq!(removed, 2);

    let entries = store.recent_keywords().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries.iter().all(|e| e.keyword != "drop"));
}

#[tokio::test]
async fn delete_is_exact_match_only() {
    let store = temp_store("exact").await;

    store.record_keyword("rust").await.unwrap();
    store.record_keyword("rustacean").await.unwrap();

    let removed = store.delete_keyword("rust").await.unwrap();
    assert_eq!(removed, 1);

    let entries = store.recent_keywords().await.unwrap();
    assert_eq!(entries[0].keyword, "rustacean");
}

#[tokio::test]
async fn delete_missing_keyword_removes_nothing() {
    let store = temp_store("missing").await;

    store.record_keyword("present").await.unwrap();

    let removed = store.delete_keyword("absent").await.unwrap();
    assert_eq!(removed, 0);
    assert_eq!(store.recent_keywords().await.unwrap().len(), 1);
}

#[tokio::test]
async fn fresh_store_has_empty_history() {
    let store = temp_store("empty").await;

    store.ping().await.unwrap();
    assert!(store.recent_keywords().await.unwrap().is_empty());
}
