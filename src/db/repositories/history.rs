use crate::entities::{prelude::*, search_history};
use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;

/// Repository for search-history operations
pub struct HistoryRepository {
    conn: DatabaseConnection,
}

impl HistoryRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: search_history::Model) -> HistoryEntry {
        HistoryEntry {
            id: m.id,
            keyword: m.keyword,
        }
    }

    /// Inserts a keyword. Duplicates are allowed; every submission gets its own row.
    pub async fn insert(&self, keyword: &str) -> Result<HistoryEntry> {
        let active_model = search_history::ActiveModel {
            keyword: Set(keyword.to_string()),
            ..Default::default()
        };

        let res = SearchHistory::insert(active_model).exec(&self.conn).await?;
        debug!("Recorded search keyword: {}", keyword);

        Ok(HistoryEntry {
            id: res.last_insert_id,
            keyword: keyword.to_string(),
        })
    }

    /// Most-recent-first: descending id is reverse insertion order.
    pub async fn list_recent(&self) -> Result<Vec<HistoryEntry>> {
        let rows = SearchHistory::find()
            .order_by_desc(search_history::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Removes every row whose keyword matches exactly. Returns rows removed.
    pub async fn delete_by_keyword(&self, keyword: &str) -> Result<u64> {
        let result = SearchHistory::delete_many()
            .filter(search_history::Column::Keyword.eq(keyword))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: i32,
    pub keyword: String,
}
