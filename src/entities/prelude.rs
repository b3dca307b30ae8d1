pub use super::search_history::Entity as SearchHistory;
