mod best;
mod browse;
mod history;
mod init;
mod search;

pub use best::cmd_best_sellers;
pub use browse::cmd_browse;
pub use history::{cmd_history, cmd_history_remove};
pub use init::cmd_init;
pub use search::cmd_search;
