pub mod catalog;
pub use catalog::{BookCatalog, CatalogError};

pub mod session;
pub use session::{ActiveView, SearchSession};
