pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod io;

pub use catalog::{derive_filter_options, query, CatalogItem, CatalogQuery, Portfolio};
pub use error::{FolioError, Result};
