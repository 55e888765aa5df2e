//! Vocabulary word catalog

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{Catalog, CatalogError};
