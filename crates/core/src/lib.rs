#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod time;

pub use catalog::{CatalogError, WordCatalog, CHOICE_COUNT};
pub use time::Clock;
