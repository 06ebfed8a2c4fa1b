//! Catalog layer: the in-memory item store and its query engine.
//!
//! # Modules
//!
//! - [`store`]: command-dispatch item store (add, select, bulk replace)
//! - [`query`]: pure search/type filtering over the store's items
//! - [`seed`]: embedded fixed catalog loaded at initialization

pub mod query;
pub mod seed;
pub mod store;

pub use query::{match_ranges, ItemQuery, TypeFilter};
pub use store::{Catalog, Command};
