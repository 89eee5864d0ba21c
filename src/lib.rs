pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::CatalogConfig;

pub use adapters::dataset::{EmbeddedDataset, FileDataset};
pub use core::catalog::Catalog;
pub use core::filter::{BreedFilter, FactFilter};
pub use core::query::{BreedQuery, FactQuery};
pub use core::sort::{BreedSort, FactSort};
pub use utils::error::{CatalogError, Result};
