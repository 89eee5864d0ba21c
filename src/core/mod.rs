pub mod catalog;
pub mod filter;
pub mod query;
pub mod sample;
pub mod search;
pub mod sort;

pub use crate::domain::model::{Breed, Fact};
pub use crate::domain::ports::{DatasetSource, Entity, Searchable, Slugged};
pub use crate::utils::error::Result;
