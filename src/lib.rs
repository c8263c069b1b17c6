pub mod catalog;
pub mod domain;
pub mod fixtures;

pub use catalog::Catalog;
pub use domain::product::{Product, ProductId};
pub use fixtures::{FixtureError, SeedCatalog};
