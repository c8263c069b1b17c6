use serde::Deserialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::domain::product::{Product, ProductId};

/// Canonical deterministic seed dataset for the catalog contract tests.
///
/// The fixture holds eleven products across four producers, arranged so that
/// one display name is shared between two producers and one producer carries
/// more products than a single search can return.
pub struct SeedCatalog;

impl SeedCatalog {
    /// JSON fixture content for the seed dataset.
    pub const JSON: &str = include_str!("../config/fixtures/catalog_seed.json");

    /// Parse the shipped fixture and load it into a fresh catalog.
    pub fn load() -> Result<Catalog, FixtureError> {
        Self::load_from(Self::JSON)
    }

    /// Load a catalog from fixture JSON, preserving record order.
    pub fn load_from(json: &str) -> Result<Catalog, FixtureError> {
        let records: Vec<SeedRecord> = serde_json::from_str(json)?;

        let mut catalog = Catalog::new();
        for record in records {
            let product = Product {
                id: ProductId(record.id),
                name: record.name,
                producer: record.producer,
            };
            let id = product.id.clone();
            if !catalog.add_new_product(product) {
                return Err(FixtureError::DuplicateId(id.0));
            }
        }
        Ok(catalog)
    }
}

#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: String,
    name: String,
    producer: String,
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id in fixture: {0}")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_fixture_loads_eleven_products() {
        let catalog = SeedCatalog::load().expect("load seed fixture");

        assert_eq!(catalog.len(), 11);
        for id in 1..=11 {
            assert!(catalog.find(&ProductId(id.to_string())).is_some());
        }
    }

    #[test]
    fn fixture_order_is_record_order() {
        let catalog = SeedCatalog::load().expect("load seed fixture");

        // Record order drives truncation, so the fixture must load in the
        // order it is written: id "3" first, id "1" fourth.
        let first = catalog.list_products_by_producer("Some Producer2");
        assert_eq!(first, vec!["Some Product3", "Some Product2"]);
    }

    #[test]
    fn duplicate_id_in_fixture_is_rejected() {
        let json = r#"[
            { "id": "1", "name": "Widget", "producer": "Acme" },
            { "id": "1", "name": "Widget v2", "producer": "Acme" }
        ]"#;

        let error = SeedCatalog::load_from(json).expect_err("duplicate id should fail");
        assert!(matches!(error, FixtureError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn malformed_fixture_fails_to_parse() {
        let error = SeedCatalog::load_from("{ not json").expect_err("parse should fail");
        assert!(matches!(error, FixtureError::Parse(_)));
    }
}
