use std::collections::{HashMap, HashSet};

use crate::domain::product::{Product, ProductId};

/// In-memory product store, iterated in insertion order.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Each search considers at most this many matching products.
    pub const MATCH_LIMIT: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Appends the product unless one with the same id is already stored.
    /// Returns `false` and leaves the catalog unchanged on a duplicate id.
    pub fn add_new_product(&mut self, product: Product) -> bool {
        if self.find(&product.id).is_some() {
            return false;
        }
        self.products.push(product);
        true
    }

    /// Removes the product with the given id. Returns `false` if no such
    /// product exists.
    pub fn delete_product(&mut self, id: &ProductId) -> bool {
        match self.products.iter().position(|product| &product.id == id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Up to [`Self::MATCH_LIMIT`] product names containing the search
    /// string. When several of the considered products share a display name,
    /// each of them is listed as `"<producer> - <name>"` instead of the bare
    /// name.
    pub fn list_products_by_name(&self, search_string: &str) -> HashSet<String> {
        let matches = self.matches(search_string, |product| product.name.as_str());

        let mut by_name: HashMap<&str, Vec<&Product>> = HashMap::new();
        for product in matches {
            by_name.entry(product.name.as_str()).or_default().push(product);
        }

        let mut results = HashSet::new();
        for (name, products) in by_name {
            if products.len() == 1 {
                results.insert(name.to_owned());
            } else {
                results.extend(
                    products
                        .iter()
                        .map(|product| format!("{} - {}", product.producer, product.name)),
                );
            }
        }
        results
    }

    /// Up to [`Self::MATCH_LIMIT`] product names whose producer contains the
    /// search string, ordered by producer ascending. Products sharing a
    /// producer keep their insertion-relative order.
    pub fn list_products_by_producer(&self, search_string: &str) -> Vec<String> {
        let mut matches = self.matches(search_string, |product| product.producer.as_str());
        // Matches are frozen in insertion order before sorting; a producer
        // that sorts earlier but arrives after the cap is never reconsidered.
        matches.sort_by(|a, b| a.producer.cmp(&b.producer));
        matches.into_iter().map(|product| product.name.clone()).collect()
    }

    // An empty needle matches nothing, even though `str::contains("")` is
    // always true.
    fn matches<'a>(
        &'a self,
        search_string: &str,
        field: impl Fn(&'a Product) -> &'a str,
    ) -> Vec<&'a Product> {
        if search_string.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|&product| field(product).contains(search_string))
            .take(Self::MATCH_LIMIT)
            .collect()
    }
}
