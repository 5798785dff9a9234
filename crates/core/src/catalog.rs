//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::products::{Product, ProductId, ProductKey};

/// Errors related to catalog construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product with this id is already present.
    #[error("Product {0} is already in the catalog")]
    DuplicateProduct(ProductId),

    /// A product's currency differs from the catalog currency (id, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// The full, static set of purchasable products.
///
/// Products keep their insertion order for display, with an id index for
/// cart and favourite lookups. All prices share one currency.
#[derive(Debug)]
pub struct Catalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,
    by_id: FxHashMap<ProductId, ProductKey>,
    order: Vec<ProductKey>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create a new empty catalog priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            products: SlotMap::with_key(),
            by_id: FxHashMap::default(),
            order: Vec::new(),
            currency,
        }
    }

    /// Create a catalog from a product collection.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on duplicate product ids or a currency
    /// mismatch.
    pub fn with_products(
        products: impl IntoIterator<Item = Product<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new(currency);

        for product in products {
            catalog.insert(product)?;
        }

        Ok(catalog)
    }

    /// Add a product to the end of the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the id is already present or the price
    /// currency differs from the catalog currency.
    pub fn insert(&mut self, product: Product<'a>) -> Result<ProductKey, CatalogError> {
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if self.by_id.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        let id = product.id;
        let key = self.products.insert(product);

        self.by_id.insert(id, key);
        self.order.push(key);

        Ok(key)
    }

    /// Look up a product by its id.
    pub fn get(&self, id: ProductId) -> Option<&Product<'a>> {
        self.by_id.get(&id).and_then(|key| self.products.get(*key))
    }

    /// Iterate over all products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product<'a>> {
        self.order.iter().filter_map(|key| self.products.get(*key))
    }

    /// Products whose name contains `query`, case-insensitively, in
    /// insertion order. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product<'a>> {
        let needle = query.to_lowercase();

        self.products()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get the currency all products are priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
