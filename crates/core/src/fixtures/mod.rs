//! Fixtures
//!
//! The storefront has no backend; its catalog, order history, review feed,
//! and customer profile come from YAML fixture files loaded once at startup.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    customer::Customer,
    orders::Order,
    products::ProductId,
    reviews::Review,
};

pub mod customers;
pub mod orders;
pub mod products;
pub mod reviews;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product rating outside the 0–5 scale
    #[error("Invalid rating {rating} for product {product}")]
    InvalidRating {
        /// Product carrying the rating
        product: ProductId,
        /// The offending value
        rating: f32,
    },

    /// Review rating outside the 0–5 scale
    #[error("Invalid rating {rating} on review by {author}")]
    InvalidReviewRating {
        /// Review author
        author: String,
        /// The offending value
        rating: u8,
    },

    /// Invalid date string
    #[error("Invalid date: {0}")]
    Date(#[from] jiff::Error),

    /// Currency mismatch between fixture entries
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// A review references a product missing from the catalog
    #[error("Review by {author} references unknown product {product}")]
    UnknownReviewProduct {
        /// Review author
        author: String,
        /// The unknown product id
        product: ProductId,
    },

    /// A favourite references a product missing from the catalog
    #[error("Favourite references unknown product {0}")]
    UnknownFavourite(ProductId),

    /// No products loaded yet
    #[error("No products loaded; catalog unknown")]
    NoProducts,

    /// Catalog construction error
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Storefront fixture set: catalog, orders, reviews, and customer profile.
#[derive(Debug)]
pub struct StoreFixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Catalog built from the products fixture
    catalog: Option<Catalog<'static>>,

    /// Order history
    orders: Vec<Order<'static>>,

    /// Review feed
    reviews: Vec<Review>,

    /// Signed-in customer
    customer: Option<Customer>,
}

impl StoreFixture {
    /// Create a new empty fixture set with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture set with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: None,
            orders: Vec::new(),
            reviews: Vec::new(),
            customer: None,
        }
    }

    fn read(&self, category: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));

        Ok(fs::read_to_string(file_path)?)
    }

    /// Load the catalog from a products YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the catalog is invalid.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let yaml = self.read("products", name)?;

        self.catalog = Some(products::catalog_from_str(&yaml)?);

        Ok(self)
    }

    /// Load the order history from an orders YAML fixture file
    ///
    /// Order totals must use the catalog currency when a catalog is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or priced in a
    /// different currency than the catalog.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let yaml = self.read("orders", name)?;
        let orders = orders::orders_from_str(&yaml)?;

        if let Some(catalog) = &self.catalog {
            for order in &orders {
                let order_currency = order.total.currency();

                if order_currency != catalog.currency() {
                    return Err(FixtureError::CurrencyMismatch(
                        catalog.currency().iso_alpha_code.to_string(),
                        order_currency.iso_alpha_code.to_string(),
                    ));
                }
            }
        }

        self.orders = orders;

        Ok(self)
    }

    /// Load the review feed from a reviews YAML fixture file
    ///
    /// Every review must reference a product in the loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, no catalog is
    /// loaded, or a review references an unknown product.
    pub fn load_reviews(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let yaml = self.read("reviews", name)?;
        let reviews = reviews::reviews_from_str(&yaml)?;

        let catalog = self.catalog.as_ref().ok_or(FixtureError::NoProducts)?;

        for review in &reviews {
            if catalog.get(review.product).is_none() {
                return Err(FixtureError::UnknownReviewProduct {
                    author: review.author.clone(),
                    product: review.product,
                });
            }
        }

        self.reviews = reviews;

        Ok(self)
    }

    /// Load the customer profile from a customers YAML fixture file
    ///
    /// Every favourite must reference a product in the loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, no catalog is
    /// loaded, or a favourite references an unknown product.
    pub fn load_customer(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let yaml = self.read("customers", name)?;
        let customer = customers::customer_from_str(&yaml)?;

        let catalog = self.catalog.as_ref().ok_or(FixtureError::NoProducts)?;

        for favourite in &customer.favourites {
            if catalog.get(*favourite).is_none() {
                return Err(FixtureError::UnknownFavourite(*favourite));
            }
        }

        self.customer = Some(customer);

        Ok(self)
    }

    /// Load a complete fixture set (products, orders, reviews, and customer
    /// with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_products(name)?
            .load_orders(name)?
            .load_reviews(name)?
            .load_customer(name)?;

        Ok(fixture)
    }

    /// Get the loaded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn catalog(&self) -> Result<&Catalog<'static>, FixtureError> {
        self.catalog.as_ref().ok_or(FixtureError::NoProducts)
    }

    /// Get the loaded order history
    pub fn orders(&self) -> &[Order<'static>] {
        &self.orders
    }

    /// Get the loaded review feed
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Get the loaded customer profile
    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Get the catalog currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        Ok(self.catalog()?.currency())
    }
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    fn write_fixture(base: &Path, category: &str, name: &str, contents: &str) -> TestResult {
        let dir = base.join(category);

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    const PRODUCTS_YAML: &str = r#"
products:
  - id: 1
    name: "Desk Lamp"
    price: "25.00 USD"
    image: ""
    rating: 4.0
    reviews: 2
  - id: 2
    name: "Mouse Mat"
    price: "9.00 USD"
    image: ""
    rating: 3.5
    reviews: 5
"#;

    #[test]
    fn from_set_loads_the_demo_store() -> TestResult {
        let fixture = StoreFixture::from_set("demo")?;

        let catalog = fixture.catalog()?;

        assert_eq!(catalog.len(), 6);
        assert_eq!(fixture.orders().len(), 3);
        assert_eq!(fixture.reviews().len(), 4);
        assert!(fixture.customer().is_some());
        assert_eq!(fixture.currency()?, USD);

        Ok(())
    }

    #[test]
    fn catalog_before_loading_products_errors() {
        let fixture = StoreFixture::new();

        assert!(matches!(fixture.catalog(), Err(FixtureError::NoProducts)));
        assert!(matches!(fixture.currency(), Err(FixtureError::NoProducts)));
    }

    #[test]
    fn missing_fixture_file_is_an_io_error() {
        let mut fixture = StoreFixture::new();

        let result = fixture.load_products("nonexistent");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn load_reviews_requires_a_catalog() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(
            dir.path(),
            "reviews",
            "set",
            r#"
reviews:
  - author: "A."
    initials: "A"
    rating: 4
    date: "2024-11-15"
    text: "!"
    product: 1
"#,
        )?;

        let mut fixture = StoreFixture::with_base_path(dir.path());

        let result = fixture.load_reviews("set");

        assert!(matches!(result, Err(FixtureError::NoProducts)));

        Ok(())
    }

    #[test]
    fn load_reviews_rejects_unknown_product_references() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(dir.path(), "products", "set", PRODUCTS_YAML)?;
        write_fixture(
            dir.path(),
            "reviews",
            "set",
            r#"
reviews:
  - author: "A."
    initials: "A"
    rating: 4
    date: "2024-11-15"
    text: "!"
    product: 42
"#,
        )?;

        let mut fixture = StoreFixture::with_base_path(dir.path());

        fixture.load_products("set")?;

        let result = fixture.load_reviews("set");

        assert!(matches!(
            result,
            Err(FixtureError::UnknownReviewProduct { .. })
        ));

        Ok(())
    }

    #[test]
    fn load_orders_rejects_a_currency_mismatch_with_the_catalog() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(dir.path(), "products", "set", PRODUCTS_YAML)?;
        write_fixture(
            dir.path(),
            "orders",
            "set",
            r#"
orders:
  - id: "1"
    date: "2024-11-15"
    total: "10.00 GBP"
    status: delivered
    items: 1
"#,
        )?;

        let mut fixture = StoreFixture::with_base_path(dir.path());

        fixture.load_products("set")?;

        let result = fixture.load_orders("set");

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));

        Ok(())
    }

    #[test]
    fn load_customer_rejects_unknown_favourites() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(dir.path(), "products", "set", PRODUCTS_YAML)?;
        write_fixture(
            dir.path(),
            "customers",
            "set",
            r#"
customer:
  name: "Jordan Ellis"
  email: "jordan.ellis@example.com"
  phone: "+1 (555) 123-4567"
  address: "123 Sample Street, Springfield"
  bonus_points: 10
  favourites: [1, 42]
"#,
        )?;

        let mut fixture = StoreFixture::with_base_path(dir.path());

        fixture.load_products("set")?;

        let result = fixture.load_customer("set");

        assert!(matches!(
            result,
            Err(FixtureError::UnknownFavourite(id)) if id == ProductId::new(42)
        ));

        Ok(())
    }

    #[test]
    fn loaders_chain_on_a_custom_base_path() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_fixture(dir.path(), "products", "set", PRODUCTS_YAML)?;
        write_fixture(
            dir.path(),
            "orders",
            "set",
            r#"
orders:
  - id: "1"
    date: "2024-11-15"
    total: "25.00 USD"
    status: processing
    items: 1
"#,
        )?;
        write_fixture(dir.path(), "reviews", "set", "reviews: []\n")?;
        write_fixture(
            dir.path(),
            "customers",
            "set",
            r#"
customer:
  name: "Jordan Ellis"
  email: "jordan.ellis@example.com"
  phone: "+1 (555) 123-4567"
  address: "123 Sample Street, Springfield"
  bonus_points: 10
  favourites: [2]
"#,
        )?;

        let mut fixture = StoreFixture::with_base_path(dir.path());

        fixture
            .load_products("set")?
            .load_orders("set")?
            .load_reviews("set")?
            .load_customer("set")?;

        assert_eq!(fixture.catalog()?.len(), 2);
        assert_eq!(fixture.orders().len(), 1);
        assert!(fixture.reviews().is_empty());
        assert!(fixture.customer().is_some());

        Ok(())
    }

    #[test]
    fn default_matches_new() {
        let fixture = StoreFixture::default();

        assert_eq!(fixture.base_path, PathBuf::from("./fixtures"));
        assert!(fixture.orders.is_empty());
        assert!(fixture.reviews.is_empty());
        assert!(fixture.customer.is_none());
    }
}
