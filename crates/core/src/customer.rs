//! Customer profile

use crate::{
    catalog::Catalog,
    products::{Product, ProductId},
};

/// The signed-in customer shown on the profile tab. Read-only sample data.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Full display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Delivery address
    pub address: String,

    /// Loyalty bonus balance, in points
    pub bonus_points: u32,

    /// Favourite product ids, in display order
    pub favourites: Vec<ProductId>,
}

impl Customer {
    /// Resolve the favourite products against a catalog.
    ///
    /// Ids missing from the catalog are skipped.
    pub fn favourite_products<'c, 'a>(&self, catalog: &'c Catalog<'a>) -> Vec<&'c Product<'a>> {
        self.favourites
            .iter()
            .filter_map(|id| catalog.get(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::products::Rating;

    use super::*;

    fn customer(favourites: Vec<u32>) -> Customer {
        Customer {
            name: "Jordan Ellis".to_string(),
            email: "jordan.ellis@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Sample Street, Springfield".to_string(),
            bonus_points: 1_250,
            favourites: favourites.into_iter().map(ProductId::new).collect(),
        }
    }

    fn test_catalog() -> Result<Catalog<'static>, crate::catalog::CatalogError> {
        let products = [1, 2, 3].map(|id| Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Money::from_minor(1_000, USD),
            old_price: None,
            image: String::new(),
            rating: Rating::new(4.0).unwrap_or_else(|| unreachable!("4.0 is in range")),
            review_count: 0,
        });

        Catalog::with_products(products, USD)
    }

    #[test]
    fn favourites_resolve_in_display_order() -> TestResult {
        let catalog = test_catalog()?;
        let customer = customer(vec![3, 1]);

        let ids: Vec<ProductId> = customer
            .favourite_products(&catalog)
            .iter()
            .map(|product| product.id)
            .collect();

        assert_eq!(ids, [ProductId::new(3), ProductId::new(1)]);

        Ok(())
    }

    #[test]
    fn unknown_favourites_are_skipped() -> TestResult {
        let catalog = test_catalog()?;
        let customer = customer(vec![2, 99]);

        let resolved = customer.favourite_products(&catalog);

        assert_eq!(resolved.len(), 1);

        Ok(())
    }
}
