//! Products

use std::{fmt, ops::Deref};

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use slotmap::new_key_type;

use crate::discounts;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Stable numeric product identifier from the catalog data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a new product id.
    #[must_use]
    pub fn new(value: u32) -> Self {
        ProductId(value)
    }
}

impl Deref for ProductId {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating on the 0–5 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating(f32);

impl Rating {
    /// Creates a rating, rejecting values outside the 0–5 scale.
    pub fn new(value: f32) -> Option<Self> {
        (value.is_finite() && (0.0..=5.0).contains(&value)).then_some(Rating(value))
    }

    /// The raw rating value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Number of fully-filled stars when rendering a five-star row.
    #[must_use]
    pub fn full_stars(self) -> u8 {
        (0u8..=5).rev().find(|stars| f32::from(*stars) <= self.0).unwrap_or(0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Unique product id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Current price
    pub price: Money<'a, Currency>,

    /// Price before the current discount, when one applies
    pub old_price: Option<Money<'a, Currency>>,

    /// Image URL
    pub image: String,

    /// Aggregate star rating
    pub rating: Rating,

    /// Number of reviews behind the rating
    pub review_count: u32,
}

impl<'a> Product<'a> {
    /// Amount saved relative to the prior price.
    ///
    /// `None` when there is no prior price. Catalog loading keeps every price
    /// in one currency, so the subtraction cannot mismatch for loaded data;
    /// a mismatch constructed by hand also collapses to `None`.
    pub fn savings(&self) -> Option<Money<'a, Currency>> {
        let old_price = self.old_price.as_ref()?;

        discounts::savings(&self.price, old_price).ok()
    }

    /// Discount badge percentage derived from the prior price.
    ///
    /// Rounded to whole percent points, midpoint away from zero. `None` when
    /// there is no prior price.
    pub fn discount_percent(&self) -> Option<u8> {
        let old_price = self.old_price.as_ref()?;

        discounts::whole_percent_points(discounts::percent_off(&self.price, old_price))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    fn product(price_minor: i64, old_price_minor: Option<i64>) -> Product<'static> {
        Product {
            id: ProductId::new(1),
            name: "Galaxy Pro Max Smartphone".to_string(),
            price: Money::from_minor(price_minor, USD),
            old_price: old_price_minor.map(|minor| Money::from_minor(minor, USD)),
            image: "https://images.example.dev/galaxy.jpg".to_string(),
            rating: Rating::new(4.8).unwrap_or(Rating(0.0)),
            review_count: 342,
        }
    }

    #[test]
    fn product_id_derefs_to_u32() {
        let id = ProductId::new(42);

        assert_eq!(*id, 42);
    }

    #[test]
    fn rating_rejects_out_of_range_values() {
        assert!(Rating::new(-0.1).is_none());
        assert!(Rating::new(5.1).is_none());
        assert!(Rating::new(f32::NAN).is_none());
        assert!(Rating::new(0.0).is_some());
        assert!(Rating::new(5.0).is_some());
    }

    #[test]
    fn rating_full_stars_floors_the_value() {
        let cases = [(4.8, 4), (4.0, 4), (0.4, 0), (5.0, 5)];

        for (value, expected) in cases {
            let rating = Rating::new(value);

            assert_eq!(
                rating.map(Rating::full_stars),
                Some(expected),
                "rating {value} should fill {expected} stars"
            );
        }
    }

    #[test]
    fn savings_is_old_price_minus_price() {
        let product = product(89_990, Some(109_990));

        assert_eq!(product.savings(), Some(Money::from_minor(20_000, USD)));
    }

    #[test]
    fn savings_is_none_without_old_price() {
        let product = product(24_990, None);

        assert_eq!(product.savings(), None);
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn discount_percent_matches_advertised_badges() {
        // Badge values for the sample catalog's discounted products.
        let cases = [
            (89_990, 109_990, 18),
            (12_990, 15_990, 19),
            (45_990, 54_990, 16),
            (6_990, 8_990, 22),
        ];

        for (price, old_price, expected) in cases {
            let product = product(price, Some(old_price));

            assert_eq!(
                product.discount_percent(),
                Some(expected),
                "{price}/{old_price} should badge as -{expected}%"
            );
        }
    }
}
