//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso};
use serde::Deserialize;

use crate::{
    catalog::Catalog,
    fixtures::FixtureError,
    products::{Product, ProductId, Rating},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products in catalog display order
    pub products: Vec<ProductFixture>,
}

/// Product fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Unique product id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Current price, e.g. `"899.90 USD"`
    pub price: String,

    /// Price before the current discount, when one applies
    #[serde(default)]
    pub old_price: Option<String>,

    /// Image URL
    pub image: String,

    /// Aggregate star rating, 0–5
    pub rating: f32,

    /// Number of reviews behind the rating
    pub reviews: u32,
}

/// Parse a `"899.90 USD"` style price into minor units and an ISO currency.
///
/// # Errors
///
/// Returns an error if the amount does not parse or the currency code is
/// unknown.
pub fn parse_price(input: &str) -> Result<(i64, &'static iso::Currency), FixtureError> {
    let (amount, code) = input
        .split_once(' ')
        .ok_or_else(|| FixtureError::InvalidPrice(input.to_string()))?;

    let currency =
        iso::find(code.trim()).ok_or_else(|| FixtureError::UnknownCurrency(code.to_string()))?;

    let amount: Decimal = amount
        .trim()
        .parse()
        .map_err(|_err| FixtureError::InvalidPrice(input.to_string()))?;

    let minor = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(input.to_string()))?;

    Ok((minor, currency))
}

impl TryFrom<ProductFixture> for Product<'static> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (price_minor, currency) = parse_price(&fixture.price)?;

        let old_price = fixture
            .old_price
            .as_deref()
            .map(parse_price)
            .transpose()?
            .map(|(old_minor, old_currency)| {
                if old_currency == currency {
                    Ok(Money::from_minor(old_minor, old_currency))
                } else {
                    Err(FixtureError::CurrencyMismatch(
                        currency.iso_alpha_code.to_string(),
                        old_currency.iso_alpha_code.to_string(),
                    ))
                }
            })
            .transpose()?;

        let rating = Rating::new(fixture.rating).ok_or(FixtureError::InvalidRating {
            product: fixture.id,
            rating: fixture.rating,
        })?;

        Ok(Product {
            id: fixture.id,
            name: fixture.name,
            price: Money::from_minor(price_minor, currency),
            old_price,
            image: fixture.image,
            rating,
            review_count: fixture.reviews,
        })
    }
}

/// Build a catalog from products fixture YAML.
///
/// The catalog currency is taken from the first product; later products must
/// match it.
///
/// # Errors
///
/// Returns an error when parsing fails, prices or ratings are invalid,
/// currencies are inconsistent, ids collide, or no products are present.
pub fn catalog_from_str(yaml: &str) -> Result<Catalog<'static>, FixtureError> {
    let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

    let mut products = Vec::with_capacity(fixture.products.len());

    for product_fixture in fixture.products {
        products.push(Product::try_from(product_fixture)?);
    }

    let currency = products
        .first()
        .map(|product| product.price.currency())
        .ok_or(FixtureError::NoProducts)?;

    Ok(Catalog::with_products(products, currency)?)
}
