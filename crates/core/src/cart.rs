//! Cart

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Errors related to cart mutation or totals.
#[derive(Debug, Error)]
pub enum CartError {
    /// A product's currency differs from the cart currency (id, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// One entry in the cart: a product and the quantity of it selected.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    product: Product<'a>,
    quantity: u32,
}

impl<'a> CartLine<'a> {
    /// The product this line holds.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Selected quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> Money<'a, Currency> {
        let minor = self
            .product
            .price
            .to_minor_units()
            .saturating_mul(i64::from(self.quantity));

        Money::from_minor(minor, self.product.price.currency())
    }
}

/// Shopping cart holding at most one line per product id.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    lines: SmallVec<[CartLine<'a>; 10]>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create a new empty cart in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: SmallVec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the product's id has its quantity incremented;
    /// otherwise a new line with quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the product's currency differs from the
    /// cart currency.
    pub fn add(&mut self, product: &Product<'a>) -> Result<(), CartError> {
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                product.id,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }

        Ok(())
    }

    /// Delete the line for a product id. No-op when absent.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
    }

    /// Overwrite the quantity on the line for a product id.
    ///
    /// A quantity of 0 removes the line. No-op when no line matches.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }

        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The line for a product id, if present.
    pub fn line(&self, id: ProductId) -> Option<&CartLine<'a>> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine<'a>> {
        self.lines.iter_mut().find(|line| line.product.id == id)
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Sum of line totals, recomputed from the current line set.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if money arithmetic fails.
    pub fn total(&self) -> Result<Money<'a, Currency>, CartError> {
        self.lines
            .iter()
            .try_fold(Money::from_minor(0, self.currency), |sum, line| {
                sum.add(line.line_total())
            })
            .map_err(CartError::from)
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
