//! Cart summary

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    discounts,
};

/// Errors that can occur when building or printing a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Error calculating the cart total.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    Io,
}

/// One printed row of the summary table.
#[derive(Debug, Clone)]
struct SummaryLine<'a> {
    name: String,
    quantity: u32,
    unit_price: Money<'a, Currency>,
    line_total: Money<'a, Currency>,
    savings: Option<Money<'a, Currency>>,
}

/// Point-in-time snapshot of a cart, ready for printing.
#[derive(Debug, Clone)]
pub struct CartSummary<'a> {
    lines: Vec<SummaryLine<'a>>,

    /// Total number of units across all lines.
    count: u32,

    /// Sum of line totals at current prices.
    subtotal: Money<'a, Currency>,

    /// Sum of line totals at prior prices, where products have one.
    full_price_total: Money<'a, Currency>,
}

impl<'a> CartSummary<'a> {
    /// Snapshot the given cart.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if money arithmetic fails.
    pub fn from_cart(cart: &Cart<'a>) -> Result<Self, SummaryError> {
        let currency = cart.currency();
        let mut lines = Vec::with_capacity(cart.len());
        let mut full_price_total = Money::from_minor(0, currency);

        for line in cart.iter() {
            let product = line.product();
            let quantity = line.quantity();

            let savings = product.savings().map(|unit_savings| {
                Money::from_minor(
                    unit_savings
                        .to_minor_units()
                        .saturating_mul(i64::from(quantity)),
                    currency,
                )
            });

            let full_unit_price = product.old_price.as_ref().unwrap_or(&product.price);

            let full_line_minor = full_unit_price
                .to_minor_units()
                .saturating_mul(i64::from(quantity));

            full_price_total = full_price_total.add(Money::from_minor(full_line_minor, currency))?;

            lines.push(SummaryLine {
                name: product.name.clone(),
                quantity,
                unit_price: product.price,
                line_total: line.line_total(),
                savings,
            });
        }

        Ok(CartSummary {
            lines,
            count: cart.count(),
            subtotal: cart.total()?,
            full_price_total,
        })
    }

    /// Sum of line totals at current prices.
    #[must_use]
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Amount saved relative to prior prices.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.full_price_total.sub(self.subtotal)
    }

    /// Savings as a fraction of the full-price total.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings_percent(&self) -> Result<Percentage, MoneyError> {
        let savings_minor = self.savings()?.to_minor_units();
        let full_price_minor = self.full_price_total.to_minor_units();

        if full_price_minor == 0 {
            return Ok(Percentage::from(0.0));
        }

        let savings_dec = Decimal::from_i64(savings_minor).unwrap_or(Decimal::ZERO);
        let full_price_dec = Decimal::from_i64(full_price_minor).unwrap_or(Decimal::ZERO);

        Ok(Percentage::from(savings_dec / full_price_dec))
    }

    /// Prints the summary table and totals block.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if the summary cannot be printed.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Qty", "Unit Price", "Line Total", "Savings"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                line.quantity.to_string(),
                format!("{}", line.unit_price),
                format!("{}", line.line_total),
                line.savings
                    .map_or_else(String::new, |savings| format!("-{savings}")),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..6), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| SummaryError::Io)?;

        self.write_totals(&mut out)
    }

    fn write_totals(&self, out: &mut impl io::Write) -> Result<(), SummaryError> {
        let savings = self.savings()?;
        let savings_points = discounts::percent_points(self.savings_percent()?);

        let items_val = self.count.to_string();
        let savings_val = format!("({savings_points}%) {savings}");
        let total_val = format!("{}", self.subtotal);

        let width = items_val
            .len()
            .max(savings_val.len())
            .max(total_val.len());

        writeln!(out, " {:>8} {items_val:>width$}", "Items:").map_err(|_err| SummaryError::Io)?;
        writeln!(out, " {:>8} {savings_val:>width$}", "Savings:")
            .map_err(|_err| SummaryError::Io)?;
        writeln!(out, " {:>8} \x1b[1m{total_val:>width$}\x1b[0m", "Total:")
            .map_err(|_err| SummaryError::Io)?;

        Ok(())
    }
}
