//! Orders

use std::fmt;

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// Fulfilment status of a past order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// The order has been delivered.
    Delivered,

    /// The order is on its way.
    Shipping,

    /// The order is still being processed.
    Processing,
}

impl OrderStatus {
    /// Display label for a status badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Shipping => "Shipping",
            OrderStatus::Processing => "Processing",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A past order. Read-only history data.
#[derive(Debug, Clone, PartialEq)]
pub struct Order<'a> {
    /// Order reference
    pub id: String,

    /// Date the order was placed
    pub placed_on: Date,

    /// Total amount paid
    pub total: Money<'a, Currency>,

    /// Current fulfilment status
    pub status: OrderStatus,

    /// Number of items in the order
    pub item_count: u32,
}
