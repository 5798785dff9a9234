//! Order Fixtures

use jiff::civil::Date;
use rusty_money::Money;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, products::parse_price},
    orders::{Order, OrderStatus},
};

/// Wrapper for orders in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Orders, newest first
    pub orders: Vec<OrderFixture>,
}

/// Order fixture from YAML
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Order reference
    pub id: String,

    /// Date placed, e.g. `"2024-11-15"`
    pub date: String,

    /// Total paid, e.g. `"899.90 USD"`
    pub total: String,

    /// Fulfilment status
    pub status: OrderStatus,

    /// Number of items in the order
    pub items: u32,
}

impl TryFrom<OrderFixture> for Order<'static> {
    type Error = FixtureError;

    fn try_from(fixture: OrderFixture) -> Result<Self, Self::Error> {
        let placed_on: Date = fixture.date.parse()?;
        let (total_minor, currency) = parse_price(&fixture.total)?;

        Ok(Order {
            id: fixture.id,
            placed_on,
            total: Money::from_minor(total_minor, currency),
            status: fixture.status,
            item_count: fixture.items,
        })
    }
}

/// Parse an order history from orders fixture YAML.
///
/// # Errors
///
/// Returns an error when parsing fails or a date or total is invalid.
pub fn orders_from_str(yaml: &str) -> Result<Vec<Order<'static>>, FixtureError> {
    let fixture: OrdersFixture = serde_norway::from_str(yaml)?;

    fixture.orders.into_iter().map(Order::try_from).collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn orders_from_str_parses_dates_totals_and_statuses() -> TestResult {
        let yaml = r#"
orders:
  - id: "1234567890"
    date: "2024-11-15"
    total: "899.90 USD"
    status: delivered
    items: 1
  - id: "1234567891"
    date: "2024-11-10"
    total: "379.80 USD"
    status: shipping
    items: 2
"#;

        let orders = orders_from_str(yaml)?;

        assert_eq!(orders.len(), 2);

        let first = orders.first().ok_or("missing first order")?;

        assert_eq!(first.id, "1234567890");
        assert_eq!(first.placed_on, date(2024, 11, 15));
        assert_eq!(first.total, Money::from_minor(89_990, USD));
        assert_eq!(first.status, OrderStatus::Delivered);
        assert_eq!(first.item_count, 1);

        Ok(())
    }

    #[test]
    fn orders_from_str_rejects_bad_dates() {
        let yaml = r#"
orders:
  - id: "1"
    date: "November 15th"
    total: "10.00 USD"
    status: processing
    items: 1
"#;

        let result = orders_from_str(yaml);

        assert!(matches!(result, Err(FixtureError::Date(_))));
    }

    #[test]
    fn orders_from_str_rejects_unknown_statuses() {
        let yaml = r#"
orders:
  - id: "1"
    date: "2024-11-15"
    total: "10.00 USD"
    status: cancelled
    items: 1
"#;

        let result = orders_from_str(yaml);

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn orders_from_str_rejects_bad_totals() {
        let yaml = r#"
orders:
  - id: "1"
    date: "2024-11-15"
    total: "free"
    status: delivered
    items: 1
"#;

        let result = orders_from_str(yaml);

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }
}
