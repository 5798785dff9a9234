//! Customer Fixtures

use serde::Deserialize;

use crate::{customer::Customer, fixtures::FixtureError, products::ProductId};

/// Wrapper for the customer profile in YAML
#[derive(Debug, Deserialize)]
pub struct CustomersFixture {
    /// The signed-in customer
    pub customer: CustomerFixture,
}

/// Customer fixture from YAML
#[derive(Debug, Deserialize)]
pub struct CustomerFixture {
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
    #[serde(default)]
    pub favourites: Vec<ProductId>,
}

impl From<CustomerFixture> for Customer {
    fn from(fixture: CustomerFixture) -> Self {
        Customer {
            name: fixture.name,
            email: fixture.email,
            phone: fixture.phone,
            address: fixture.address,
            bonus_points: fixture.bonus_points,
            favourites: fixture.favourites,
        }
    }
}

/// Parse the customer profile from customers fixture YAML.
///
/// # Errors
///
/// Returns an error when the YAML does not parse.
pub fn customer_from_str(yaml: &str) -> Result<Customer, FixtureError> {
    let fixture: CustomersFixture = serde_norway::from_str(yaml)?;

    Ok(fixture.customer.into())
}
