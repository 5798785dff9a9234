//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    customer::Customer,
    fixtures::{FixtureError, StoreFixture},
    orders::{Order, OrderStatus},
    products::{Product, ProductId, ProductKey, Rating},
    reviews::Review,
    summary::{CartSummary, SummaryError},
    tabs::Tab,
};
