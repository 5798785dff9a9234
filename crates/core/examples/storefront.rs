//! Storefront Example
//!
//! Walks the storefront flow end to end: load a fixture set, filter the
//! catalog, fill a cart, and print the cart summary.
//!
//! Use `-f` to load a fixture set by name
//! Use `-q` to filter the catalog by a search query
//! Use `-a` to add one unit of a product id to the cart (repeatable)

use std::io;

use anyhow::Result;
use clap::Parser;

use vitrine::{
    cart::Cart, fixtures::StoreFixture, products::ProductId, summary::CartSummary,
    utils::ExampleStoreArgs,
};

/// Storefront Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ExampleStoreArgs::parse();

    let mut fixture = StoreFixture::with_base_path(&args.fixtures_dir);

    fixture
        .load_products(&args.fixture)?
        .load_orders(&args.fixture)?
        .load_reviews(&args.fixture)?
        .load_customer(&args.fixture)?;

    let catalog = fixture.catalog()?;
    let query = args.query.unwrap_or_default();
    let visible = catalog.search(&query);

    println!(
        "Catalog: {} of {} products match {query:?}",
        visible.len(),
        catalog.len()
    );

    for product in &visible {
        println!("  [{}] {}: {}", product.id, product.name, product.price);
    }

    let mut cart = Cart::new(catalog.currency());

    if args.add.is_empty() {
        // No explicit picks: take one of everything that matched.
        for product in &visible {
            cart.add(product)?;
        }
    } else {
        for id in args.add {
            let id = ProductId::new(id);

            let product = catalog
                .get(id)
                .ok_or_else(|| anyhow::anyhow!("no product with id {id}"))?;

            cart.add(product)?;
        }
    }

    CartSummary::from_cart(&cart)?.write_to(io::stdout().lock())?;

    println!("\nOrders:");

    for order in fixture.orders() {
        println!(
            "  №{} {}: {} ({}, {} items)",
            order.id, order.placed_on, order.total, order.status, order.item_count
        );
    }

    if let Some(customer) = fixture.customer() {
        println!(
            "\nSigned in as {} <{}>, {} bonus points",
            customer.name, customer.email, customer.bonus_points
        );
    }

    Ok(())
}
