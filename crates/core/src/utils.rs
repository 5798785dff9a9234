//! Utils

use clap::Parser;

/// Arguments for the storefront example
#[derive(Debug, Parser)]
pub struct ExampleStoreArgs {
    /// Fixture set to use for the catalog, orders, reviews and customer
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Base directory holding the fixture files
    #[clap(long, default_value = "crates/core/fixtures")]
    pub fixtures_dir: String,

    /// Search query applied to the catalog before filling the cart
    #[clap(short, long)]
    pub query: Option<String>,

    /// Product id to add one unit of to the cart (repeatable)
    #[clap(short, long)]
    pub add: Vec<u32>,
}
