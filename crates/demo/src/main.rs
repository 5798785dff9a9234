//! Vitrine Storefront Demo Application

use std::sync::Arc;

use leptos::prelude::*;

use vitrine::{
    cart::Cart,
    catalog::Catalog,
    customer::Customer,
    fixtures::{customers, orders as order_fixtures, products, reviews as review_fixtures},
    orders::Order,
    reviews::Review,
    tabs::Tab,
};

mod cart;
mod catalog;
mod format;
mod header;
mod orders;
mod profile;

use crate::{
    cart::CartDrawer, catalog::CatalogPanel, header::StoreHeader, orders::OrdersPanel,
    profile::ProfilePanel,
};

const PRODUCTS_FIXTURE_YAML: &str = include_str!("../../core/fixtures/products/demo.yml");
const ORDERS_FIXTURE_YAML: &str = include_str!("../../core/fixtures/orders/demo.yml");
const REVIEWS_FIXTURE_YAML: &str = include_str!("../../core/fixtures/reviews/demo.yml");
const CUSTOMERS_FIXTURE_YAML: &str = include_str!("../../core/fixtures/customers/demo.yml");

/// Parsed application fixtures/state used by the UI.
#[derive(Debug)]
struct AppData {
    /// Catalog backing the product grid and favourites.
    catalog: Arc<Catalog<'static>>,

    /// Order history shown on the orders tab.
    orders: Arc<Vec<Order<'static>>>,

    /// Review feed shown under the product grid.
    reviews: Arc<Vec<Review>>,

    /// Signed-in customer shown on the profile tab.
    customer: Arc<Customer>,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let catalog = products::catalog_from_str(PRODUCTS_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load products fixture: {error}"))?;

        let orders = order_fixtures::orders_from_str(ORDERS_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load orders fixture: {error}"))?;

        let reviews = review_fixtures::reviews_from_str(REVIEWS_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load reviews fixture: {error}"))?;

        let customer = customers::customer_from_str(CUSTOMERS_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load customers fixture: {error}"))?;

        Ok(Self {
            catalog: Arc::new(catalog),
            orders: Arc::new(orders),
            reviews: Arc::new(reviews),
            customer: Arc::new(customer),
        })
    }
}

/// Tab bar switching between the three top-level views.
#[component]
fn TabBar(active_tab: RwSignal<Tab>) -> impl IntoView {
    view! {
        <nav class="tab-bar" aria-label="Storefront sections">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if active_tab.get() == tab {
                                    "tab-button tab-button-active"
                                } else {
                                    "tab-button"
                                }
                            }
                            on:click=move |_| active_tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(app_data) => {
            let app_data = Arc::new(app_data);
            let cart = RwSignal::new(Cart::new(app_data.catalog.currency()));
            let active_tab = RwSignal::new(Tab::default());
            let search_query = RwSignal::new(String::new());
            let cart_open = RwSignal::new(false);
            let live_message = RwSignal::new((0_u64, String::new()));
            let action_message = RwSignal::new(None::<String>);

            let tab_data = Arc::clone(&app_data);

            view! {
                <main class="min-h-screen bg-slate-50 text-slate-900">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || live_message.get().1}
                    </p>
                    <StoreHeader
                        cart=cart
                        active_tab=active_tab
                        search_query=search_query
                        cart_open=cart_open
                    />
                    <CartDrawer
                        cart=cart
                        cart_open=cart_open
                        action_message=action_message
                        live_message=live_message
                    />
                    <div class="mx-auto max-w-5xl px-4 py-6">
                        <TabBar active_tab=active_tab />
                        {move || {
                            action_message
                                .get()
                                .map(|message| {
                                    view! {
                                        <p class="action-toast" role="status">{message}</p>
                                    }
                                })
                        }}
                        {move || match active_tab.get() {
                            Tab::Catalog => {
                                view! {
                                    <CatalogPanel
                                        catalog=Arc::clone(&tab_data.catalog)
                                        reviews=Arc::clone(&tab_data.reviews)
                                        search_query=search_query
                                        cart=cart
                                        action_message=action_message
                                        live_message=live_message
                                    />
                                }
                                    .into_any()
                            }
                            Tab::Orders => {
                                view! {
                                    <OrdersPanel orders=Arc::clone(&tab_data.orders) />
                                }
                                    .into_any()
                            }
                            Tab::Profile => {
                                view! {
                                    <ProfilePanel
                                        customer=Arc::clone(&tab_data.customer)
                                        catalog=Arc::clone(&tab_data.catalog)
                                    />
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </main>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                <div class="mx-auto mb-6 max-w-5xl">
                    <h1 class="text-2xl font-semibold tracking-tight">"Vitrine"</h1>
                </div>
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Main client entry point
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}
