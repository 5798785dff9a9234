//! Store header: brand, search box, cart and profile buttons.

use leptos::prelude::*;

use vitrine::{cart::Cart, tabs::Tab};

/// Sticky store header.
///
/// The search box drives the catalog filter, the cart button toggles the
/// cart drawer, and the profile button jumps straight to the profile tab.
#[component]
pub fn StoreHeader(
    /// Shared cart state, read for the count badge.
    cart: RwSignal<Cart<'static>>,
    /// Active tab, overwritten by the profile button.
    active_tab: RwSignal<Tab>,
    /// Live search query.
    search_query: RwSignal<String>,
    /// Whether the cart drawer is shown.
    cart_open: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <header class="store-header">
            <div class="store-header-inner">
                <p class="store-brand">"Vitrine"</p>

                <div class="store-search">
                    <input
                        type="search"
                        class="store-search-input"
                        placeholder="Search products..."
                        aria-label="Search products"
                        prop:value=move || search_query.get()
                        on:input=move |ev| search_query.set(event_target_value(&ev))
                    />
                </div>

                <div class="store-header-actions">
                    <button
                        type="button"
                        class="icon-button icon-button-header"
                        aria-label=move || {
                            format!("Toggle cart, {} items", cart.with(Cart::count))
                        }
                        on:click=move |_| cart_open.update(|open| *open = !*open)
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class="lucide lucide-shopping-cart-icon lucide-shopping-cart"
                            aria-hidden="true"
                        >
                            <circle cx="8" cy="21" r="1"></circle>
                            <circle cx="19" cy="21" r="1"></circle>
                            <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"></path>
                        </svg>
                        {move || {
                            let count = cart.with(Cart::count);

                            (count > 0).then(|| {
                                view! { <span class="cart-count-badge">{count}</span> }
                            })
                        }}
                    </button>

                    <button
                        type="button"
                        class="icon-button icon-button-header"
                        aria-label="Open profile"
                        on:click=move |_| active_tab.set(Tab::Profile)
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class="lucide lucide-user-icon lucide-user"
                            aria-hidden="true"
                        >
                            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"></path>
                            <circle cx="12" cy="7" r="4"></circle>
                        </svg>
                    </button>
                </div>
            </div>
        </header>
    }
}
