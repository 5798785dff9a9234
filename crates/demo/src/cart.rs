//! Cart drawer: line items with quantity controls and totals.

use leptos::prelude::*;

use vitrine::{
    cart::{Cart, CartLine},
    products::{Product, ProductId},
};

use crate::{
    announce,
    format::{format_price, item_count_label},
};

#[component]
fn DecreaseLineButton(
    id: ProductId,
    quantity: u32,
    item_name: String,
    cart: RwSignal<Cart<'static>>,
    action_message: RwSignal<Option<String>>,
) -> impl IntoView {
    let decrease_label = format!("Remove one {item_name} from cart");

    view! {
        <button
            type="button"
            class="icon-button icon-button-secondary icon-button-compact"
            aria-label=decrease_label
            on:click=move |_| {
                // Quantity 1 drops to 0, which removes the line.
                cart.update(|cart| cart.set_quantity(id, quantity.saturating_sub(1)));
                action_message.set(Some(format!("Removed one {item_name} from cart.")));
            }
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
                class="lucide lucide-minus-icon lucide-minus"
                aria-hidden="true"
            >
                <path d="M5 12h14"></path>
            </svg>
        </button>
    }
}

#[component]
fn IncreaseLineButton(
    product: Product<'static>,
    item_name: String,
    unit_price: String,
    cart: RwSignal<Cart<'static>>,
    action_message: RwSignal<Option<String>>,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let increase_label = format!("Add another {item_name} ({unit_price}) to cart");

    view! {
        <button
            type="button"
            class="icon-button icon-button-primary icon-button-compact"
            aria-label=increase_label
            on:click=move |_| {
                cart.update(|cart| {
                    if let Err(error) = cart.add(&product) {
                        action_message.set(Some(error.to_string()));
                    } else {
                        let message = format!("Added {item_name} to cart.");

                        action_message.set(Some(message.clone()));
                        announce(live_message, message);
                    }
                });
            }
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
                class="lucide lucide-plus-icon lucide-plus"
                aria-hidden="true"
            >
                <path d="M5 12h14"></path>
                <path d="M12 5v14"></path>
            </svg>
        </button>
    }
}

#[component]
fn RemoveLineButton(
    id: ProductId,
    item_name: String,
    cart: RwSignal<Cart<'static>>,
    action_message: RwSignal<Option<String>>,
) -> impl IntoView {
    let remove_label = format!("Remove {item_name} from cart");

    view! {
        <button
            type="button"
            class="icon-button icon-button-secondary icon-button-compact cart-line-remove"
            aria-label=remove_label
            on:click=move |_| {
                cart.update(|cart| cart.remove(id));
                action_message.set(Some(format!("Removed {item_name} from cart.")));
            }
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
                class="lucide lucide-trash-2-icon lucide-trash-2"
                aria-hidden="true"
            >
                <path d="M10 11v6"></path>
                <path d="M14 11v6"></path>
                <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"></path>
                <path d="M3 6h18"></path>
                <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"></path>
            </svg>
        </button>
    }
}

#[component]
fn CartLineRow(
    line: CartLine<'static>,
    cart: RwSignal<Cart<'static>>,
    action_message: RwSignal<Option<String>>,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let product = line.product().clone();
    let id = product.id;
    let currency_code = product.price.currency().iso_alpha_code;
    let quantity = line.quantity();

    let unit_price = format_price(product.price.to_minor_units(), currency_code);
    let line_total = format_price(line.line_total().to_minor_units(), currency_code);
    let item_name = product.name.clone();

    view! {
        <li class="cart-line">
            <div class="cart-line-details">
                <p class="cart-line-name">{item_name.clone()}</p>
                <p class="cart-line-price">{unit_price.clone()}</p>
            </div>

            <div class="cart-line-controls">
                <DecreaseLineButton
                    id=id
                    quantity=quantity
                    item_name=item_name.clone()
                    cart=cart
                    action_message=action_message
                />
                <span class="cart-line-quantity">{quantity}</span>
                <IncreaseLineButton
                    product=product
                    item_name=item_name.clone()
                    unit_price=unit_price
                    cart=cart
                    action_message=action_message
                    live_message=live_message
                />
                <RemoveLineButton
                    id=id
                    item_name=item_name
                    cart=cart
                    action_message=action_message
                />
            </div>

            <p class="cart-line-total">{line_total}</p>
        </li>
    }
}

/// Cart drawer component, shown while `cart_open` is set.
#[component]
pub fn CartDrawer(
    /// Shared cart state.
    cart: RwSignal<Cart<'static>>,
    /// Whether the drawer is shown.
    cart_open: RwSignal<bool>,
    /// Ephemeral action message shown to the user.
    action_message: RwSignal<Option<String>>,
    /// Shared aria-live announcement channel.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    view! {
        {move || {
            if !cart_open.get() {
                return ().into_any();
            }

            let lines: Vec<CartLine<'static>> =
                cart.with(|cart| cart.iter().cloned().collect());
            let count = cart.with(Cart::count);
            let total_minor =
                cart.with(|cart| cart.total().map_or(0, |total| total.to_minor_units()));
            let currency_code = cart.with(|cart| cart.currency().iso_alpha_code);

            view! {
                <aside class="cart-drawer" aria-label="Shopping cart">
                    <div class="cart-drawer-header">
                        <h2 class="cart-drawer-title">"Cart"</h2>
                        <button
                            type="button"
                            class="icon-button icon-button-secondary icon-button-compact"
                            aria-label="Close cart"
                            on:click=move |_| cart_open.set(false)
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
                                class="lucide lucide-x-icon lucide-x"
                                aria-hidden="true"
                            >
                                <path d="M18 6 6 18"></path>
                                <path d="m6 6 12 12"></path>
                            </svg>
                        </button>
                    </div>

                    {if lines.is_empty() {
                        view! { <p class="cart-empty">"Your cart is empty"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="cart-lines">
                                {lines
                                    .into_iter()
                                    .map(|line| {
                                        view! {
                                            <CartLineRow
                                                line=line
                                                cart=cart
                                                action_message=action_message
                                                live_message=live_message
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <div class="cart-totals">
                                <p class="cart-totals-row">
                                    <span>"Items"</span>
                                    <span>{item_count_label(count)}</span>
                                </p>
                                <p class="cart-totals-row cart-totals-total">
                                    <span>"Total"</span>
                                    <span>{format_price(total_minor, currency_code)}</span>
                                </p>
                                <button type="button" class="checkout-button">
                                    "Checkout"
                                </button>
                            </div>
                        }
                            .into_any()
                    }}
                </aside>
            }
            .into_any()
        }}
    }
}
