//! Catalog tab: filtered product grid and the customer-reviews feed.

use std::sync::Arc;

use leptos::prelude::*;

use vitrine::{cart::Cart, catalog::Catalog, products::Product, reviews::Review};

use crate::{
    announce,
    format::{format_date, format_price},
};

/// Five-star row with the given number of filled stars.
#[component]
pub(crate) fn StarRow(filled: u8) -> impl IntoView {
    view! {
        <span class="star-row" aria-hidden="true">
            {(1u8..=5)
                .map(|star| {
                    let class = if star <= filled { "star star-filled" } else { "star" };

                    view! {
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="14"
                            height="14"
                            viewBox="0 0 24 24"
                            fill="currentColor"
                            stroke="currentColor"
                            stroke-width="1"
                            class=class
                        >
                            <path d="M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.123 2.123 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.123 2.123 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.122 2.122 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.122 2.122 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.122 2.122 0 0 0 1.597-1.16z"></path>
                        </svg>
                    }
                })
                .collect_view()}
        </span>
    }
}

#[component]
fn ProductCard(
    product: Product<'static>,
    cart: RwSignal<Cart<'static>>,
    action_message: RwSignal<Option<String>>,
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    let currency_code = product.price.currency().iso_alpha_code;
    let price_text = format_price(product.price.to_minor_units(), currency_code);

    let old_price_text = product
        .old_price
        .as_ref()
        .map(|old_price| format_price(old_price.to_minor_units(), currency_code));

    let discount_badge = product
        .discount_percent()
        .map(|percent| format!("-{percent}%"));

    let rating_text = format!("{} ({})", product.rating.value(), product.review_count);
    let filled_stars = product.rating.full_stars();

    let name = product.name.clone();
    let image = product.image.clone();
    let image_alt = product.name.clone();
    let announce_name = product.name.clone();
    let add_label = format!("Add {} ({price_text}) to cart", product.name);
    let add_product = product;

    view! {
        <li class="product-card">
            <div class="product-image-frame">
                <img src=image alt=image_alt class="product-image" />
                {discount_badge.map(|badge| {
                    view! { <span class="discount-badge">{badge}</span> }
                })}
            </div>
            <div class="product-body">
                <h3 class="product-name">{name}</h3>

                <div class="product-rating">
                    <StarRow filled=filled_stars />
                    <span class="product-rating-text">{rating_text}</span>
                </div>

                <div class="product-price-row">
                    <span class="product-price">{price_text}</span>
                    {old_price_text.map(|value| {
                        view! {
                            <span class="product-old-price">
                                <span class="sr-only">"Was "</span>
                                <del>{value}</del>
                            </span>
                        }
                    })}
                </div>

                <button
                    type="button"
                    class="add-to-cart-button"
                    aria-label=add_label
                    on:click=move |_| {
                        cart.update(|cart| {
                            if let Err(error) = cart.add(&add_product) {
                                action_message.set(Some(error.to_string()));
                            } else {
                                let message = format!("Added {announce_name} to cart.");

                                action_message.set(Some(message.clone()));
                                announce(live_message, message);
                            }
                        });
                    }
                >
                    "Add to cart"
                </button>
            </div>
        </li>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let filled_stars = review.rating.min(5);

    view! {
        <li class="review-card">
            <span class="review-avatar" aria-hidden="true">{review.initials}</span>
            <div class="review-content">
                <div class="review-header">
                    <h4 class="review-author">{review.author}</h4>
                    <span class="review-date">{format_date(review.posted_on)}</span>
                </div>
                <StarRow filled=filled_stars />
                <p class="review-text">{review.body}</p>
            </div>
        </li>
    }
}

#[component]
fn ReviewsFeed(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <h2 class="panel-title">"Customer reviews"</h2>
        <ul class="review-grid">
            {reviews
                .into_iter()
                .map(|review| view! { <ReviewCard review=review /> })
                .collect_view()}
        </ul>
    }
}

/// Catalog panel component.
#[component]
pub fn CatalogPanel(
    /// Catalog backing the product grid.
    catalog: Arc<Catalog<'static>>,
    /// Review feed rendered under the grid.
    reviews: Arc<Vec<Review>>,
    /// Live search query filtering the grid.
    search_query: RwSignal<String>,
    /// Shared cart state.
    cart: RwSignal<Cart<'static>>,
    /// Ephemeral action message shown to the user.
    action_message: RwSignal<Option<String>>,
    /// Shared aria-live announcement channel.
    live_message: RwSignal<(u64, String)>,
) -> impl IntoView {
    view! {
        <section class="catalog-panel">
            <h2 class="panel-title">"Popular products"</h2>
            <ul class="product-grid">
                {move || {
                    let visible: Vec<Product<'static>> = search_query.with(|query| {
                        catalog.search(query).into_iter().cloned().collect()
                    });

                    visible
                        .into_iter()
                        .map(|product| {
                            view! {
                                <ProductCard
                                    product=product
                                    cart=cart
                                    action_message=action_message
                                    live_message=live_message
                                />
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <ReviewsFeed reviews=Arc::unwrap_or_clone(reviews) />
        </section>
    }
}
