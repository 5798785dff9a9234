//! Profile tab: customer card and favourite products.

use std::sync::Arc;

use leptos::prelude::*;

use vitrine::{catalog::Catalog, customer::Customer};

use crate::format::format_price;

/// Avatar fallback initials: first letter of the first two words of a name.
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Profile panel component.
#[component]
pub fn ProfilePanel(
    /// The signed-in customer.
    customer: Arc<Customer>,
    /// Catalog used to resolve favourite products.
    catalog: Arc<Catalog<'static>>,
) -> impl IntoView {
    let avatar = initials(&customer.name);
    let name = customer.name.clone();
    let email = customer.email.clone();
    let phone = customer.phone.clone();
    let address = customer.address.clone();
    let bonus = format!("Bonus balance: {} points", customer.bonus_points);

    let favourites: Vec<(String, String)> = customer
        .favourite_products(&catalog)
        .into_iter()
        .map(|product| {
            let currency_code = product.price.currency().iso_alpha_code;

            (
                product.name.clone(),
                format_price(product.price.to_minor_units(), currency_code),
            )
        })
        .collect();

    view! {
        <section class="profile-panel">
            <div class="profile-card">
                <span class="profile-avatar" aria-hidden="true">{avatar}</span>
                <div class="profile-details">
                    <h2 class="profile-name">{name}</h2>
                    <p class="profile-email">{email}</p>
                    <p class="profile-contact-row">{phone}</p>
                    <p class="profile-contact-row">{address}</p>
                    <p class="profile-contact-row">{bonus}</p>
                </div>
            </div>

            <div class="favourites-card">
                <h3 class="panel-title">"Favourites"</h3>
                <ul class="favourites-grid">
                    {favourites
                        .into_iter()
                        .map(|(name, price)| {
                            view! {
                                <li class="favourite-row">
                                    <p class="favourite-name">{name}</p>
                                    <p class="favourite-price">{price}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
