//! Orders tab: order history cards with status badges.

use std::sync::Arc;

use leptos::prelude::*;

use vitrine::orders::{Order, OrderStatus};

use crate::format::{format_date, format_price, item_count_label};

pub(crate) fn status_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered => "status-badge status-badge-delivered",
        OrderStatus::Shipping => "status-badge status-badge-shipping",
        OrderStatus::Processing => "status-badge status-badge-processing",
    }
}

#[component]
fn OrderCard(order: Order<'static>) -> impl IntoView {
    let currency_code = order.total.currency().iso_alpha_code;
    let reference = format!("№ {}", order.id);
    let placed_on = format_date(order.placed_on);
    let items = item_count_label(order.item_count);
    let total_text = format_price(order.total.to_minor_units(), currency_code);

    view! {
        <li class="order-card">
            <div class="order-card-header">
                <h3 class="order-reference">{reference}</h3>
                <span class=status_badge_class(order.status)>{order.status.label()}</span>
            </div>
            <p class="order-meta">{placed_on} " • " {items}</p>
            <p class="order-total">{total_text}</p>
        </li>
    }
}

/// Orders panel component.
#[component]
pub fn OrdersPanel(
    /// Order history, newest first.
    orders: Arc<Vec<Order<'static>>>,
) -> impl IntoView {
    let orders = Arc::unwrap_or_clone(orders);

    view! {
        <section class="orders-panel">
            <h2 class="panel-title">"My orders"</h2>
            <ul class="order-list">
                {orders
                    .into_iter()
                    .map(|order| view! { <OrderCard order=order /> })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_classes_vary_by_status() {
        assert_eq!(
            status_badge_class(OrderStatus::Delivered),
            "status-badge status-badge-delivered"
        );
        assert_eq!(
            status_badge_class(OrderStatus::Shipping),
            "status-badge status-badge-shipping"
        );
        assert_eq!(
            status_badge_class(OrderStatus::Processing),
            "status-badge status-badge-processing"
        );
    }
}
