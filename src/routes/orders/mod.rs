mod delete;
mod get;
mod post;
mod update;

use askama::Template;

use crate::{
    domain::{OrderStatus, PaymentMethod},
    messages::{Message, Resource},
    models::Order,
    pages::{
        orders::{OrderFilter, OrderForm, OrdersData},
        FieldErrors, Pages, Snapshot,
    },
    utils::{display_date, group_thousands, short_id, two_decimals},
};

use super::{form_messages, Chrome, Choice};

pub use delete::{cancel_order_delete, confirm_order_delete, request_order_delete};
pub use get::get_orders;
pub use post::{create_order, dismiss_order_error};
pub use update::{edit_order_form, update_order};

pub struct OrderStatsView {
    pub total_orders: String,
    pub total_items: String,
    pub avg_items_per_order: String,
    pub total_revenue: String,
}

pub struct OrderRow {
    pub order_id: String,
    pub short_id: String,
    pub customer_id: String,
    pub short_customer: String,
    pub status: String,
    pub purchase_date: String,
    pub payment_type: String,
    pub payment_value: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        OrderRow {
            order_id: order.order_id.clone(),
            short_id: short_id(&order.order_id),
            customer_id: order.customer_id.clone(),
            short_customer: short_id(&order.customer_id),
            status: order.order_status.clone(),
            purchase_date: display_date(order.order_purchase_timestamp.as_deref()),
            payment_type: order
                .payment_type
                .as_deref()
                .map(|t| {
                    PaymentMethod::parse(t)
                        .map(|m| m.label().to_string())
                        .unwrap_or_else(|_| t.to_string())
                })
                .unwrap_or_else(|| "-".to_string()),
            payment_value: order
                .payment_value
                .map(|v| format!("R$ {}", two_decimals(v)))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Template)]
#[template(path = "orders.html")]
pub struct OrdersTemplate {
    chrome: Chrome,
    stats: Option<OrderStatsView>,
    pending_delete: Option<String>,
    confirm_text: String,
    form_errors: Vec<String>,
    customers: Vec<Choice>,
    statuses: Vec<Choice>,
    payment_methods: Vec<Choice>,
    payment_value: String,
    search: String,
    status_filter: Vec<Choice>,
    filter_active: bool,
    rows: Vec<OrderRow>,
    empty_message: String,
}

pub fn status_choices(current: &str) -> Vec<Choice> {
    OrderStatus::ALL
        .iter()
        .map(|s| Choice::new(s.as_str(), s.label(), current))
        .collect()
}

pub fn payment_choices(current: &str) -> Vec<Choice> {
    PaymentMethod::ALL
        .iter()
        .map(|m| Choice::new(m.as_str(), m.label(), current))
        .collect()
}

pub fn orders_template(
    pages: &Pages,
    snapshot: Snapshot<OrdersData>,
    filter: &OrderFilter,
    form: &OrderForm,
    errors: &FieldErrors,
) -> OrdersTemplate {
    let data = snapshot.data;
    let rows: Vec<OrderRow> = filter.apply(&data.orders).iter().map(OrderRow::from).collect();
    let empty_message = if filter.is_active() {
        pages.text(&Message::NoMatches)
    } else {
        pages.text(&Message::NoData)
    };

    // New orders start out as "processing" paid by credit card.
    let status = match form.order_status.as_str() {
        "" => OrderStatus::Processing.as_str(),
        status => status,
    };
    let payment = match form.payment_type.as_str() {
        "" => PaymentMethod::CreditCard.as_str(),
        payment => payment,
    };

    OrdersTemplate {
        chrome: Chrome::new("Orders", "orders")
            .banner(snapshot.banner)
            .dismiss_with("/orders/dismiss-error")
            .loading(snapshot.loading),
        stats: data.stats.map(|stats| OrderStatsView {
            total_orders: group_thousands(stats.total_orders),
            total_items: group_thousands(stats.total_items),
            avg_items_per_order: two_decimals(stats.avg_items_per_order),
            total_revenue: two_decimals(stats.total_revenue),
        }),
        pending_delete: snapshot.pending_delete,
        confirm_text: pages.text(&Message::ConfirmDelete { resource: Resource::Order }),
        form_errors: form_messages(errors),
        customers: data
            .customers
            .iter()
            .map(|c| Choice::new(c.customer_id.clone(), c.display_label(), &form.customer_id))
            .collect(),
        statuses: status_choices(status),
        payment_methods: payment_choices(payment),
        payment_value: form.payment_value.clone(),
        search: filter.search.clone(),
        status_filter: status_choices(&filter.status),
        filter_active: filter.is_active(),
        rows,
        empty_message,
    }
}
