use chrono::Utc;
use serde::Deserialize;

use crate::{
    api::OrdersApi,
    domain::{CustomerId, OrderStatus, PaymentMethod, PaymentValue},
    error_classifier::ErrorClassifier,
    messages::{Action, Field, Message, Resource},
    models::{CustomerOption, NewOrder, Order, OrderStats, OrderUpdate},
};

use super::{
    form::{Submission, Validator},
    state::{Banner, Snapshot, ViewState},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdersData {
    pub orders: Vec<Order>,
    pub stats: Option<OrderStats>,
    pub customers: Vec<CustomerOption>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct OrderForm {
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub order_status: String,
    #[serde(default)]
    pub payment_type: String,
    #[serde(default)]
    pub payment_value: String,
}

// The edit form has no customer; a blank payment value leaves it unchanged.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OrderEditForm {
    #[serde(default)]
    pub order_status: String,
    #[serde(default)]
    pub payment_type: String,
    #[serde(default)]
    pub payment_value: String,
}

impl From<&Order> for OrderEditForm {
    fn from(order: &Order) -> Self {
        OrderEditForm {
            order_status: order.order_status.clone(),
            payment_type: order.payment_type.clone().unwrap_or_default(),
            payment_value: order
                .payment_value
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct OrderFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: String,
}

impl OrderFilter {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.status_is_all()
    }

    fn status_is_all(&self) -> bool {
        let status = self.status.trim();
        status.is_empty() || status == "all"
    }

    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        let term = self.search.trim().to_lowercase();
        orders
            .iter()
            .filter(|order| {
                term.is_empty()
                    || order.order_id.to_lowercase().contains(&term)
                    || order.customer_id.to_lowercase().contains(&term)
                    || order.order_status.to_lowercase().contains(&term)
            })
            .filter(|order| self.status_is_all() || order.order_status == self.status.trim())
            .cloned()
            .collect()
    }
}

pub struct OrdersPage {
    api: OrdersApi,
    errors: ErrorClassifier,
    state: ViewState<OrdersData>,
}

impl OrdersPage {
    pub const RECENT_LIMIT: u32 = 20;

    pub fn new(api: OrdersApi, errors: ErrorClassifier) -> OrdersPage {
        OrdersPage {
            api,
            errors,
            state: ViewState::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<OrdersData> {
        self.state.snapshot(Utc::now())
    }

    #[tracing::instrument("Refreshing orders page", skip(self))]
    pub async fn refresh(&self) {
        let ticket = self.state.begin();
        let (orders, stats, customers) = futures_util::join!(
            self.api.recent(Self::RECENT_LIMIT),
            self.api.stats(),
            self.api.customer_options()
        );

        // The dropdown is optional; the page still works without it.
        let customers = customers
            .map_err(|e| tracing::warn!(error = ?e, "Failed to load customer options"))
            .ok();

        match (orders, stats) {
            (Ok(orders), Ok(stats)) => {
                self.state.commit_with(ticket, |data| {
                    data.orders = orders;
                    data.stats = Some(stats);
                    if let Some(customers) = customers {
                        data.customers = customers;
                    }
                });
            }
            (Err(e), _) | (_, Err(e)) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Order);
                self.state.fail(ticket, Banner::error(text));
            }
        }
    }

    #[tracing::instrument("Creating order from form", skip(self))]
    pub async fn create(&self, form: &OrderForm) -> Submission {
        let mut validator = Validator::new(self.errors.catalog());
        let customer_id = validator.check(
            Field::Customer,
            CustomerId::parse(&form.customer_id)
                .map_err(|_| Message::Selection { field: Field::Customer }),
        );
        let order_status = validator.check(Field::OrderStatus, OrderStatus::parse(&form.order_status));
        let payment_type = validator.check(Field::PaymentType, PaymentMethod::parse(&form.payment_type));
        let payment_value = validator.check(Field::PaymentValue, PaymentValue::parse(&form.payment_value));

        let order = match (customer_id, order_status, payment_type, payment_value) {
            (Some(customer_id), Some(order_status), Some(payment_type), Some(payment_value)) => {
                NewOrder {
                    customer_id,
                    order_status,
                    payment_type,
                    payment_value,
                }
            }
            _ => return Submission::Rejected(validator.into_errors()),
        };

        match self.api.create(&order).await {
            Ok(created) => {
                let text = self.errors.render(&Message::Created {
                    resource: Resource::Order,
                    id: created.order_id,
                });
                self.state.raise(Banner::success(text));
                self.refresh().await;
                Submission::Accepted
            }
            Err(e) => self.failed(&e, Action::Create),
        }
    }

    #[tracing::instrument("Opening order for edit", skip(self))]
    pub async fn open_edit(&self, order_id: &str) -> Option<Order> {
        match self.api.get(order_id).await {
            Ok(order) => Some(order),
            Err(e) => {
                self.failed(&e, Action::Load);
                None
            }
        }
    }

    #[tracing::instrument("Updating order from form", skip(self))]
    pub async fn update(&self, order_id: &str, form: &OrderEditForm) -> Submission {
        let mut validator = Validator::new(self.errors.catalog());
        let order_status = validator.check(Field::OrderStatus, OrderStatus::parse(&form.order_status));
        let payment_type = validator.check(Field::PaymentType, PaymentMethod::parse(&form.payment_type));
        let payment_value = if form.payment_value.trim().is_empty() {
            Some(None)
        } else {
            validator
                .check(Field::PaymentValue, PaymentValue::parse(&form.payment_value))
                .map(Some)
        };

        let update = match (order_status, payment_type, payment_value) {
            (Some(order_status), Some(payment_type), Some(payment_value)) => OrderUpdate {
                order_status,
                payment_type,
                payment_value,
            },
            _ => return Submission::Rejected(validator.into_errors()),
        };

        match self.api.update(order_id, &update).await {
            Ok(()) => {
                let text = self.errors.render(&Message::Updated {
                    resource: Resource::Order,
                });
                self.state.raise(Banner::success(text));
                self.refresh().await;
                Submission::Accepted
            }
            Err(e) => self.failed(&e, Action::Update),
        }
    }

    pub fn request_delete(&self, order_id: &str) {
        self.state.request_delete(order_id);
    }

    pub fn cancel_delete(&self) {
        self.state.cancel_delete();
    }

    #[tracing::instrument("Confirming order deletion", skip(self))]
    pub async fn confirm_delete(&self, order_id: &str) -> Submission {
        if !self.state.take_pending_delete(order_id) {
            tracing::info!("Delete requested without a pending confirmation");
            self.state
                .raise(Banner::error(self.errors.render(&Message::NoPendingDeletion)));
            return Submission::Failed;
        }

        match self.api.delete(order_id).await {
            Ok(()) => {
                let text = self.errors.render(&Message::Deleted {
                    resource: Resource::Order,
                });
                self.state.raise(Banner::success(text));
                self.refresh().await;
                Submission::Accepted
            }
            Err(e) => self.failed(&e, Action::Delete),
        }
    }

    pub fn dismiss_error(&self) {
        self.state.dismiss_error();
    }

    fn failed(&self, error: &crate::api::ApiError, action: Action) -> Submission {
        let text = self.errors.describe_failure(error, action, Resource::Order);
        self.state.raise(Banner::error(text));
        Submission::Failed
    }
}
