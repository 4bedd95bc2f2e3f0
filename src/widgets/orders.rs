use crate::{
    api::OrdersApi,
    domain::{CustomerId, Limit, LimitBounds},
    error_classifier::ErrorClassifier,
    messages::Message,
    models::CustomerOrder,
    utils::display_date,
    views::{SummaryItem, TableRow, WidgetView},
};

use super::{failed, invalid, rows};

impl TableRow for CustomerOrder {
    const HEADERS: &'static [&'static str] = &["Order ID", "Status", "Purchase Date"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.order_status.clone(),
            display_date(self.order_purchase_timestamp.as_deref()),
        ]
    }
}

#[derive(Clone)]
pub struct OrderWidgets {
    api: OrdersApi,
    errors: ErrorClassifier,
}

impl OrderWidgets {
    pub fn new(api: OrdersApi, errors: ErrorClassifier) -> OrderWidgets {
        Self { api, errors }
    }

    #[tracing::instrument("Loading orders by customer", skip(self))]
    pub async fn load_orders_by_customer(&self, customer_id: &str, limit: Option<&str>) -> WidgetView {
        let parsed = CustomerId::parse(customer_id).and_then(|customer_id| {
            let limit = Limit::parse(limit, LimitBounds::ORDERS_BY_CUSTOMER)?;
            Ok((customer_id, limit))
        });
        let (customer_id, limit) = match parsed {
            Ok(parsed) => parsed,
            Err(message) => return invalid(&self.errors, message),
        };
        rows(&self.errors, self.api.by_customer(&customer_id, limit).await)
    }

    // Hands out a customer id that is known to have orders, for trying the widget above.
    #[tracing::instrument("Fetching sample customer", skip(self))]
    pub async fn fetch_sample_customer(&self) -> WidgetView {
        match self.api.sample_customer().await {
            Ok(sample) => match sample.sample_ids.into_iter().next() {
                Some(id) => WidgetView::Summary(vec![SummaryItem::new("Sample customer ID", id)]),
                None => WidgetView::Empty(self.errors.render(&Message::NoSample)),
            },
            Err(e) => failed(&self.errors, &e),
        }
    }
}
