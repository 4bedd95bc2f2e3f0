use crate::{
    api::PaymentsApi,
    domain::{Limit, LimitBounds, PaymentTypeName},
    error_classifier::ErrorClassifier,
    messages::Message,
    utils::{group_thousands, two_decimals},
    views::{SummaryItem, WidgetView},
};

use super::{failed, invalid};

#[derive(Clone)]
pub struct PaymentWidgets {
    api: PaymentsApi,
    errors: ErrorClassifier,
}

impl PaymentWidgets {
    pub fn new(api: PaymentsApi, errors: ErrorClassifier) -> PaymentWidgets {
        Self { api, errors }
    }

    #[tracing::instrument("Loading payments by type", skip(self))]
    pub async fn load_payments_by_type(&self, payment_type: &str, limit: Option<&str>) -> WidgetView {
        let parsed = PaymentTypeName::parse(payment_type).and_then(|payment_type| {
            let limit = Limit::parse(limit, LimitBounds::PAYMENTS_BY_TYPE)?;
            Ok((payment_type, limit))
        });
        let (payment_type, limit) = match parsed {
            Ok(parsed) => parsed,
            Err(message) => return invalid(&self.errors, message),
        };

        match self.api.by_type(&payment_type, limit).await {
            Ok(summary) if summary.row_count == 0 && summary.payments.is_empty() => {
                WidgetView::Empty(self.errors.render(&Message::NoData))
            }
            Ok(summary) => WidgetView::Summary(vec![
                SummaryItem::new("Payment type", summary.payment_type.clone()),
                SummaryItem::new("Payments", group_thousands(summary.row_count)),
                SummaryItem::new("Total value", two_decimals(summary.total_value())),
            ]),
            Err(e) => failed(&self.errors, &e),
        }
    }
}
