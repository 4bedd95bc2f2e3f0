use chrono::Utc;
use serde::Deserialize;

use crate::{
    api::PaymentsApi,
    error_classifier::ErrorClassifier,
    messages::{Action, Resource},
    models::{PaymentStats, PaymentTypeShare},
};

use super::state::{Banner, Snapshot, ViewState};

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PaymentFilter {
    #[serde(default)]
    pub payment_type: String,
}

impl PaymentFilter {
    pub fn apply(&self, shares: &[PaymentTypeShare]) -> Vec<PaymentTypeShare> {
        let term = self.payment_type.trim().to_lowercase();
        shares
            .iter()
            .filter(|share| term.is_empty() || share.payment_type.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }
}

pub struct PaymentsPage {
    api: PaymentsApi,
    errors: ErrorClassifier,
    state: ViewState<Option<PaymentStats>>,
}

impl PaymentsPage {
    pub fn new(api: PaymentsApi, errors: ErrorClassifier) -> PaymentsPage {
        PaymentsPage {
            api,
            errors,
            state: ViewState::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<Option<PaymentStats>> {
        self.state.snapshot(Utc::now())
    }

    #[tracing::instrument("Refreshing payments page", skip(self))]
    pub async fn refresh(&self) {
        let ticket = self.state.begin();
        match self.api.stats().await {
            Ok(stats) => {
                self.state.commit(ticket, Some(stats));
            }
            Err(e) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Payment);
                self.state.fail(ticket, Banner::error(text));
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.state.dismiss_error();
    }
}
