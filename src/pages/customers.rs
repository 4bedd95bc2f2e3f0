use chrono::Utc;
use serde::Deserialize;

use crate::{
    api::CustomersApi,
    domain::{Limit, LimitBounds, StateCode},
    error_classifier::ErrorClassifier,
    messages::{Action, Resource},
    models::{Customer, TopCity},
};

use super::state::{Banner, Snapshot, ViewState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomersData {
    pub customers: Vec<Customer>,
    pub top_cities: Vec<TopCity>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CustomerSearch {
    #[serde(default)]
    pub view: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub limit: String,
}

impl CustomerSearch {
    pub const DEFAULT_STATE: &'static str = "SP";
}

/// Customers by state or top cities; running one search clears the other's result.
pub struct CustomersPage {
    api: CustomersApi,
    errors: ErrorClassifier,
    state: ViewState<CustomersData>,
}

impl CustomersPage {
    pub fn new(api: CustomersApi, errors: ErrorClassifier) -> CustomersPage {
        CustomersPage {
            api,
            errors,
            state: ViewState::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<CustomersData> {
        self.state.snapshot(Utc::now())
    }

    pub async fn search(&self, search: &CustomerSearch) {
        match search.view.as_str() {
            "by-state" => self.search_by_state(&search.state, &search.limit).await,
            "top-cities" => self.top_cities(&search.limit).await,
            _ => {}
        }
    }

    #[tracing::instrument("Searching customers by state", skip(self))]
    pub async fn search_by_state(&self, state: &str, limit: &str) {
        let ticket = self.state.begin();
        let parsed = StateCode::parse(state).and_then(|state| {
            Ok((state, Limit::parse(Some(limit), LimitBounds::CUSTOMERS_BY_CITY)?))
        });
        let (state, limit) = match parsed {
            Ok(parsed) => parsed,
            Err(message) => {
                let text = self.errors.render(&message);
                self.state
                    .fail_with(ticket, Banner::error(text), |data| *data = CustomersData::default());
                return;
            }
        };

        match self.api.by_state(&state).await {
            Ok(mut customers) => {
                customers.truncate(limit.inner() as usize);
                self.state.commit(
                    ticket,
                    CustomersData {
                        customers,
                        top_cities: Vec::new(),
                    },
                );
            }
            Err(e) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Customer);
                self.state
                    .fail_with(ticket, Banner::error(text), |data| *data = CustomersData::default());
            }
        }
    }

    #[tracing::instrument("Searching top cities", skip(self))]
    pub async fn top_cities(&self, limit: &str) {
        let ticket = self.state.begin();
        let limit = match Limit::parse(Some(limit), LimitBounds::CUSTOMERS_BY_CITY) {
            Ok(limit) => limit,
            Err(message) => {
                let text = self.errors.render(&message);
                self.state
                    .fail_with(ticket, Banner::error(text), |data| *data = CustomersData::default());
                return;
            }
        };

        match self.api.top_cities(limit).await {
            Ok(top_cities) => {
                self.state.commit(
                    ticket,
                    CustomersData {
                        customers: Vec::new(),
                        top_cities,
                    },
                );
            }
            Err(e) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Customer);
                self.state
                    .fail_with(ticket, Banner::error(text), |data| *data = CustomersData::default());
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.state.dismiss_error();
    }
}
