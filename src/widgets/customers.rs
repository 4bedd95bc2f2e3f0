use crate::{
    api::CustomersApi,
    domain::{CityName, Limit, LimitBounds, StateCode},
    error_classifier::ErrorClassifier,
    models::{Customer, StateCount, TopCity},
    utils::group_thousands,
    views::{TableRow, WidgetView},
};

use super::{invalid, rows};

impl TableRow for Customer {
    const HEADERS: &'static [&'static str] = &["Customer ID", "City", "State"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.customer_id.clone(),
            self.customer_city.clone(),
            self.customer_state.clone(),
        ]
    }
}

impl TableRow for TopCity {
    const HEADERS: &'static [&'static str] = &["City", "Customer Count"];

    fn cells(&self) -> Vec<String> {
        vec![self.customer_city.clone(), group_thousands(self.customer_count)]
    }
}

impl TableRow for StateCount {
    const HEADERS: &'static [&'static str] = &["State", "Customer Count"];

    fn cells(&self) -> Vec<String> {
        vec![self.customer_state.clone(), group_thousands(self.customer_count)]
    }
}

#[derive(Clone)]
pub struct CustomerWidgets {
    api: CustomersApi,
    errors: ErrorClassifier,
}

impl CustomerWidgets {
    pub fn new(api: CustomersApi, errors: ErrorClassifier) -> CustomerWidgets {
        Self { api, errors }
    }

    #[tracing::instrument("Loading customers by state", skip(self))]
    pub async fn load_customers_by_state(&self, state: &str) -> WidgetView {
        let state = match StateCode::parse(state) {
            Ok(state) => state,
            Err(message) => return invalid(&self.errors, message),
        };
        rows(&self.errors, self.api.by_state(&state).await)
    }

    #[tracing::instrument("Loading top cities", skip(self))]
    pub async fn load_top_cities(&self, limit: Option<&str>) -> WidgetView {
        let limit = match Limit::parse(limit, LimitBounds::TOP_CITIES) {
            Ok(limit) => limit,
            Err(message) => return invalid(&self.errors, message),
        };
        rows(&self.errors, self.api.top_cities(limit).await)
    }

    #[tracing::instrument("Loading customers by city", skip(self))]
    pub async fn load_customers_by_city(
        &self,
        state: &str,
        city: &str,
        limit: Option<&str>,
    ) -> WidgetView {
        let parsed = StateCode::parse(state).and_then(|state| {
            let city = CityName::parse(city)?;
            let limit = Limit::parse(limit, LimitBounds::CUSTOMERS_BY_CITY)?;
            Ok((state, city, limit))
        });
        let (state, city, limit) = match parsed {
            Ok(parsed) => parsed,
            Err(message) => return invalid(&self.errors, message),
        };
        rows(&self.errors, self.api.by_city(&state, &city, limit).await)
    }

    #[tracing::instrument("Loading top states", skip(self))]
    pub async fn load_top_states(&self, limit: Option<&str>) -> WidgetView {
        let limit = match Limit::parse(limit, LimitBounds::TOP_STATES) {
            Ok(limit) => limit,
            Err(message) => return invalid(&self.errors, message),
        };
        rows(&self.errors, self.api.top_states(limit).await)
    }
}
