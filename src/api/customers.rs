use crate::{
    domain::{CityName, Limit, StateCode},
    models::{Customer, StateCount, TopCity},
};

use super::{ApiClient, ApiError, Listing};

#[derive(Clone)]
pub struct CustomersApi {
    client: ApiClient,
}

impl CustomersApi {
    pub fn new(client: ApiClient) -> CustomersApi {
        Self { client }
    }

    #[tracing::instrument("Fetching customers by state", skip(self))]
    pub async fn by_state(&self, state: &StateCode) -> Result<Vec<Customer>, ApiError> {
        let listing: Listing<Customer> = self
            .client
            .get(&["customers", "by-state"], &[("state", state.to_string())])
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching top customer cities", skip(self))]
    pub async fn top_cities(&self, limit: Limit) -> Result<Vec<TopCity>, ApiError> {
        let listing: Listing<TopCity> = self
            .client
            .get(&["customers", "top-cities"], &[("limit", limit.to_string())])
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching customers by city", skip(self))]
    pub async fn by_city(
        &self,
        state: &StateCode,
        city: &CityName,
        limit: Limit,
    ) -> Result<Vec<Customer>, ApiError> {
        let listing: Listing<Customer> = self
            .client
            .get(
                &["customers", "by-city"],
                &[
                    ("state", state.to_string()),
                    ("city", city.to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching top customer states", skip(self))]
    pub async fn top_states(&self, limit: Limit) -> Result<Vec<StateCount>, ApiError> {
        let listing: Listing<StateCount> = self
            .client
            .get(&["geo", "top-states"], &[("limit", limit.to_string())])
            .await?;
        Ok(listing.into_vec())
    }
}
