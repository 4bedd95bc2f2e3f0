use reqwest::Method;

use crate::{
    domain::{CustomerId, Limit},
    models::{
        CreatedOrder, CustomerOption, CustomerOrder, NewOrder, Order, OrderStats, OrderUpdate,
        SampleCustomers,
    },
};

use super::{ApiClient, ApiError, Listing};

#[derive(Clone)]
pub struct OrdersApi {
    client: ApiClient,
}

impl OrdersApi {
    pub fn new(client: ApiClient) -> OrdersApi {
        Self { client }
    }

    #[tracing::instrument("Fetching orders of a customer", skip(self))]
    pub async fn by_customer(
        &self,
        customer_id: &CustomerId,
        limit: Limit,
    ) -> Result<Vec<CustomerOrder>, ApiError> {
        let listing: Listing<CustomerOrder> = self
            .client
            .get(
                &["orders", "by-customer", customer_id.as_str()],
                &[("limit", limit.to_string())],
            )
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching sample customer ids", skip(self))]
    pub async fn sample_customer(&self) -> Result<SampleCustomers, ApiError> {
        self.client.get(&["orders", "sample-customer"], &[]).await
    }

    #[tracing::instrument("Fetching order stats", skip(self))]
    pub async fn stats(&self) -> Result<OrderStats, ApiError> {
        self.client.get(&["orders", "stats"], &[]).await
    }

    #[tracing::instrument("Fetching recent orders", skip(self))]
    pub async fn recent(&self, limit: u32) -> Result<Vec<Order>, ApiError> {
        let listing: Listing<Order> = self
            .client
            .get(&["orders", "recent"], &[("limit", limit.to_string())])
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching customer options", skip(self))]
    pub async fn customer_options(&self) -> Result<Vec<CustomerOption>, ApiError> {
        let listing: Listing<CustomerOption> = self
            .client
            .get(&["orders", "customers", "list"], &[])
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching order by id", skip(self))]
    pub async fn get(&self, order_id: &str) -> Result<Order, ApiError> {
        self.client.get(&["orders", order_id], &[]).await
    }

    #[tracing::instrument("Creating order", skip(self))]
    pub async fn create(&self, order: &NewOrder) -> Result<CreatedOrder, ApiError> {
        self.client.post(&["orders", ""], order).await
    }

    #[tracing::instrument("Updating order", skip(self))]
    pub async fn update(&self, order_id: &str, update: &OrderUpdate) -> Result<(), ApiError> {
        self.client
            .send(Method::PUT, &["orders", order_id], Some(update))
            .await
    }

    #[tracing::instrument("Deleting order", skip(self))]
    pub async fn delete(&self, order_id: &str) -> Result<(), ApiError> {
        self.client
            .send::<()>(Method::DELETE, &["orders", order_id], None)
            .await
    }
}
