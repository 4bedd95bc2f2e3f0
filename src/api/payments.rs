use crate::{
    domain::{Limit, PaymentTypeName},
    models::{PaymentStats, PaymentsByType},
};

use super::{ApiClient, ApiError};

#[derive(Clone)]
pub struct PaymentsApi {
    client: ApiClient,
}

impl PaymentsApi {
    pub fn new(client: ApiClient) -> PaymentsApi {
        Self { client }
    }

    #[tracing::instrument("Fetching payments by type", skip(self))]
    pub async fn by_type(
        &self,
        payment_type: &PaymentTypeName,
        limit: Limit,
    ) -> Result<PaymentsByType, ApiError> {
        self.client
            .get(
                &["payments", "by-type"],
                &[
                    ("payment_type", payment_type.as_str().to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await
    }

    #[tracing::instrument("Fetching payment stats", skip(self))]
    pub async fn stats(&self) -> Result<PaymentStats, ApiError> {
        self.client.get(&["payments", "stats"], &[]).await
    }
}
