use reqwest::Method;

use crate::{
    domain::ScoreRange,
    models::{CreatedReview, NewReview, Review, ReviewScoreStats, ReviewUpdate},
};

use super::{ApiClient, ApiError, Listing};

#[derive(Clone)]
pub struct ReviewsApi {
    client: ApiClient,
}

impl ReviewsApi {
    pub fn new(client: ApiClient) -> ReviewsApi {
        Self { client }
    }

    #[tracing::instrument("Fetching review stats", skip(self))]
    pub async fn stats(&self, range: ScoreRange) -> Result<ReviewScoreStats, ApiError> {
        self.client
            .get(
                &["reviews", "stats"],
                &[
                    ("min_score", range.min.inner().to_string()),
                    ("max_score", range.max.inner().to_string()),
                ],
            )
            .await
    }

    #[tracing::instrument("Fetching recent reviews", skip(self))]
    pub async fn recent(&self, limit: u32) -> Result<Vec<Review>, ApiError> {
        let listing: Listing<Review> = self
            .client
            .get(&["reviews", "recent"], &[("limit", limit.to_string())])
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Creating review", skip(self))]
    pub async fn create(&self, review: &NewReview) -> Result<CreatedReview, ApiError> {
        self.client.post(&["reviews", ""], review).await
    }

    #[tracing::instrument("Updating review", skip(self))]
    pub async fn update(&self, review_id: &str, update: &ReviewUpdate) -> Result<(), ApiError> {
        self.client
            .send(Method::PUT, &["reviews", review_id], Some(update))
            .await
    }

    #[tracing::instrument("Deleting review", skip(self))]
    pub async fn delete(&self, review_id: &str) -> Result<(), ApiError> {
        self.client
            .send::<()>(Method::DELETE, &["reviews", review_id], None)
            .await
    }
}
