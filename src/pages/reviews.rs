use chrono::Utc;
use serde::Deserialize;

use crate::{
    api::{ApiError, ReviewsApi},
    domain::{OrderId, ReviewScore, ScoreRange},
    error_classifier::ErrorClassifier,
    messages::{Action, Field, Message, Resource},
    models::{NewReview, Review, ReviewScoreStats, ReviewUpdate},
};

use super::{
    form::{Submission, Validator},
    state::{Banner, Snapshot, ViewState},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewsData {
    pub stats: Option<ReviewScoreStats>,
    pub reviews: Vec<Review>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReviewForm {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub review_score: String,
    #[serde(default)]
    pub review_comment_message: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReviewEditForm {
    #[serde(default)]
    pub review_score: String,
    #[serde(default)]
    pub review_comment_message: String,
}

impl From<&Review> for ReviewEditForm {
    fn from(review: &Review) -> Self {
        ReviewEditForm {
            review_score: review.review_score.to_string(),
            review_comment_message: review.review_comment_message.clone().unwrap_or_default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReviewFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub score: String,
}

impl ReviewFilter {
    fn score(&self) -> Option<u8> {
        self.score.trim().parse().ok()
    }

    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.score().is_some()
    }

    pub fn apply(&self, reviews: &[Review]) -> Vec<Review> {
        let term = self.search.trim().to_lowercase();
        let score = self.score();
        reviews
            .iter()
            .filter(|review| score.map_or(true, |s| review.review_score == s))
            .filter(|review| {
                term.is_empty()
                    || review.order_id.to_lowercase().contains(&term)
                    || review
                        .review_comment_message
                        .as_deref()
                        .is_some_and(|m| m.to_lowercase().contains(&term))
            })
            .cloned()
            .collect()
    }
}

pub struct ReviewsPage {
    api: ReviewsApi,
    errors: ErrorClassifier,
    state: ViewState<ReviewsData>,
}

impl ReviewsPage {
    pub const RECENT_LIMIT: u32 = 20;

    pub fn new(api: ReviewsApi, errors: ErrorClassifier) -> ReviewsPage {
        ReviewsPage {
            api,
            errors,
            state: ViewState::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<ReviewsData> {
        self.state.snapshot(Utc::now())
    }

    #[tracing::instrument("Refreshing reviews page", skip(self))]
    pub async fn refresh(&self) {
        let ticket = self.state.begin();
        let (stats, reviews) = futures_util::join!(
            self.api.stats(ScoreRange::ALL),
            self.api.recent(Self::RECENT_LIMIT)
        );

        match (stats, reviews) {
            (Ok(stats), Ok(reviews)) => {
                self.state.commit(
                    ticket,
                    ReviewsData {
                        stats: Some(stats),
                        reviews,
                    },
                );
            }
            (Err(e), _) | (_, Err(e)) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Review);
                self.state.fail(ticket, Banner::error(text));
            }
        }
    }

    // Reviews have no single-item endpoint; edits start from the fetched list.
    pub fn edit_form(&self, review_id: &str) -> Option<ReviewEditForm> {
        self.snapshot()
            .data
            .reviews
            .iter()
            .find(|r| r.review_id == review_id)
            .map(ReviewEditForm::from)
    }

    #[tracing::instrument("Creating review from form", skip(self))]
    pub async fn create(&self, form: &ReviewForm) -> Submission {
        let mut validator = Validator::new(self.errors.catalog());
        let order_id = validator.check(Field::OrderId, OrderId::parse(&form.order_id));
        let review_score = validator.check(
            Field::ReviewScore,
            ReviewScore::parse(&form.review_score, Field::ReviewScore),
        );

        let review = match (order_id, review_score) {
            (Some(order_id), Some(review_score)) => NewReview {
                order_id,
                review_score,
                review_comment_message: form.review_comment_message.trim().to_string(),
            },
            _ => return Submission::Rejected(validator.into_errors()),
        };

        match self.api.create(&review).await {
            Ok(created) => {
                let text = self.errors.render(&Message::Created {
                    resource: Resource::Review,
                    id: created.review_id,
                });
                self.state.raise(Banner::success(text));
                self.refresh().await;
                Submission::Accepted
            }
            Err(e) => self.failed(&e, Action::Create),
        }
    }

    #[tracing::instrument("Updating review from form", skip(self))]
    pub async fn update(&self, review_id: &str, form: &ReviewEditForm) -> Submission {
        let mut validator = Validator::new(self.errors.catalog());
        let review_score = validator.check(
            Field::ReviewScore,
            ReviewScore::parse(&form.review_score, Field::ReviewScore),
        );
        let Some(review_score) = review_score else {
            return Submission::Rejected(validator.into_errors());
        };

        let update = ReviewUpdate {
            review_score,
            review_comment_message: form.review_comment_message.trim().to_string(),
        };
        match self.api.update(review_id, &update).await {
            Ok(()) => {
                let text = self.errors.render(&Message::Updated {
                    resource: Resource::Review,
                });
                self.state.raise(Banner::success(text));
                self.refresh().await;
                Submission::Accepted
            }
            Err(e) => self.failed(&e, Action::Update),
        }
    }

    pub fn request_delete(&self, review_id: &str) {
        self.state.request_delete(review_id);
    }

    pub fn cancel_delete(&self) {
        self.state.cancel_delete();
    }

    #[tracing::instrument("Confirming review deletion", skip(self))]
    pub async fn confirm_delete(&self, review_id: &str) -> Submission {
        if !self.state.take_pending_delete(review_id) {
            self.state
                .raise(Banner::error(self.errors.render(&Message::NoPendingDeletion)));
            return Submission::Failed;
        }

        match self.api.delete(review_id).await {
            Ok(()) => {
                let text = self.errors.render(&Message::Deleted {
                    resource: Resource::Review,
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

    fn failed(&self, error: &ApiError, action: Action) -> Submission {
        let text = self.errors.describe_failure(error, action, Resource::Review);
        self.state.raise(Banner::error(text));
        Submission::Failed
    }
}
