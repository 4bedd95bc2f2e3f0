use crate::{
    api::ReviewsApi,
    domain::ScoreRange,
    error_classifier::ErrorClassifier,
    messages::Message,
    utils::{group_thousands, two_decimals},
    views::{SummaryItem, WidgetView},
};

use super::{failed, invalid};

#[derive(Clone)]
pub struct ReviewWidgets {
    api: ReviewsApi,
    errors: ErrorClassifier,
}

impl ReviewWidgets {
    pub fn new(api: ReviewsApi, errors: ErrorClassifier) -> ReviewWidgets {
        Self { api, errors }
    }

    #[tracing::instrument("Loading review stats", skip(self))]
    pub async fn load_review_stats(&self, min_score: &str, max_score: &str) -> WidgetView {
        let range = match ScoreRange::parse(min_score, max_score) {
            Ok(range) => range,
            Err(message) => return invalid(&self.errors, message),
        };

        match self.api.stats(range).await {
            Ok(stats) if stats.total_reviews == 0 => {
                WidgetView::Empty(self.errors.render(&Message::NoData))
            }
            Ok(stats) => WidgetView::Summary(vec![
                SummaryItem::new(
                    "Score range",
                    format!("{} - {}", stats.min_score, stats.max_score),
                ),
                SummaryItem::new(
                    "Average score",
                    stats
                        .average_score
                        .map(two_decimals)
                        .unwrap_or_else(|| "N/A".to_string()),
                ),
                SummaryItem::new("Reviews", group_thousands(stats.total_reviews)),
            ]),
            Err(e) => failed(&self.errors, &e),
        }
    }
}
