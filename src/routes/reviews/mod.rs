mod delete;
mod get;
mod post;
mod update;

use askama::Template;

use crate::{
    messages::{Message, Resource},
    models::{Review, ReviewScoreStats},
    pages::{
        reviews::{ReviewFilter, ReviewForm, ReviewsData},
        FieldErrors, Pages, Snapshot,
    },
    utils::{display_date, group_thousands, short_id, two_decimals},
    views::stars,
};

use super::{form_messages, Chrome, Choice};

pub use delete::{cancel_review_delete, confirm_review_delete, request_review_delete};
pub use get::get_reviews;
pub use post::{create_review, dismiss_review_error};
pub use update::{edit_review_form, update_review};

pub struct ScoreBucket {
    pub stars: String,
    pub count: String,
    pub width: u32,
}

pub struct ReviewOverview {
    pub total: String,
    pub average: String,
    pub positive: String,
    pub negative: String,
    pub buckets: Vec<ScoreBucket>,
}

impl From<&ReviewScoreStats> for ReviewOverview {
    fn from(stats: &ReviewScoreStats) -> Self {
        ReviewOverview {
            total: group_thousands(stats.total_reviews),
            average: stats
                .average_score
                .map(two_decimals)
                .unwrap_or_else(|| "N/A".to_string()),
            positive: format!("{:.1}", stats.share_of(4..=5)),
            negative: format!("{:.1}", stats.share_of(1..=2)),
            buckets: (1..=5)
                .rev()
                .map(|score| ScoreBucket {
                    stars: stars(score),
                    count: group_thousands(stats.count_for(score)),
                    width: stats.share_of(score..=score).round() as u32,
                })
                .collect(),
        }
    }
}

pub struct ReviewRow {
    pub review_id: String,
    pub short_id: String,
    pub order_id: String,
    pub short_order: String,
    pub score: u8,
    pub stars: String,
    pub message: String,
    pub date: String,
}

impl From<&Review> for ReviewRow {
    fn from(review: &Review) -> Self {
        ReviewRow {
            review_id: review.review_id.clone(),
            short_id: short_id(&review.review_id),
            order_id: review.order_id.clone(),
            short_order: short_id(&review.order_id),
            score: review.review_score,
            stars: stars(review.review_score),
            message: review
                .review_comment_message
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "-".to_string()),
            date: display_date(review.review_creation_date.as_deref()),
        }
    }
}

const SCORE_LABELS: [(u8, &str); 5] = [
    (5, "5 - Excellent"),
    (4, "4 - Good"),
    (3, "3 - Average"),
    (2, "2 - Poor"),
    (1, "1 - Terrible"),
];

pub fn score_choices(current: &str) -> Vec<Choice> {
    SCORE_LABELS
        .iter()
        .map(|(score, label)| Choice::new(score.to_string(), *label, current))
        .collect()
}

#[derive(Template)]
#[template(path = "reviews.html")]
pub struct ReviewsTemplate {
    chrome: Chrome,
    overview: Option<ReviewOverview>,
    pending_delete: Option<String>,
    confirm_text: String,
    form_errors: Vec<String>,
    order_id: String,
    scores: Vec<Choice>,
    message: String,
    search: String,
    score_filter: Vec<Choice>,
    rows: Vec<ReviewRow>,
    empty_message: String,
}

pub fn reviews_template(
    pages: &Pages,
    snapshot: Snapshot<ReviewsData>,
    filter: &ReviewFilter,
    form: &ReviewForm,
    errors: &FieldErrors,
) -> ReviewsTemplate {
    let data = snapshot.data;
    let score = match form.review_score.as_str() {
        "" => "5",
        score => score,
    };

    ReviewsTemplate {
        chrome: Chrome::new("Reviews", "reviews")
            .banner(snapshot.banner)
            .dismiss_with("/reviews/dismiss-error")
            .loading(snapshot.loading),
        overview: data.stats.as_ref().map(ReviewOverview::from),
        pending_delete: snapshot.pending_delete,
        confirm_text: pages.text(&Message::ConfirmDelete { resource: Resource::Review }),
        form_errors: form_messages(errors),
        order_id: form.order_id.clone(),
        scores: score_choices(score),
        message: form.review_comment_message.clone(),
        search: filter.search.clone(),
        score_filter: score_choices(&filter.score),
        rows: filter.apply(&data.reviews).iter().map(ReviewRow::from).collect(),
        empty_message: if filter.is_active() {
            pages.text(&Message::NoMatches)
        } else {
            pages.text(&Message::NoData)
        },
    }
}
