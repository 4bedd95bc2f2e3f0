use serde::{Deserialize, Serialize};

use crate::domain::{OrderId, ReviewScore};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Review{
    pub review_id: String,
    pub order_id: String,
    pub review_score: u8,
    #[serde(default)]
    pub review_comment_title: Option<String>,
    #[serde(default)]
    pub review_comment_message: Option<String>,
    #[serde(default)]
    pub review_creation_date: Option<String>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScoreCount{
    pub review_score: u8,
    pub review_count: i64
}

// Both historical field names of `/reviews/stats` are accepted.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReviewScoreStats{
    pub min_score: u8,
    pub max_score: u8,
    #[serde(alias = "review_count")]
    pub total_reviews: i64,
    #[serde(default, alias = "avg_score")]
    pub average_score: Option<f64>,
    #[serde(default)]
    pub stats: Vec<ScoreCount>
}

impl ReviewScoreStats {
    pub fn count_for(&self, score: u8) -> i64{
        self.stats.iter()
            .find(|s| s.review_score == score)
            .map(|s| s.review_count)
            .unwrap_or(0)
    }

    pub fn share_of(&self, scores: std::ops::RangeInclusive<u8>) -> f64{
        if self.total_reviews <= 0 {
            return 0.0;
        }
        let matching: i64 = scores.map(|score| self.count_for(score)).sum();
        matching as f64 * 100.0 / self.total_reviews as f64
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedReview{
    pub review_id: String
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewReview{
    pub order_id: OrderId,
    pub review_score: ReviewScore,
    pub review_comment_message: String
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewUpdate{
    pub review_score: ReviewScore,
    pub review_comment_message: String
}

#[cfg(test)]
mod tests {
    use super::ReviewScoreStats;

    #[test]
    fn legacy_field_names_are_accepted(){
        let stats: ReviewScoreStats = serde_json::from_value(serde_json::json!({
            "min_score": 4,
            "max_score": 5,
            "review_count": 120,
            "avg_score": 4.6
        })).unwrap();

        assert_eq!(stats.total_reviews, 120);
        assert_eq!(stats.average_score, Some(4.6));
        assert!(stats.stats.is_empty());
    }

    #[test]
    fn share_of_uses_score_buckets(){
        let stats: ReviewScoreStats = serde_json::from_value(serde_json::json!({
            "min_score": 1,
            "max_score": 5,
            "total_reviews": 10,
            "average_score": 3.9,
            "stats": [
                {"review_score": 1, "review_count": 1},
                {"review_score": 4, "review_count": 3},
                {"review_score": 5, "review_count": 5}
            ]
        })).unwrap();

        assert_eq!(stats.share_of(4..=5), 80.0);
        assert_eq!(stats.share_of(1..=2), 10.0);
        assert_eq!(stats.count_for(3), 0);
    }
}
