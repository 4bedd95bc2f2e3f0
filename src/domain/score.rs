use serde::Serialize;

use crate::messages::{Field, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ReviewScore(u8);

impl ReviewScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn parse(raw: &str, field: Field) -> Result<ReviewScore, Message>{
        let value: i64 = raw.trim().parse()
            .map_err(|_| Message::NotANumber{ field })?;

        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(Message::OutOfRange{
                field,
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX)
            });
        }

        Ok(Self(value as u8))
    }

    pub fn inner(&self) -> u8{
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange{
    pub min: ReviewScore,
    pub max: ReviewScore
}

impl ScoreRange {
    pub const ALL: ScoreRange = ScoreRange{
        min: ReviewScore(ReviewScore::MIN),
        max: ReviewScore(ReviewScore::MAX)
    };

    pub fn parse(min: &str, max: &str) -> Result<ScoreRange, Message>{
        let min = ReviewScore::parse(min, Field::MinScore)?;
        let max = ReviewScore::parse(max, Field::MaxScore)?;

        if min > max {
            return Err(Message::RangeInverted{ lower: Field::MinScore, upper: Field::MaxScore });
        }

        Ok(ScoreRange{ min, max })
    }
}
