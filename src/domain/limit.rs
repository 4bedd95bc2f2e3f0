use crate::messages::{Field, Message};

// Accepted range and fallback for one numeric widget input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitBounds{
    pub field: Field,
    pub min: u32,
    pub max: u32,
    pub default: u32
}

impl LimitBounds {
    pub const TOP_CITIES: LimitBounds = LimitBounds::limit(1, 50, 5);
    pub const CUSTOMERS_BY_CITY: LimitBounds = LimitBounds::limit(1, 50, 10);
    pub const TOP_STATES: LimitBounds = LimitBounds::limit(1, 27, 10);
    pub const ORDERS_BY_CUSTOMER: LimitBounds = LimitBounds::limit(1, 50, 5);
    pub const PAYMENTS_BY_TYPE: LimitBounds = LimitBounds::limit(1, 200, 20);
    pub const PRODUCTS_BY_CATEGORY: LimitBounds = LimitBounds::limit(1, 100, 10);
    pub const REPORT: LimitBounds = LimitBounds::limit(1, 100, 10);
    pub const MIN_REVIEWS: LimitBounds = LimitBounds{
        field: Field::MinReviews,
        min: 1,
        max: 1000,
        default: 50
    };

    const fn limit(min: u32, max: u32, default: u32) -> LimitBounds{
        LimitBounds{ field: Field::Limit, min, max, default }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(u32);

impl Limit{
    // Blank input falls back to the default, like an untouched number box.
    pub fn parse(raw: Option<&str>, bounds: LimitBounds) -> Result<Limit, Message>{
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Ok(Self(bounds.default));
        }

        let value: i64 = raw.parse()
            .map_err(|_| Message::NotANumber{ field: bounds.field })?;

        if value < i64::from(bounds.min) || value > i64::from(bounds.max) {
            return Err(Message::OutOfRange{
                field: bounds.field,
                min: i64::from(bounds.min),
                max: i64::from(bounds.max)
            });
        }

        Ok(Self(value as u32))
    }

    pub fn inner(&self) -> u32{
        self.0
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
