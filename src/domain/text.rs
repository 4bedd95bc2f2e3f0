use serde::Serialize;

use crate::messages::{Field, Message};

fn required(raw: &str, field: Field, example: Option<&'static str>) -> Result<String, Message>{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(Message::Required{ field, example })
    } else {
        Ok(trimmed.to_string())
    }
}

macro_rules! required_text {
    ($(#[$meta:meta])* $name:ident, $field:expr, $example:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn parse(raw: &str) -> Result<$name, Message>{
                required(raw, $field, $example).map(Self)
            }

            pub fn as_str(&self) -> &str{
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

required_text!(CityName, Field::City, None);
required_text!(CustomerId, Field::CustomerId, None);
required_text!(OrderId, Field::OrderId, None);
required_text!(CategoryId, Field::CategoryId, None);
required_text!(Username, Field::Username, None);

// Brazilian state code, always upper case ("sp" becomes "SP").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCode(String);

impl StateCode {
    pub fn parse(raw: &str) -> Result<StateCode, Message>{
        required(raw, Field::State, Some("SP")).map(|s| Self(s.to_uppercase()))
    }

    pub fn as_str(&self) -> &str{
        &self.0
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentTypeName(String);

impl PaymentTypeName {
    pub const MAX_LEN: usize = 50;

    pub fn parse(raw: &str) -> Result<PaymentTypeName, Message>{
        let value = required(raw, Field::PaymentType, Some("credit_card"))?;
        if value.chars().count() > Self::MAX_LEN {
            return Err(Message::TooLong{ field: Field::PaymentType, max: Self::MAX_LEN });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str{
        &self.0
    }
}
