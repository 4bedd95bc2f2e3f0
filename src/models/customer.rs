use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Customer{
    pub customer_id: String,
    pub customer_city: String,
    pub customer_state: String
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TopCity{
    pub customer_city: String,
    pub customer_count: i64
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StateCount{
    pub customer_state: String,
    pub customer_count: i64
}

// Entry of the customer dropdown on the order form.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CustomerOption{
    pub customer_id: String,
    #[serde(default)]
    pub customer_city: Option<String>,
    #[serde(default)]
    pub customer_state: Option<String>,
    #[serde(default)]
    pub label: Option<String>
}

impl CustomerOption {
    pub fn display_label(&self) -> String{
        if let Some(label) = self.label.as_deref().filter(|l| !l.is_empty()) {
            return label.to_string();
        }

        match (&self.customer_city, &self.customer_state) {
            (Some(city), Some(state)) => format!("{} ({}, {})", crate::utils::short_id(&self.customer_id), city, state),
            _ => self.customer_id.clone()
        }
    }
}
