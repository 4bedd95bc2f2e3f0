use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Payment{
    pub order_id: String,
    pub payment_sequential: i64,
    pub payment_type: String,
    pub payment_installments: i64,
    #[serde(default)]
    pub payment_value: Option<f64>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PaymentsByType{
    pub payment_type: String,
    #[serde(default)]
    pub limit: Option<u32>,
    pub row_count: i64,
    #[serde(default)]
    pub payments: Vec<Payment>
}

impl PaymentsByType {
    pub fn total_value(&self) -> f64{
        self.payments.iter()
            .filter_map(|p| p.payment_value)
            .sum()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PaymentTypeShare{
    #[serde(rename = "type")]
    pub payment_type: String,
    pub count: i64,
    pub total: f64
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct PaymentStats{
    pub total_payments: i64,
    pub total_value: f64,
    pub avg_payment_value: f64,
    #[serde(default)]
    pub payment_types: Vec<PaymentTypeShare>
}
