use serde::{Deserialize, Serialize};

use crate::domain::{CustomerId, OrderStatus, PaymentMethod, PaymentValue};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Order{
    pub order_id: String,
    pub customer_id: String,
    pub order_status: String,
    #[serde(default)]
    pub order_purchase_timestamp: Option<String>,
    #[serde(default)]
    pub order_estimated_delivery_date: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub payment_value: Option<f64>
}

// Row of `/orders/by-customer/{id}`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CustomerOrder{
    pub order_id: String,
    pub order_status: String,
    #[serde(default)]
    pub order_purchase_timestamp: Option<String>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct OrderStats{
    pub total_orders: i64,
    pub total_items: i64,
    pub avg_items_per_order: f64,
    pub total_revenue: f64
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SampleCustomers{
    #[serde(default)]
    pub sample_ids: Vec<String>
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedOrder{
    pub order_id: String
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewOrder{
    pub customer_id: CustomerId,
    pub order_status: OrderStatus,
    pub payment_type: PaymentMethod,
    pub payment_value: PaymentValue
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OrderUpdate{
    pub order_status: OrderStatus,
    pub payment_type: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_value: Option<PaymentValue>
}
