use serde::{Deserialize, Serialize};

use crate::messages::{Field, Message};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus{
    Processing,
    Shipped,
    Delivered,
    Canceled
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Canceled
    ];

    pub fn parse(raw: &str) -> Result<OrderStatus, Message>{
        let raw = raw.trim();
        Self::ALL.into_iter()
            .find(|status| status.as_str() == raw)
            .ok_or(Message::Selection{ field: Field::OrderStatus })
    }

    pub fn as_str(&self) -> &'static str{
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Canceled => "canceled"
        }
    }

    pub fn label(&self) -> &'static str{
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Canceled => "Canceled"
        }
    }
}
