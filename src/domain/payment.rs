use serde::{Deserialize, Serialize};

use crate::messages::{Field, Message};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod{
    CreditCard,
    Boleto,
    Voucher,
    DebitCard
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::Boleto,
        PaymentMethod::Voucher,
        PaymentMethod::DebitCard
    ];

    pub fn parse(raw: &str) -> Result<PaymentMethod, Message>{
        let raw = raw.trim();
        Self::ALL.into_iter()
            .find(|method| method.as_str() == raw)
            .ok_or(Message::Selection{ field: Field::PaymentType })
    }

    pub fn as_str(&self) -> &'static str{
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::Boleto => "boleto",
            PaymentMethod::Voucher => "voucher",
            PaymentMethod::DebitCard => "debit_card"
        }
    }

    pub fn label(&self) -> &'static str{
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Boleto => "Boleto",
            PaymentMethod::Voucher => "Voucher",
            PaymentMethod::DebitCard => "Debit Card"
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(transparent)]
pub struct PaymentValue(f64);

impl PaymentValue {
    pub fn parse(raw: &str) -> Result<PaymentValue, Message>{
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(Self(value)),
            _ => Err(Message::MustBePositive{ field: Field::PaymentValue })
        }
    }

    pub fn inner(&self) -> f64{
        self.0
    }
}
