mod limit;
mod order_status;
mod payment;
mod score;
mod text;

pub use limit::{Limit, LimitBounds};
pub use order_status::OrderStatus;
pub use payment::{PaymentMethod, PaymentValue};
pub use score::{ReviewScore, ScoreRange};
pub use text::{CategoryId, CityName, CustomerId, OrderId, PaymentTypeName, StateCode, Username};
