//! User-facing text.
//!
//! Widgets and pages never build sentences themselves; they hand a [`Message`]
//! to a [`MessageCatalog`] and show whatever comes back. Only an English
//! catalog ships today.

use std::sync::Arc;

use crate::utils::short_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    State,
    City,
    Limit,
    CustomerId,
    OrderId,
    CategoryId,
    PaymentType,
    PaymentValue,
    OrderStatus,
    MinScore,
    MaxScore,
    ReviewScore,
    MinReviews,
    Customer,
    Username,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Order,
    Review,
    Customer,
    Product,
    Payment,
    Analytics,
    Query,
    Schema,
    Totals,
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Update,
    Delete,
    Login,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Required { field: Field, example: Option<&'static str> },
    NotANumber { field: Field },
    OutOfRange { field: Field, min: i64, max: i64 },
    TooLong { field: Field, max: usize },
    MustBePositive { field: Field },
    Selection { field: Field },
    RangeInverted { lower: Field, upper: Field },
    Loading,
    NoData,
    NoMatches,
    NoSample,
    ServiceUnreachable { base_url: String },
    DependencyUnavailable,
    ValidationFallback,
    UnexpectedStatus { status: u16 },
    UnexpectedResponse,
    // Text the backend sent back, shown as is.
    Server { text: String },
    Created { resource: Resource, id: String },
    Updated { resource: Resource },
    Deleted { resource: Resource },
    Failed { action: Action, resource: Resource },
    ConfirmDelete { resource: Resource },
    NoPendingDeletion,
    LoggedIn { name: String },
    LoggedOut,
}

pub trait MessageCatalog: Send + Sync {
    fn render(&self, message: &Message) -> String;
}

pub type SharedCatalog = Arc<dyn MessageCatalog>;

#[derive(Debug, Default, Clone, Copy)]
pub struct English;

impl English {
    pub fn shared() -> SharedCatalog {
        Arc::new(English)
    }

    fn field(field: Field) -> &'static str {
        match field {
            Field::State => "State",
            Field::City => "City",
            Field::Limit => "Limit",
            Field::CustomerId => "Customer ID",
            Field::OrderId => "Order ID",
            Field::CategoryId => "Category ID",
            Field::PaymentType => "Payment type",
            Field::PaymentValue => "Payment value",
            Field::OrderStatus => "Order status",
            Field::MinScore => "Min score",
            Field::MaxScore => "Max score",
            Field::ReviewScore => "Review score",
            Field::MinReviews => "Min reviews",
            Field::Customer => "Customer",
            Field::Username => "Username",
            Field::Password => "Password",
        }
    }

    fn resource(resource: Resource) -> &'static str {
        match resource {
            Resource::Order => "order",
            Resource::Review => "review",
            Resource::Customer => "customer",
            Resource::Product => "product",
            Resource::Payment => "payment",
            Resource::Analytics => "analytics",
            Resource::Query => "query",
            Resource::Schema => "schema",
            Resource::Totals => "dashboard",
            Resource::Session => "session",
        }
    }

    fn capitalized(resource: Resource) -> String {
        let name = Self::resource(resource);
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl MessageCatalog for English {
    fn render(&self, message: &Message) -> String {
        match message {
            Message::Required { field, example: Some(example) } => {
                format!("{} is required (e.g. {}).", Self::field(*field), example)
            }
            Message::Required { field, example: None } => {
                format!("{} is required.", Self::field(*field))
            }
            Message::NotANumber { field } => {
                format!("{} must be a valid number.", Self::field(*field))
            }
            Message::OutOfRange { field, min, max } => {
                format!("{} must be between {} and {}.", Self::field(*field), min, max)
            }
            Message::TooLong { field, max } => {
                format!("{} must not exceed {} characters.", Self::field(*field), max)
            }
            Message::MustBePositive { field } => {
                format!("{} must be greater than 0.", Self::field(*field))
            }
            Message::Selection { field } => {
                format!("Please select a value for {}.", Self::field(*field).to_lowercase())
            }
            Message::RangeInverted { lower, upper } => format!(
                "{} cannot be greater than {}.",
                Self::field(*lower),
                Self::field(*upper).to_lowercase()
            ),
            Message::Loading => "Loading...".to_string(),
            Message::NoData => "No data found.".to_string(),
            Message::NoMatches => "No rows match your search criteria.".to_string(),
            Message::NoSample => "No sample customer found.".to_string(),
            Message::ServiceUnreachable { base_url } => {
                format!("API not reachable. Is the backend running at {}?", base_url)
            }
            Message::DependencyUnavailable => {
                "API is running but the database connection failed.".to_string()
            }
            Message::ValidationFallback => {
                "Validation error. Please check your input.".to_string()
            }
            Message::UnexpectedStatus { status } => {
                format!("Unexpected error (HTTP {}).", status)
            }
            Message::UnexpectedResponse => "Unexpected response from the API.".to_string(),
            Message::Server { text } => text.clone(),
            Message::Created { resource, id } => format!(
                "{} created successfully! ID: {}",
                Self::capitalized(*resource),
                short_id(id)
            ),
            Message::Updated { resource } => {
                format!("{} updated successfully!", Self::capitalized(*resource))
            }
            Message::Deleted { resource } => {
                format!("{} deleted successfully!", Self::capitalized(*resource))
            }
            Message::Failed { action, resource } => {
                let verb = match action {
                    Action::Load => "load",
                    Action::Create => "create",
                    Action::Update => "update",
                    Action::Delete => "delete",
                    Action::Login => return "Login failed".to_string(),
                };
                let noun = match action {
                    Action::Load => format!("{} data", Self::resource(*resource)),
                    _ => Self::resource(*resource).to_string(),
                };
                format!("Failed to {} {}", verb, noun)
            }
            Message::ConfirmDelete { resource } => format!(
                "Are you sure you want to delete this {}? This action cannot be undone.",
                Self::resource(*resource)
            ),
            Message::NoPendingDeletion => {
                "Nothing to delete. Open the delete confirmation first.".to_string()
            }
            Message::LoggedIn { name } => format!("Welcome back, {}!", name),
            Message::LoggedOut => "You have been logged out.".to_string(),
        }
    }
}
