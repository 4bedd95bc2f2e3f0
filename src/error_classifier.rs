use crate::{
    api::ApiError,
    messages::{Action, Message, Resource, SharedCatalog},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorClass {
    ServiceUnreachable,
    DependencyUnavailable,
    Validation { message: Option<String> },
    Server { status: u16, message: Option<String> },
    UnexpectedResponse,
}

// First match wins; a 503 never looks at the body.
pub fn classify(error: &ApiError) -> ErrorClass {
    match error {
        ApiError::Unreachable(_) => ErrorClass::ServiceUnreachable,
        ApiError::Status { status: 503, .. } => ErrorClass::DependencyUnavailable,
        ApiError::Status {
            status: 400 | 422,
            message,
        } => ErrorClass::Validation {
            message: message.clone(),
        },
        ApiError::Status { status, message } => ErrorClass::Server {
            status: *status,
            message: message.clone(),
        },
        ApiError::Decode(_) => ErrorClass::UnexpectedResponse,
    }
}

impl ErrorClass {
    pub fn message(self, base_url: &str) -> Message {
        match self {
            ErrorClass::ServiceUnreachable => Message::ServiceUnreachable {
                base_url: base_url.to_string(),
            },
            ErrorClass::DependencyUnavailable => Message::DependencyUnavailable,
            ErrorClass::Validation { message: Some(text) } => Message::Server { text },
            ErrorClass::Validation { message: None } => Message::ValidationFallback,
            ErrorClass::Server {
                message: Some(text),
                ..
            } => Message::Server { text },
            ErrorClass::Server {
                status,
                message: None,
            } => Message::UnexpectedStatus { status },
            ErrorClass::UnexpectedResponse => Message::UnexpectedResponse,
        }
    }
}

/// Turns backend failures into the text users see.
#[derive(Clone)]
pub struct ErrorClassifier {
    base_url: String,
    catalog: SharedCatalog,
}

impl ErrorClassifier {
    pub fn new(base_url: impl Into<String>, catalog: SharedCatalog) -> ErrorClassifier {
        Self {
            base_url: base_url.into(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    pub fn render(&self, message: &Message) -> String {
        self.catalog.render(message)
    }

    // Used by widgets: every class maps straight to its message.
    pub fn describe(&self, error: &ApiError) -> String {
        self.render(&classify(error).message(&self.base_url))
    }

    // Used by pages: the server's own message wins, then the per-action fallback.
    // Unreachable and 503 keep their fixed text.
    pub fn describe_failure(&self, error: &ApiError, action: Action, resource: Resource) -> String {
        let message = match classify(error) {
            class @ (ErrorClass::ServiceUnreachable | ErrorClass::DependencyUnavailable) => {
                class.message(&self.base_url)
            }
            ErrorClass::Validation { message: Some(text) }
            | ErrorClass::Server {
                message: Some(text),
                ..
            } => Message::Server { text },
            _ => Message::Failed { action, resource },
        };
        self.render(&message)
    }
}
