use crate::messages::{Field, Message, SharedCatalog};

/// Per-field validation messages of a rejected form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(Vec<(Field, String)>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, text)| text.as_str())
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, text)| text.as_str())
    }
}

/// Collects every field's outcome so the form can report all problems at once.
pub struct Validator<'a> {
    catalog: &'a SharedCatalog,
    errors: FieldErrors,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a SharedCatalog) -> Validator<'a> {
        Validator {
            catalog,
            errors: FieldErrors::default(),
        }
    }

    pub fn check<T>(&mut self, field: Field, outcome: Result<T, Message>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.errors.0.push((field, self.catalog.render(&message)));
                None
            }
        }
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The backend accepted the change and the page re-fetched.
    Accepted,
    /// Validation failed; nothing was sent.
    Rejected(FieldErrors),
    /// The backend refused or could not be reached; an error banner is up.
    Failed,
}
