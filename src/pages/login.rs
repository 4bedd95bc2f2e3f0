use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    api::AuthApi,
    domain::Username,
    error_classifier::ErrorClassifier,
    messages::{Action, Field, Message, Resource},
    models::AuthStatus,
};

use super::{
    form::{Submission, Validator},
    state::{Banner, Snapshot, ViewState},
};

#[derive(Deserialize, Debug)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    pub password: SecretString,
}

/// The dashboard's single backend session.
pub struct LoginPage {
    api: AuthApi,
    errors: ErrorClassifier,
    state: ViewState<AuthStatus>,
}

impl LoginPage {
    pub fn new(api: AuthApi, errors: ErrorClassifier) -> LoginPage {
        LoginPage {
            api,
            errors,
            state: ViewState::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<AuthStatus> {
        self.state.snapshot(Utc::now())
    }

    #[tracing::instrument("Refreshing session status", skip(self))]
    pub async fn refresh(&self) {
        let ticket = self.state.begin();
        match self.api.me().await {
            Ok(status) => {
                self.state.commit(ticket, status);
            }
            // Not being logged in is reported as 401 by some backends.
            Err(e) if e.status() == Some(401) => {
                self.state.commit(ticket, AuthStatus::default());
            }
            Err(e) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Session);
                self.state.fail(ticket, Banner::error(text));
            }
        }
    }

    #[tracing::instrument("Logging in from form", skip(self, form), fields(username = %form.username))]
    pub async fn login(&self, form: &LoginForm) -> Submission {
        let mut validator = Validator::new(self.errors.catalog());
        let username = validator.check(Field::Username, Username::parse(&form.username));
        let password = validator.check(
            Field::Password,
            if form.password.expose_secret().is_empty() {
                Err(Message::Required {
                    field: Field::Password,
                    example: None,
                })
            } else {
                Ok(&form.password)
            },
        );
        let (Some(username), Some(password)) = (username, password) else {
            return Submission::Rejected(validator.into_errors());
        };

        let ticket = self.state.begin();
        match self.api.login(&username, password).await {
            Ok(user) => {
                let text = self.errors.render(&Message::LoggedIn {
                    name: user.name.clone(),
                });
                self.state.commit_announcing(
                    ticket,
                    AuthStatus {
                        logged_in: true,
                        user: Some(user),
                    },
                    Banner::success(text),
                );
                Submission::Accepted
            }
            Err(e) => {
                let text = self.errors.describe_failure(&e, Action::Login, Resource::Session);
                self.state.fail(ticket, Banner::error(text));
                Submission::Failed
            }
        }
    }

    #[tracing::instrument("Logging out", skip(self))]
    pub async fn logout(&self) -> Submission {
        let ticket = self.state.begin();
        match self.api.logout().await {
            Ok(()) => {
                let text = self.errors.render(&Message::LoggedOut);
                self.state
                    .commit_announcing(ticket, AuthStatus::default(), Banner::success(text));
                Submission::Accepted
            }
            Err(e) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Session);
                self.state.fail(ticket, Banner::error(text));
                Submission::Failed
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.state.dismiss_error();
    }
}
