use chrono::Utc;

use crate::{
    api::AnalyticsApi,
    error_classifier::ErrorClassifier,
    messages::{Action, Resource},
    models::SchemaData,
};

use super::state::{Banner, Snapshot, ViewState};

pub struct SchemaPage {
    api: AnalyticsApi,
    errors: ErrorClassifier,
    state: ViewState<Option<SchemaData>>,
}

impl SchemaPage {
    pub fn new(api: AnalyticsApi, errors: ErrorClassifier) -> SchemaPage {
        SchemaPage {
            api,
            errors,
            state: ViewState::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<Option<SchemaData>> {
        self.state.snapshot(Utc::now())
    }

    #[tracing::instrument("Refreshing schema page", skip(self))]
    pub async fn refresh(&self) {
        let ticket = self.state.begin();
        match self.api.schema().await {
            Ok(schema) => {
                self.state.commit(ticket, Some(schema));
            }
            Err(e) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Schema);
                self.state.fail(ticket, Banner::error(text));
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.state.dismiss_error();
    }
}
