use chrono::Utc;

use crate::{
    api::AnalyticsApi,
    error_classifier::ErrorClassifier,
    messages::{Action, Resource},
    models::{QueryInfo, QueryResult},
};

use super::state::{Banner, Snapshot, ViewState};

/// Showcase SQL queries: the catalog, plus the result of the last one executed.
pub struct QueriesPage {
    api: AnalyticsApi,
    errors: ErrorClassifier,
    catalog: ViewState<Vec<QueryInfo>>,
    result: ViewState<Option<QueryResult>>,
}

impl QueriesPage {
    pub fn new(api: AnalyticsApi, errors: ErrorClassifier) -> QueriesPage {
        QueriesPage {
            api,
            errors,
            catalog: ViewState::default(),
            result: ViewState::default(),
        }
    }

    pub fn catalog(&self) -> Snapshot<Vec<QueryInfo>> {
        self.catalog.snapshot(Utc::now())
    }

    pub fn result(&self) -> Snapshot<Option<QueryResult>> {
        self.result.snapshot(Utc::now())
    }

    #[tracing::instrument("Refreshing query catalog", skip(self))]
    pub async fn refresh(&self) {
        let ticket = self.catalog.begin();
        match self.api.queries().await {
            Ok(catalog) => {
                self.catalog.commit(ticket, catalog.queries);
            }
            Err(e) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Query);
                self.catalog.fail(ticket, Banner::error(text));
            }
        }
    }

    // A slower earlier execution must not replace a newer one's result.
    #[tracing::instrument("Executing showcase query", skip(self))]
    pub async fn execute(&self, query_id: &str) {
        let ticket = self.result.begin();
        match self.api.run_query(query_id).await {
            Ok(result) => {
                self.result.commit(ticket, Some(result));
            }
            Err(e) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Query);
                self.result
                    .fail_with(ticket, Banner::error(text), |result| *result = None);
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.catalog.dismiss_error();
        self.result.dismiss_error();
    }
}
