use chrono::Utc;

use crate::{
    api::AnalyticsApi,
    error_classifier::ErrorClassifier,
    messages::{Action, Resource},
    models::{BackendHealth, DashboardTotals},
};

use super::state::{Banner, Snapshot, ViewState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub totals: Option<DashboardTotals>,
    pub health: Option<BackendHealth>,
    // Set when `/health` itself could not be read.
    pub health_error: Option<String>,
}

pub struct DashboardPage {
    api: AnalyticsApi,
    errors: ErrorClassifier,
    state: ViewState<DashboardData>,
}

impl DashboardPage {
    pub fn new(api: AnalyticsApi, errors: ErrorClassifier) -> DashboardPage {
        DashboardPage {
            api,
            errors,
            state: ViewState::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<DashboardData> {
        self.state.snapshot(Utc::now())
    }

    #[tracing::instrument("Refreshing dashboard", skip(self))]
    pub async fn refresh(&self) {
        let ticket = self.state.begin();
        let (totals, health) = futures_util::join!(self.api.totals(), self.api.health());

        let (health, health_error) = match health {
            Ok(health) => (Some(health), None),
            Err(e) => (None, Some(self.errors.describe(&e))),
        };

        match totals {
            Ok(totals) => {
                self.state.commit(
                    ticket,
                    DashboardData {
                        totals: Some(totals),
                        health,
                        health_error,
                    },
                );
            }
            Err(e) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Totals);
                self.state.fail_with(ticket, Banner::error(text), |data| {
                    data.health = health;
                    data.health_error = health_error;
                });
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.state.dismiss_error();
    }
}
