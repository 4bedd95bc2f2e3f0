use chrono::Utc;

use crate::{
    api::AnalyticsApi,
    error_classifier::ErrorClassifier,
    messages::{Action, Resource},
    models::{SalesTrendPoint, Satisfaction},
};

use super::state::{Banner, Snapshot, ViewState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsData {
    pub sales_trend: Vec<SalesTrendPoint>,
    pub satisfaction: Option<Satisfaction>,
}

impl AnalyticsData {
    // Bar widths for the revenue chart, relative to the best month.
    pub fn revenue_shares(&self) -> Vec<(String, f64, u32)> {
        let peak = self
            .sales_trend
            .iter()
            .map(|point| point.revenue)
            .fold(0.0_f64, f64::max);
        self.sales_trend
            .iter()
            .map(|point| {
                let width = if peak > 0.0 {
                    (point.revenue / peak * 100.0).round() as u32
                } else {
                    0
                };
                (point.month.clone(), point.revenue, width)
            })
            .collect()
    }
}

pub struct AnalyticsPage {
    api: AnalyticsApi,
    errors: ErrorClassifier,
    state: ViewState<AnalyticsData>,
}

impl AnalyticsPage {
    pub fn new(api: AnalyticsApi, errors: ErrorClassifier) -> AnalyticsPage {
        AnalyticsPage {
            api,
            errors,
            state: ViewState::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<AnalyticsData> {
        self.state.snapshot(Utc::now())
    }

    #[tracing::instrument("Refreshing analytics page", skip(self))]
    pub async fn refresh(&self) {
        let ticket = self.state.begin();
        let (sales_trend, satisfaction) =
            futures_util::join!(self.api.sales_trend(), self.api.satisfaction());

        match (sales_trend, satisfaction) {
            (Ok(sales_trend), Ok(satisfaction)) => {
                self.state.commit(
                    ticket,
                    AnalyticsData {
                        sales_trend,
                        satisfaction: Some(satisfaction),
                    },
                );
            }
            (Err(e), _) | (_, Err(e)) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Analytics);
                self.state.fail(ticket, Banner::error(text));
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.state.dismiss_error();
    }
}
