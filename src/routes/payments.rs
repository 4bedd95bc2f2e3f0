use actix_web::{web, HttpResponse};
use askama::Template;

use crate::{
    domain::PaymentMethod,
    messages::Message,
    pages::{payments::PaymentFilter, Pages},
    utils::{group_thousands, two_decimals},
};

use super::{render, see_other, Chrome};

pub struct ShareRow {
    pub label: String,
    pub count: String,
    pub total: String,
    pub width: u32,
}

#[derive(Template)]
#[template(path = "payments.html")]
struct PaymentsTemplate {
    chrome: Chrome,
    totals: Option<(String, String, String)>,
    filter: String,
    shares: Vec<ShareRow>,
    empty_message: String,
}

#[tracing::instrument("Showing payments page", skip(pages))]
pub async fn payments_page(
    pages: web::Data<Pages>,
    query: web::Query<PaymentFilter>,
) -> Result<HttpResponse, actix_web::Error> {
    pages.payments.refresh().await;
    let snapshot = pages.payments.snapshot();

    let (totals, shares) = match snapshot.data {
        Some(stats) => {
            let shares = query
                .apply(&stats.payment_types)
                .into_iter()
                .map(|share| ShareRow {
                    label: PaymentMethod::parse(&share.payment_type)
                        .map(|m| m.label().to_string())
                        .unwrap_or_else(|_| share.payment_type.clone()),
                    count: group_thousands(share.count),
                    total: two_decimals(share.total),
                    width: if stats.total_payments > 0 {
                        (share.count as f64 * 100.0 / stats.total_payments as f64).round() as u32
                    } else {
                        0
                    },
                })
                .collect();
            let totals = (
                group_thousands(stats.total_payments),
                two_decimals(stats.total_value),
                two_decimals(stats.avg_payment_value),
            );
            (Some(totals), shares)
        }
        None => (None, Vec::new()),
    };

    render(&PaymentsTemplate {
        chrome: Chrome::new("Payments", "payments")
            .banner(snapshot.banner)
            .dismiss_with("/payments/dismiss-error")
            .loading(snapshot.loading),
        totals,
        filter: query.payment_type.clone(),
        shares,
        empty_message: pages.text(&Message::NoData),
    })
}

#[tracing::instrument("Dismissing payments error", skip(pages))]
pub async fn dismiss_payments_error(pages: web::Data<Pages>) -> HttpResponse {
    pages.payments.dismiss_error();
    see_other("/payments")
}
