use chrono::Utc;
use serde::Deserialize;

use crate::{
    api::ProductsApi,
    error_classifier::ErrorClassifier,
    messages::{Action, Resource},
    models::{CategoryCount, Product, ProductStats},
};

use super::state::{Banner, Snapshot, ViewState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsData {
    pub stats: Option<ProductStats>,
    pub top_categories: Vec<CategoryCount>,
    pub products: Vec<Product>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProductFilter {
    #[serde(default)]
    pub search: String,
}

impl ProductFilter {
    pub const SHOWN: usize = 20;

    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let term = self.search.trim().to_lowercase();
        products
            .iter()
            .filter(|p| {
                term.is_empty()
                    || p.product_id.to_lowercase().contains(&term)
                    || p
                        .product_category_name
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&term))
            })
            .take(Self::SHOWN)
            .cloned()
            .collect()
    }
}

pub struct ProductsPage {
    api: ProductsApi,
    errors: ErrorClassifier,
    state: ViewState<ProductsData>,
}

impl ProductsPage {
    pub const LIST_LIMIT: u32 = 50;

    pub fn new(api: ProductsApi, errors: ErrorClassifier) -> ProductsPage {
        ProductsPage {
            api,
            errors,
            state: ViewState::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<ProductsData> {
        self.state.snapshot(Utc::now())
    }

    #[tracing::instrument("Refreshing products page", skip(self))]
    pub async fn refresh(&self) {
        let ticket = self.state.begin();
        let (stats, top_categories, products) = futures_util::join!(
            self.api.stats(),
            self.api.top_categories(),
            self.api.list(Self::LIST_LIMIT)
        );

        match (stats, top_categories, products) {
            (Ok(stats), Ok(top_categories), Ok(products)) => {
                self.state.commit(
                    ticket,
                    ProductsData {
                        stats: Some(stats),
                        top_categories,
                        products,
                    },
                );
            }
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                let text = self.errors.describe_failure(&e, Action::Load, Resource::Product);
                self.state.fail(ticket, Banner::error(text));
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.state.dismiss_error();
    }
}
