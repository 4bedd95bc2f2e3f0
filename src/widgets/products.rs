use crate::{
    api::ProductsApi,
    domain::{CategoryId, Limit, LimitBounds},
    error_classifier::ErrorClassifier,
    models::{CategoryCount, Product},
    utils::{group_thousands, short_id},
    views::{TableRow, WidgetView},
};

use super::{invalid, rows};

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl TableRow for Product {
    const HEADERS: &'static [&'static str] = &[
        "Product ID",
        "Category",
        "Name Length",
        "Description Length",
        "Photos",
        "Weight (g)",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            short_id(&self.product_id),
            optional(self.product_category_name.as_deref()),
            optional(self.product_name_length),
            optional(self.product_description_length),
            optional(self.product_photos_qty),
            optional(self.product_weight_g),
        ]
    }
}

impl TableRow for CategoryCount {
    const HEADERS: &'static [&'static str] = &["Category", "Product Count"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.product_category_name.clone(),
            group_thousands(self.product_count),
        ]
    }
}

#[derive(Clone)]
pub struct ProductWidgets {
    api: ProductsApi,
    errors: ErrorClassifier,
}

impl ProductWidgets {
    pub fn new(api: ProductsApi, errors: ErrorClassifier) -> ProductWidgets {
        Self { api, errors }
    }

    #[tracing::instrument("Loading products by category", skip(self))]
    pub async fn load_products_by_category(&self, category_id: &str, limit: Option<&str>) -> WidgetView {
        let parsed = CategoryId::parse(category_id).and_then(|category_id| {
            let limit = Limit::parse(limit, LimitBounds::PRODUCTS_BY_CATEGORY)?;
            Ok((category_id, limit))
        });
        let (category_id, limit) = match parsed {
            Ok(parsed) => parsed,
            Err(message) => return invalid(&self.errors, message),
        };
        rows(&self.errors, self.api.by_category(&category_id, limit).await)
    }

    #[tracing::instrument("Loading top categories", skip(self))]
    pub async fn load_top_categories(&self) -> WidgetView {
        rows(&self.errors, self.api.top_categories().await)
    }
}
