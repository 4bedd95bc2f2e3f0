use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Product{
    pub product_id: String,
    #[serde(default)]
    pub product_category_name: Option<String>,
    #[serde(default)]
    pub product_name_length: Option<i64>,
    #[serde(default)]
    pub product_description_length: Option<i64>,
    #[serde(default)]
    pub product_photos_qty: Option<i64>,
    #[serde(default)]
    pub product_weight_g: Option<f64>,
    #[serde(default)]
    pub product_length_cm: Option<f64>,
    #[serde(default)]
    pub product_width_cm: Option<f64>,
    #[serde(default)]
    pub product_height_cm: Option<f64>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CategoryCount{
    #[serde(alias = "category_name")]
    pub product_category_name: String,
    #[serde(alias = "count")]
    pub product_count: i64
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ProductStats{
    pub total_products: i64,
    pub total_categories: i64
}
