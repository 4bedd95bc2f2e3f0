use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SalesTrendPoint{
    pub month: String,
    pub orders: i64,
    pub revenue: f64
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Satisfaction{
    pub avg_score: f64,
    pub positive_pct: f64,
    pub neutral_pct: f64,
    pub negative_pct: f64,
    pub total_reviews: i64
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CategoryRevenue{
    pub category_name: String,
    pub items_sold: i64,
    pub distinct_orders: i64,
    pub total_revenue: f64,
    #[serde(default)]
    pub avg_item_price: Option<f64>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SellerRevenue{
    pub seller_id: String,
    #[serde(default)]
    pub seller_city: Option<String>,
    #[serde(default)]
    pub seller_state: Option<String>,
    pub order_count: i64,
    pub items_sold: i64,
    pub total_revenue: f64,
    #[serde(default)]
    pub avg_item_price: Option<f64>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SellerReviewDelivery{
    pub seller_id: String,
    #[serde(default)]
    pub seller_city: Option<String>,
    #[serde(default)]
    pub seller_state: Option<String>,
    pub review_count: i64,
    #[serde(default)]
    pub avg_review_score: Option<f64>,
    #[serde(default)]
    pub avg_delivery_days: Option<f64>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FunnelStage{
    pub order_status: String,
    pub order_count: i64,
    #[serde(default)]
    pub avg_delivery_days: Option<f64>,
    #[serde(default)]
    pub avg_approval_days: Option<f64>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct QueryInfo{
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub endpoint: Option<String>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct QueryCatalog{
    #[serde(default)]
    pub queries: Vec<QueryInfo>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct QueryResult{
    pub query_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sql: String,
    #[serde(default)]
    pub results: Vec<Map<String, Value>>,
    #[serde(default)]
    pub tables_used: Vec<String>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ForeignKey{
    pub column: String,
    pub references: String
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TableInfo{
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub pk: String,
    #[serde(default)]
    pub fk: Vec<ForeignKey>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SchemaData{
    #[serde(default)]
    pub tables: Vec<TableInfo>,
    #[serde(default)]
    pub relationships: Vec<String>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct DashboardTotals{
    pub customers: i64,
    pub orders: i64,
    pub products: i64,
    pub reviews: i64
}

// `/health` of the backend. Table counts may be numbers or "error: ..." strings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct BackendHealth{
    #[serde(default)]
    pub api_status: String,
    #[serde(default)]
    pub db_connected: bool,
    #[serde(default)]
    pub table_counts: BTreeMap<String, Value>,
    #[serde(default)]
    pub errors: Vec<String>
}
