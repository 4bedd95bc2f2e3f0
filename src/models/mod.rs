mod analytics;
mod customer;
mod order;
mod payment;
mod product;
mod review;
mod session;

pub use analytics::{
    BackendHealth, CategoryRevenue, DashboardTotals, ForeignKey, FunnelStage, QueryCatalog,
    QueryInfo, QueryResult, SalesTrendPoint, Satisfaction, SchemaData, SellerReviewDelivery,
    SellerRevenue, TableInfo,
};
pub use customer::{Customer, CustomerOption, StateCount, TopCity};
pub use order::{CreatedOrder, CustomerOrder, NewOrder, Order, OrderStats, OrderUpdate, SampleCustomers};
pub use payment::{Payment, PaymentStats, PaymentTypeShare, PaymentsByType};
pub use product::{CategoryCount, Product, ProductStats};
pub use review::{CreatedReview, NewReview, Review, ReviewScoreStats, ReviewUpdate, ScoreCount};
pub use session::{AuthStatus, LoginResponse, SessionUser};
