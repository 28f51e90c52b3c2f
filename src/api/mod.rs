pub mod handlers;

pub use handlers::*;

use crate::service::BudgetReportService;
use axum::{routing::get, Router};
use std::sync::Arc;

/// 报表路由
pub fn router(service: Arc<BudgetReportService>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/reports/budget-vs-commitment", get(handlers::budget_vs_commitment))
        .route("/api/reports/budget-vs-commitment/export", get(handlers::export_budget_vs_commitment))
        .with_state(service)
}
