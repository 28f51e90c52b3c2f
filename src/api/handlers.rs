use crate::error::ReportError;
use crate::models::ReportResponse;
use crate::service::{export, BudgetReportService, ReportQuery, ReportRequest};
use axum::{
    extract::{rejection::QueryRejection, Json, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// 查询串解析失败与缺参同样以 JSON 400 返回
fn request(query: Result<Query<ReportQuery>, QueryRejection>) -> Result<ReportRequest, ReportError> {
    let Query(query) = query.map_err(|rejection| ReportError::InvalidQuery(rejection.body_text()))?;
    query.validate()
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 预算 vs 采购承诺 报表
pub async fn budget_vs_commitment(
    State(service): State<Arc<BudgetReportService>>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Response {
    let req = match request(query) {
        Ok(req) => req,
        Err(e) => return e.into_response(),
    };

    match service.budget_vs_commitment(&req).await {
        Ok(data) => (StatusCode::OK, Json(ReportResponse { data })).into_response(),
        Err(e) => {
            tracing::error!("Budget report for project {} failed: {}", req.project_uuid, e);
            e.into_response()
        }
    }
}

/// 同一报表导出为 CSV
pub async fn export_budget_vs_commitment(
    State(service): State<Arc<BudgetReportService>>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Response {
    let req = match request(query) {
        Ok(req) => req,
        Err(e) => return e.into_response(),
    };

    let rows = match service.budget_vs_commitment(&req).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Budget export for project {} failed: {}", req.project_uuid, e);
            return e.into_response();
        }
    };

    let mut body = Vec::new();
    if let Err(e) = export::write_csv(&rows, &mut body) {
        return ReportError::Internal(format!("CSV export failed: {}", e)).into_response();
    }

    let filename = format!(
        "budget-vs-commitment-{}.csv",
        chrono::Local::now().format("%Y%m%d%H%M%S")
    );
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", filename)),
        ],
        body,
    )
        .into_response()
}
