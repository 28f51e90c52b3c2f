mod support;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use budget_recon::{api, BudgetReportService};
use serde_json::{json, Value};
use std::sync::Arc;
use support::{material, po_payload, FakeSource, CORPORATION, PROJECT};
use tower::ServiceExt;

const REPORT: &str = "/api/reports/budget-vs-commitment";

async fn get(source: Arc<FakeSource>, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let app = api::router(Arc::new(BudgetReportService::new(source)));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

fn partial_source() -> FakeSource {
    FakeSource::with_project()
        .estimate("E1", "Approved", json!(true))
        .line_item("E1", "CC1", json!([material("I1", json!(10))]))
        .purchase_order("PO1", Some("V1"), "Approved")
        .po_item("PO1", po_payload("CC1", "I1", json!(4)))
        .vendor("V1", "Steel Co")
}

#[tokio::test]
async fn health_is_ok() {
    let (status, _, body) = get(Arc::new(FakeSource::default()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn missing_parameters_are_rejected_before_any_read() {
    let source = Arc::new(partial_source());
    for uri in [
        REPORT.to_string(),
        format!("{}?project_uuid={}", REPORT, PROJECT),
        format!("{}?corporation_uuid={}", REPORT, CORPORATION),
        format!("{}?project_uuid=&corporation_uuid={}", REPORT, CORPORATION),
    ] {
        let (status, _, body) = get(source.clone(), &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["success"], json!(false));
    }
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn malformed_query_is_json_bad_request() {
    let source = Arc::new(partial_source());
    for uri in [
        format!("{}?project_uuid=a&project_uuid=b&corporation_uuid={}", REPORT, CORPORATION),
        format!("{}/export?project_uuid=a&project_uuid=b&corporation_uuid={}", REPORT, CORPORATION),
    ] {
        let (status, content_type, body) = get(source.clone(), &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["success"], json!(false));
        assert!(body["message"].as_str().unwrap().starts_with("invalid query:"));
    }
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn report_returns_rows_as_data() {
    let uri = format!("{}?project_uuid={}&corporation_uuid={}", REPORT, PROJECT, CORPORATION);
    let (status, _, body) = get(Arc::new(partial_source()), &uri).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["budget_qty"].as_f64(), Some(10.0));
    assert_eq!(row["po_qty"].as_f64(), Some(4.0));
    assert_eq!(row["pending_qty"].as_f64(), Some(6.0));
    assert_eq!(row["status"], json!("Partial"));
    assert_eq!(row["vendor_name"], json!("Steel Co"));
    assert_eq!(row["project_label"], json!("Tower A #1042"));
}

#[tokio::test]
async fn unknown_project_is_empty_data() {
    let uri = format!("{}?project_uuid=nope&corporation_uuid={}", REPORT, CORPORATION);
    let (status, _, body) = get(Arc::new(FakeSource::default()), &uri).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn upstream_failure_is_server_error() {
    let uri = format!("{}?project_uuid={}&corporation_uuid={}", REPORT, PROJECT, CORPORATION);
    let (status, _, body) = get(Arc::new(partial_source().fail("estimates")), &uri).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body["message"],
        json!("failed to fetch estimates: estimates table unavailable")
    );
}

#[tokio::test]
async fn export_returns_csv() {
    let uri = format!(
        "{}/export?project_uuid={}&corporation_uuid={}&location=",
        REPORT, PROJECT, CORPORATION
    );
    let (status, content_type, body) = get(Arc::new(partial_source()), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/csv; charset=utf-8"));

    let text = String::from_utf8(body).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("corporation_name,project_label"));
    assert!(lines[1].ends_with(",10,4,6,Partial"));
}
