use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// 上游读取失败
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Unavailable(String),
}

/// 报表请求级错误
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{0} is required")]
    MissingParameter(&'static str),
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("failed to fetch {entity}: {source}")]
    Upstream {
        entity: &'static str,
        #[source]
        source: SourceError,
    },
    #[error("{0}")]
    Internal(String),
}

impl ReportError {
    pub fn upstream(entity: &'static str) -> impl FnOnce(SourceError) -> Self {
        move |source| Self::Upstream { entity, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let response = ErrorResponse {
            success: false,
            message: self.to_string(),
        };
        (self.status_code(), Json(response)).into_response()
    }
}
