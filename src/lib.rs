pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use db::{create_pool, PgReportSource, ReportSource};
pub use error::{ReportError, SourceError};
pub use service::BudgetReportService;
