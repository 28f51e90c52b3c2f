pub mod aggregator;
pub mod export;
pub mod normalizer;
pub mod reconciler;
pub mod report;

pub use normalizer::{Lookups, Normalizer};
pub use reconciler::ReportContext;
pub use report::{BudgetReportService, ReportQuery, ReportRequest};
