pub mod line_item;
pub mod project;
pub mod report;

pub use line_item::{CostCode, ItemIdentity, LineItem};
pub use project::{
    Corporation, Estimate, EstimateLineItemRow, ItemType, Location, PoItemRow, Project,
    PurchaseOrder, Vendor, APPROVED_ESTIMATE_STATUS, COMMITTED_PO_STATUSES,
};
pub use report::{BudgetStatus, Commitment, ReconciledRow, ReportResponse};
