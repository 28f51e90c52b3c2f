use crate::models::{BudgetStatus, Commitment, ItemIdentity, LineItem, ReconciledRow};
use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexMap;
use std::collections::HashMap;

const NOT_AVAILABLE: &str = "N/A";

/// 每次请求只构建一次的展示上下文
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub corporation_name: String,
    pub project_label: String,
    pub vendor_names: HashMap<String, String>,
}

impl Default for ReportContext {
    fn default() -> Self {
        Self {
            corporation_name: NOT_AVAILABLE.to_string(),
            project_label: NOT_AVAILABLE.to_string(),
            vendor_names: HashMap::new(),
        }
    }
}

impl ReportContext {
    fn vendor_name(&self, vendor_id: Option<&str>) -> String {
        vendor_id
            .and_then(|id| self.vendor_names.get(id))
            .filter(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

/// 状态阈值: 预算与采购均为 0 时仍是 Pending
pub fn derive_status(budget_qty: &BigDecimal, po_qty: &BigDecimal) -> BudgetStatus {
    let zero = BigDecimal::zero();
    if *po_qty > zero && po_qty < budget_qty {
        BudgetStatus::Partial
    } else if po_qty >= budget_qty && *budget_qty > zero {
        BudgetStatus::Complete
    } else {
        BudgetStatus::Pending
    }
}

/// 预算桶与采购承诺按匹配键对齐。commitments 为 None 表示没有任何合格采购单
pub fn reconcile(
    budget: &IndexMap<ItemIdentity, LineItem>,
    commitments: Option<&HashMap<ItemIdentity, Commitment>>,
    context: &ReportContext,
    location_filter: Option<&str>,
) -> Vec<ReconciledRow> {
    let zero = BigDecimal::zero();

    let rows = budget.iter().map(|(identity, item)| {
        let Some(commitments) = commitments else {
            return row(item, context, zero.clone(), None);
        };
        match commitments.get(identity) {
            Some(c) => row(item, context, c.quantity.clone(), c.vendor_id.as_deref()),
            None => row(item, context, zero.clone(), None),
        }
    });

    // 过滤在聚合和状态计算之后
    match location_filter {
        Some(filter) => {
            let filter = filter.to_lowercase();
            rows.filter(|r| r.location.to_lowercase() == filter).collect()
        }
        None => rows.collect(),
    }
}

fn row(
    item: &LineItem,
    context: &ReportContext,
    po_qty: BigDecimal,
    vendor_id: Option<&str>,
) -> ReconciledRow {
    let budget_qty = item.quantity.clone();
    let pending = &budget_qty - &po_qty;
    let pending_qty = if pending < BigDecimal::zero() {
        BigDecimal::zero()
    } else {
        pending
    };
    let status = derive_status(&budget_qty, &po_qty);

    ReconciledRow {
        corporation_name: context.corporation_name.clone(),
        project_label: context.project_label.clone(),
        cost_code_label: item.cost_code_label.clone(),
        vendor_name: context.vendor_name(vendor_id),
        sequence: item.sequence.clone(),
        item_type_label: item.item_type_label.clone(),
        item_name: item.item_name.clone(),
        description: item.description.clone(),
        location: item.display_location().to_string(),
        budget_qty,
        po_qty,
        pending_qty,
        status,
    }
}
