use crate::db::ReportSource;
use crate::error::{ReportError, SourceError};
use crate::models::{CostCode, ItemType, Location, PoItemRow, ReconciledRow, Vendor};
use crate::service::aggregator::{aggregate_budget, aggregate_commitments, vendor_by_po};
use crate::service::normalizer::{Lookups, Normalizer};
use crate::service::reconciler::{reconcile, ReportContext};
use futures::future;
use indexmap::IndexSet;
use serde::Deserialize;
use std::sync::Arc;

/// 查询参数 (全部可选, 空串视为缺失)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    pub project_uuid: Option<String>,
    pub corporation_uuid: Option<String>,
    pub vendor_uuid: Option<String>,
    pub location: Option<String>,
}

/// 校验后的请求
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub project_uuid: String,
    pub corporation_uuid: String,
    pub vendor_uuid: Option<String>,
    pub location: Option<String>,
}

impl ReportQuery {
    pub fn validate(self) -> Result<ReportRequest, ReportError> {
        Ok(ReportRequest {
            project_uuid: present(self.project_uuid)
                .ok_or(ReportError::MissingParameter("project_uuid"))?,
            corporation_uuid: present(self.corporation_uuid)
                .ok_or(ReportError::MissingParameter("corporation_uuid"))?,
            vendor_uuid: present(self.vendor_uuid),
            location: present(self.location),
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// 预算 vs 采购承诺 报表服务
pub struct BudgetReportService {
    source: Arc<dyn ReportSource>,
}

impl BudgetReportService {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self { source }
    }

    /// 报表入口: 读取 -> 规范化 -> 聚合 -> 对账
    pub async fn budget_vs_commitment(&self, req: &ReportRequest) -> Result<Vec<ReconciledRow>, ReportError> {
        let project_uuid = req.project_uuid.as_str();
        let corporation_uuid = req.corporation_uuid.as_str();
        let source = self.source.as_ref();

        // Round 1: 项目
        let project = source
            .project(project_uuid, corporation_uuid)
            .await
            .map_err(ReportError::upstream("project"))?;
        let Some(project) = project else {
            tracing::warn!("[budget-report] project {} not found in corporation {}", project_uuid, corporation_uuid);
            return Ok(Vec::new());
        };

        // Round 2: 互不依赖的读取并发
        let (corporation, estimates, item_types, locations, purchase_orders) = future::join5(
            source.corporation(corporation_uuid),
            source.estimates(project_uuid, corporation_uuid),
            source.item_types(project_uuid, corporation_uuid),
            source.locations(),
            source.purchase_orders(project_uuid, corporation_uuid, req.vendor_uuid.as_deref()),
        )
        .await;

        let estimates = estimates.map_err(ReportError::upstream("estimates"))?;
        let approved: Vec<String> = estimates
            .iter()
            .filter(|e| e.is_reportable())
            .map(|e| e.uuid.clone())
            .collect();

        tracing::info!(
            "[budget-report] project {}: {} estimates, {} approved and active",
            project_uuid, estimates.len(), approved.len()
        );
        if approved.is_empty() {
            return Ok(Vec::new());
        }

        let purchase_orders = purchase_orders.map_err(ReportError::upstream("purchase orders"))?;
        let po_uuids: Vec<String> = purchase_orders.iter().map(|po| po.uuid.clone()).collect();
        let vendor_uuids: Vec<String> = purchase_orders
            .iter()
            .filter_map(|po| po.vendor_uuid.clone())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();

        // Round 3: 估算明细 / 采购明细 / 供应商
        let (line_items, po_items, vendors) = future::join3(
            source.estimate_line_items(project_uuid, corporation_uuid, &approved),
            async {
                if po_uuids.is_empty() {
                    Ok(Vec::new())
                } else {
                    source.po_items(&po_uuids).await
                }
            },
            async {
                if vendor_uuids.is_empty() {
                    Ok(Vec::new())
                } else {
                    source.vendors(&vendor_uuids).await
                }
            },
        )
        .await;

        let line_items = line_items.map_err(ReportError::upstream("estimate line items"))?;
        let po_items: Vec<PoItemRow> = po_items.map_err(ReportError::upstream("purchase order items"))?;

        // 展示信息读取失败只降级
        let corporation_name = match corporation {
            Ok(Some(c)) => c.name.filter(|n| !n.is_empty()),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("[budget-report] corporation {} lookup failed: {}", corporation_uuid, e);
                None
            }
        };
        let item_types: Vec<ItemType> = optional(item_types, "item types");
        let locations: Vec<Location> = optional(locations, "locations");
        let vendors: Vec<Vendor> = optional(vendors, "vendors");

        let lookups = Lookups::new(&item_types, &locations);
        let normalizer = Normalizer::new(&lookups);

        let budget = aggregate_budget(line_items.iter().flat_map(|row| {
            let cost_code = CostCode {
                id: row.cost_code_uuid.clone(),
                number: row.cost_code_number.clone().unwrap_or_default(),
                name: row.cost_code_name.clone().unwrap_or_default(),
                division: row.division_name.clone().unwrap_or_default(),
            };
            row.raw_items()
                .iter()
                .map(|raw| normalizer.estimate_item(&cost_code, raw))
                .collect::<Vec<_>>()
        }));

        let context = ReportContext {
            corporation_name: corporation_name.unwrap_or_else(|| "N/A".to_string()),
            project_label: project.label(),
            vendor_names: vendors
                .into_iter()
                .filter_map(|v| v.name.map(|name| (v.uuid, name)))
                .collect(),
        };

        let rows = if purchase_orders.is_empty() {
            tracing::info!("[budget-report] project {}: no qualifying purchase orders", project_uuid);
            reconcile(&budget, None, &context, req.location.as_deref())
        } else {
            let vendor_of = vendor_by_po(&purchase_orders);
            let commitments = aggregate_commitments(po_items.iter().map(|row| {
                let vendor_id = row
                    .purchase_order_uuid
                    .as_deref()
                    .and_then(|po| vendor_of.get(po).copied().flatten())
                    .map(str::to_string);
                (normalizer.po_item(&row.payload), vendor_id)
            }));
            tracing::debug!(
                "[budget-report] project {}: {} budget buckets, {} commitment buckets",
                project_uuid, budget.len(), commitments.len()
            );
            reconcile(&budget, Some(&commitments), &context, req.location.as_deref())
        };

        tracing::info!(
            "[budget-report] project {}: {} purchase orders, {} PO items, {} rows",
            project_uuid, purchase_orders.len(), po_items.len(), rows.len()
        );

        Ok(rows)
    }
}

fn optional<T>(result: Result<Vec<T>, SourceError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!("[budget-report] {} lookup failed, continuing without: {}", what, e);
        Vec::new()
    })
}
