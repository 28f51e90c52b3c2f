#![allow(dead_code)]

use async_trait::async_trait;
use budget_recon::models::{
    Corporation, Estimate, EstimateLineItemRow, ItemType, Location, PoItemRow, Project,
    PurchaseOrder, Vendor,
};
use budget_recon::{ReportSource, SourceError};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const PROJECT: &str = "3f1c2a9e-7b4d-4e21-9a6f-1d2c3b4a5e6f";
pub const CORPORATION: &str = "8a7b6c5d-4e3f-4a2b-9c1d-0e9f8a7b6c5d";

/// 内存里的上游数据
#[derive(Default)]
pub struct FakeSource {
    pub project: Option<Project>,
    pub corporation: Option<Corporation>,
    pub estimates: Vec<Estimate>,
    pub item_types: Vec<ItemType>,
    pub locations: Vec<Location>,
    pub line_items: Vec<EstimateLineItemRow>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub po_items: Vec<PoItemRow>,
    pub vendors: Vec<Vendor>,
    /// 这些读取返回错误
    pub failing: HashSet<&'static str>,
    pub calls: AtomicUsize,
}

impl FakeSource {
    pub fn with_project() -> Self {
        Self {
            project: Some(Project {
                uuid: PROJECT.into(),
                name: Some("Tower A".into()),
                display_id: Some("1042".into()),
                corporation_uuid: Some(CORPORATION.into()),
            }),
            corporation: Some(Corporation { name: Some("Acme Builders".into()) }),
            ..Default::default()
        }
    }

    pub fn estimate(mut self, uuid: &str, status: &str, is_active: Value) -> Self {
        self.estimates.push(Estimate {
            uuid: uuid.into(),
            status: Some(status.into()),
            is_active: Some(is_active),
        });
        self
    }

    pub fn line_item(mut self, estimate_uuid: &str, cost_code: &str, items: Value) -> Self {
        let id = self.line_items.len() as i64 + 1;
        self.line_items.push(EstimateLineItemRow {
            id,
            estimate_uuid: Some(estimate_uuid.into()),
            cost_code_uuid: Some(cost_code.into()),
            cost_code_number: Some("01-100".into()),
            cost_code_name: Some("General".into()),
            division_name: Some("General Requirements".into()),
            items: Some(items),
        });
        self
    }

    pub fn purchase_order(mut self, uuid: &str, vendor: Option<&str>, status: &str) -> Self {
        self.purchase_orders.push(PurchaseOrder {
            uuid: uuid.into(),
            vendor_uuid: vendor.map(str::to_string),
            status: Some(status.into()),
        });
        self
    }

    pub fn po_item(mut self, purchase_order_uuid: &str, payload: Value) -> Self {
        self.po_items.push(PoItemRow {
            purchase_order_uuid: Some(purchase_order_uuid.into()),
            payload,
        });
        self
    }

    pub fn vendor(mut self, uuid: &str, name: &str) -> Self {
        self.vendors.push(Vendor { uuid: uuid.into(), name: Some(name.into()) });
        self
    }

    pub fn fail(mut self, read: &'static str) -> Self {
        self.failing.insert(read);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn check(&self, read: &'static str) -> Result<(), SourceError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.failing.contains(read) {
            return Err(SourceError::Unavailable(format!("{} table unavailable", read)));
        }
        Ok(())
    }
}

#[async_trait]
impl ReportSource for FakeSource {
    async fn project(&self, _project_uuid: &str, _corporation_uuid: &str) -> Result<Option<Project>, SourceError> {
        self.check("project")?;
        Ok(self.project.clone())
    }

    async fn corporation(&self, _corporation_uuid: &str) -> Result<Option<Corporation>, SourceError> {
        self.check("corporation")?;
        Ok(self.corporation.clone())
    }

    async fn estimates(&self, _project_uuid: &str, _corporation_uuid: &str) -> Result<Vec<Estimate>, SourceError> {
        self.check("estimates")?;
        Ok(self.estimates.clone())
    }

    async fn item_types(&self, _project_uuid: &str, _corporation_uuid: &str) -> Result<Vec<ItemType>, SourceError> {
        self.check("item_types")?;
        Ok(self.item_types.clone())
    }

    async fn locations(&self) -> Result<Vec<Location>, SourceError> {
        self.check("locations")?;
        Ok(self.locations.clone())
    }

    async fn estimate_line_items(
        &self,
        _project_uuid: &str,
        _corporation_uuid: &str,
        estimate_uuids: &[String],
    ) -> Result<Vec<EstimateLineItemRow>, SourceError> {
        self.check("line_items")?;
        Ok(self
            .line_items
            .iter()
            .filter(|row| {
                row.estimate_uuid
                    .as_ref()
                    .map_or(false, |e| estimate_uuids.contains(e))
            })
            .cloned()
            .collect())
    }

    async fn purchase_orders(
        &self,
        _project_uuid: &str,
        _corporation_uuid: &str,
        vendor_uuid: Option<&str>,
    ) -> Result<Vec<PurchaseOrder>, SourceError> {
        self.check("purchase_orders")?;
        let statuses = budget_recon::models::COMMITTED_PO_STATUSES;
        Ok(self
            .purchase_orders
            .iter()
            .filter(|po| po.status.as_deref().map_or(false, |s| statuses.contains(&s)))
            .filter(|po| vendor_uuid.map_or(true, |v| po.vendor_uuid.as_deref() == Some(v)))
            .cloned()
            .collect())
    }

    async fn po_items(&self, purchase_order_uuids: &[String]) -> Result<Vec<PoItemRow>, SourceError> {
        self.check("po_items")?;
        Ok(self
            .po_items
            .iter()
            .filter(|row| {
                row.purchase_order_uuid
                    .as_ref()
                    .map_or(false, |po| purchase_order_uuids.contains(po))
            })
            .cloned()
            .collect())
    }

    async fn vendors(&self, vendor_uuids: &[String]) -> Result<Vec<Vendor>, SourceError> {
        self.check("vendors")?;
        Ok(self
            .vendors
            .iter()
            .filter(|v| vendor_uuids.contains(&v.uuid))
            .cloned()
            .collect())
    }
}

/// 单条物料: 成本代码由父行提供
pub fn material(item_uuid: &str, qty: Value) -> Value {
    json!({ "item_uuid": item_uuid, "name": item_uuid, "qty": qty })
}

/// 采购明细 payload
pub fn po_payload(cost_code: &str, item_uuid: &str, po_quantity: Value) -> Value {
    json!({
        "cost_code_uuid": cost_code,
        "item_uuid": item_uuid,
        "po_quantity": po_quantity,
        "quantity": 999
    })
}
