use crate::db::queries;
use crate::error::SourceError;
use crate::models::{
    Corporation, Estimate, EstimateLineItemRow, ItemType, Location, PoItemRow, Project,
    PurchaseOrder, Vendor,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// 报表引擎的全部上游读取
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn project(&self, project_uuid: &str, corporation_uuid: &str) -> Result<Option<Project>, SourceError>;

    async fn corporation(&self, corporation_uuid: &str) -> Result<Option<Corporation>, SourceError>;

    async fn estimates(&self, project_uuid: &str, corporation_uuid: &str) -> Result<Vec<Estimate>, SourceError>;

    async fn item_types(&self, project_uuid: &str, corporation_uuid: &str) -> Result<Vec<ItemType>, SourceError>;

    async fn locations(&self) -> Result<Vec<Location>, SourceError>;

    async fn estimate_line_items(
        &self,
        project_uuid: &str,
        corporation_uuid: &str,
        estimate_uuids: &[String],
    ) -> Result<Vec<EstimateLineItemRow>, SourceError>;

    async fn purchase_orders(
        &self,
        project_uuid: &str,
        corporation_uuid: &str,
        vendor_uuid: Option<&str>,
    ) -> Result<Vec<PurchaseOrder>, SourceError>;

    async fn po_items(&self, purchase_order_uuids: &[String]) -> Result<Vec<PoItemRow>, SourceError>;

    async fn vendors(&self, vendor_uuids: &[String]) -> Result<Vec<Vendor>, SourceError>;
}

/// Postgres 实现
pub struct PgReportSource {
    pool: PgPool,
}

impl PgReportSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportSource for PgReportSource {
    async fn project(&self, project_uuid: &str, corporation_uuid: &str) -> Result<Option<Project>, SourceError> {
        Ok(queries::get_project(&self.pool, project_uuid, corporation_uuid).await?)
    }

    async fn corporation(&self, corporation_uuid: &str) -> Result<Option<Corporation>, SourceError> {
        Ok(queries::get_corporation(&self.pool, corporation_uuid).await?)
    }

    async fn estimates(&self, project_uuid: &str, corporation_uuid: &str) -> Result<Vec<Estimate>, SourceError> {
        Ok(queries::list_estimates(&self.pool, project_uuid, corporation_uuid).await?)
    }

    async fn item_types(&self, project_uuid: &str, corporation_uuid: &str) -> Result<Vec<ItemType>, SourceError> {
        Ok(queries::list_item_types(&self.pool, project_uuid, corporation_uuid).await?)
    }

    async fn locations(&self) -> Result<Vec<Location>, SourceError> {
        Ok(queries::list_locations(&self.pool).await?)
    }

    async fn estimate_line_items(
        &self,
        project_uuid: &str,
        corporation_uuid: &str,
        estimate_uuids: &[String],
    ) -> Result<Vec<EstimateLineItemRow>, SourceError> {
        Ok(queries::list_estimate_line_items(&self.pool, project_uuid, corporation_uuid, estimate_uuids).await?)
    }

    async fn purchase_orders(
        &self,
        project_uuid: &str,
        corporation_uuid: &str,
        vendor_uuid: Option<&str>,
    ) -> Result<Vec<PurchaseOrder>, SourceError> {
        Ok(queries::list_purchase_orders(&self.pool, project_uuid, corporation_uuid, vendor_uuid).await?)
    }

    async fn po_items(&self, purchase_order_uuids: &[String]) -> Result<Vec<PoItemRow>, SourceError> {
        Ok(queries::list_po_items(&self.pool, purchase_order_uuids).await?)
    }

    async fn vendors(&self, vendor_uuids: &[String]) -> Result<Vec<Vendor>, SourceError> {
        Ok(queries::list_vendors(&self.pool, vendor_uuids).await?)
    }
}
