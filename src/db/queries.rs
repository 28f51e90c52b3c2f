use crate::models::{
    Corporation, Estimate, EstimateLineItemRow, ItemType, Location, PoItemRow, Project,
    PurchaseOrder, Vendor, COMMITTED_PO_STATUSES,
};
use sqlx::PgPool;

/// 查询项目 (限定公司)
pub async fn get_project(
    pool: &PgPool,
    project_uuid: &str,
    corporation_uuid: &str,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT uuid::text AS uuid,
               project_name AS name,
               project_id::text AS display_id,
               corporation_uuid::text AS corporation_uuid
        FROM projects
        WHERE uuid::text = $1
          AND corporation_uuid::text = $2
        "#
    )
    .bind(project_uuid)
    .bind(corporation_uuid)
    .fetch_optional(pool)
    .await
}

/// 查询公司名称
pub async fn get_corporation(
    pool: &PgPool,
    corporation_uuid: &str,
) -> Result<Option<Corporation>, sqlx::Error> {
    sqlx::query_as::<_, Corporation>(
        r#"
        SELECT corporation_name AS name
        FROM corporations
        WHERE uuid::text = $1
        "#
    )
    .bind(corporation_uuid)
    .fetch_optional(pool)
    .await
}

/// 查询项目下所有估算单 (状态过滤在内存中做)
pub async fn list_estimates(
    pool: &PgPool,
    project_uuid: &str,
    corporation_uuid: &str,
) -> Result<Vec<Estimate>, sqlx::Error> {
    sqlx::query_as::<_, Estimate>(
        r#"
        SELECT uuid::text AS uuid,
               status,
               to_jsonb(is_active) AS is_active
        FROM estimates
        WHERE project_uuid::text = $1
          AND corporation_uuid::text = $2
        "#
    )
    .bind(project_uuid)
    .bind(corporation_uuid)
    .fetch_all(pool)
    .await
}

/// 查询启用的物料类型
pub async fn list_item_types(
    pool: &PgPool,
    project_uuid: &str,
    corporation_uuid: &str,
) -> Result<Vec<ItemType>, sqlx::Error> {
    sqlx::query_as::<_, ItemType>(
        r#"
        SELECT uuid::text AS uuid,
               item_type AS label
        FROM item_types
        WHERE project_uuid::text = $1
          AND corporation_uuid::text = $2
          AND is_active = true
        "#
    )
    .bind(project_uuid)
    .bind(corporation_uuid)
    .fetch_all(pool)
    .await
}

/// 查询启用的位置 (全局)
pub async fn list_locations(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
    sqlx::query_as::<_, Location>(
        r#"
        SELECT uuid::text AS uuid,
               location_name AS name
        FROM locations
        WHERE active = true
        "#
    )
    .fetch_all(pool)
    .await
}

/// 查询估算明细父行 (按 id 升序, 决定 first-wins 的展示字段)
pub async fn list_estimate_line_items(
    pool: &PgPool,
    project_uuid: &str,
    corporation_uuid: &str,
    estimate_uuids: &[String],
) -> Result<Vec<EstimateLineItemRow>, sqlx::Error> {
    sqlx::query_as::<_, EstimateLineItemRow>(
        r#"
        SELECT id,
               estimate_uuid::text AS estimate_uuid,
               cost_code_uuid::text AS cost_code_uuid,
               cost_code_number,
               cost_code_name,
               division_name,
               material_items AS items
        FROM estimate_line_items
        WHERE project_uuid::text = $1
          AND corporation_uuid::text = $2
          AND estimate_uuid::text = ANY($3)
        ORDER BY id ASC
        "#
    )
    .bind(project_uuid)
    .bind(corporation_uuid)
    .bind(estimate_uuids)
    .fetch_all(pool)
    .await
}

/// 查询计入承诺的采购单, 可按供应商过滤
pub async fn list_purchase_orders(
    pool: &PgPool,
    project_uuid: &str,
    corporation_uuid: &str,
    vendor_uuid: Option<&str>,
) -> Result<Vec<PurchaseOrder>, sqlx::Error> {
    let statuses: Vec<String> = COMMITTED_PO_STATUSES.iter().map(|s| s.to_string()).collect();

    sqlx::query_as::<_, PurchaseOrder>(
        r#"
        SELECT uuid::text AS uuid,
               vendor_uuid::text AS vendor_uuid,
               status
        FROM purchase_order_forms
        WHERE project_uuid::text = $1
          AND corporation_uuid::text = $2
          AND status = ANY($3)
          AND ($4::text IS NULL OR vendor_uuid::text = $4)
        ORDER BY id ASC
        "#
    )
    .bind(project_uuid)
    .bind(corporation_uuid)
    .bind(statuses)
    .bind(vendor_uuid)
    .fetch_all(pool)
    .await
}

/// 查询采购单明细, 整行转 jsonb 交给 normalizer。
/// 行自身的 uuid 去掉, 避免被当作物料 uuid 回落
pub async fn list_po_items(
    pool: &PgPool,
    purchase_order_uuids: &[String],
) -> Result<Vec<PoItemRow>, sqlx::Error> {
    sqlx::query_as::<_, PoItemRow>(
        r#"
        SELECT poi.purchase_order_uuid::text AS purchase_order_uuid,
               to_jsonb(poi) - 'uuid' AS payload
        FROM purchase_order_items_list poi
        WHERE poi.purchase_order_uuid::text = ANY($1)
          AND poi.is_active = true
        ORDER BY poi.id ASC
        "#
    )
    .bind(purchase_order_uuids)
    .fetch_all(pool)
    .await
}

/// 按ID批量查询供应商
pub async fn list_vendors(
    pool: &PgPool,
    vendor_uuids: &[String],
) -> Result<Vec<Vendor>, sqlx::Error> {
    sqlx::query_as::<_, Vendor>(
        r#"
        SELECT uuid::text AS uuid,
               vendor_name AS name
        FROM vendors
        WHERE uuid::text = ANY($1)
        "#
    )
    .bind(vendor_uuids)
    .fetch_all(pool)
    .await
}
