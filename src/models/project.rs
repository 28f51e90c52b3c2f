use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// 参与预算统计的估算状态 (区分大小写)
pub const APPROVED_ESTIMATE_STATUS: &str = "Approved";

/// 计入采购承诺的采购单状态
pub const COMMITTED_PO_STATUSES: [&str; 3] = ["Approved", "Partially_Received", "Completed"];

/// 项目 (projects)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub uuid: String,
    pub name: Option<String>,
    pub display_id: Option<String>,
    pub corporation_uuid: Option<String>,
}

impl Project {
    /// "<project_name> #<project_id>", 任一缺失时为 "N/A"
    pub fn label(&self) -> String {
        match (non_empty(&self.name), non_empty(&self.display_id)) {
            (Some(name), Some(id)) => format!("{} #{}", name, id),
            _ => "N/A".to_string(),
        }
    }
}

/// 公司 (corporations)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Corporation {
    pub name: Option<String>,
}

/// 估算单 (estimates)。is_active 在历史数据中既有布尔也有字符串
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Estimate {
    pub uuid: String,
    pub status: Option<String>,
    pub is_active: Option<Value>,
}

impl Estimate {
    /// Approved 且 is_active 为 true / "TRUE" (忽略大小写)
    pub fn is_reportable(&self) -> bool {
        let active = match &self.is_active {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("TRUE"),
            _ => false,
        };
        active && self.status.as_deref() == Some(APPROVED_ESTIMATE_STATUS)
    }
}

/// 物料类型 (item_types)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ItemType {
    pub uuid: String,
    pub label: Option<String>,
}

/// 位置 (locations)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Location {
    pub uuid: String,
    pub name: Option<String>,
}

/// 估算明细父行: 成本代码信息 + 原始物料数组
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct EstimateLineItemRow {
    pub id: i64,
    pub estimate_uuid: Option<String>,
    pub cost_code_uuid: Option<String>,
    pub cost_code_number: Option<String>,
    pub cost_code_name: Option<String>,
    pub division_name: Option<String>,
    pub items: Option<Value>,
}

impl EstimateLineItemRow {
    /// 展开 items 数组; 非数组视为空
    pub fn raw_items(&self) -> &[Value] {
        match &self.items {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }
}

/// 采购单 (purchase_order_forms)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub uuid: String,
    pub vendor_uuid: Option<String>,
    pub status: Option<String>,
}

/// 采购单明细: 整行以 jsonb 读取
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PoItemRow {
    pub purchase_order_uuid: Option<String>,
    pub payload: Value,
}

/// 供应商 (vendors)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Vendor {
    pub uuid: String,
    pub name: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
