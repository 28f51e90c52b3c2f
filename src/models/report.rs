use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Serialize, Serializer};

/// 明细完成状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    Pending,
    Partial,
    Complete,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Partial => "Partial",
            Self::Complete => "Complete",
        }
    }
}

/// 采购承诺桶
#[derive(Debug, Clone)]
pub struct Commitment {
    pub quantity: BigDecimal,
    pub vendor_id: Option<String>,
}

/// 预算 vs 采购 对账结果行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciledRow {
    pub corporation_name: String,
    pub project_label: String,
    pub cost_code_label: String,
    pub vendor_name: String,
    pub sequence: String,
    pub item_type_label: String,
    pub item_name: String,
    pub description: String,
    pub location: String,
    #[serde(serialize_with = "decimal_as_number")]
    pub budget_qty: BigDecimal,
    #[serde(serialize_with = "decimal_as_number")]
    pub po_qty: BigDecimal,
    #[serde(serialize_with = "decimal_as_number")]
    pub pending_qty: BigDecimal,
    pub status: BudgetStatus,
}

/// 报表响应体
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub data: Vec<ReconciledRow>,
}

/// 数量以 JSON 数字输出, 超出 f64 范围记为 0
fn decimal_as_number<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    let number = value.to_f64().filter(|f| f.is_finite()).unwrap_or(0.0);
    serializer.serialize_f64(number)
}
