use bigdecimal::BigDecimal;

/// 成本代码上下文 (估算侧来自父行, 采购侧来自明细本身)
#[derive(Debug, Clone, Default)]
pub struct CostCode {
    pub id: Option<String>,
    pub number: String,
    pub name: String,
    pub division: String,
}

impl CostCode {
    /// "<number> <name>" 去除首尾空白
    pub fn label(&self) -> String {
        format!("{} {}", self.number, self.name).trim().to_string()
    }
}

/// 规范化后的明细行 (仅驻留内存)
#[derive(Debug, Clone)]
pub struct LineItem {
    pub cost_code_id: Option<String>,
    pub cost_code_label: String,
    pub division_name: String,
    pub item_id: Option<String>,
    pub item_type_id: Option<String>,
    pub item_type_label: String,
    pub item_name: String,
    pub description: String,
    pub sequence: String,
    pub sequence_id: Option<String>,
    pub location_id: Option<String>,
    pub location_display: String,
    pub quantity: BigDecimal,
    pub unit_price: BigDecimal,
}

impl LineItem {
    /// 匹配键。估算侧和采购侧必须走同一个构造
    pub fn identity(&self) -> ItemIdentity {
        ItemIdentity {
            cost_code_id: self.cost_code_id.clone().unwrap_or_default(),
            item_id: self.item_id.clone().unwrap_or_default(),
            sequence: self.sequence.clone(),
            location: self
                .location_id
                .clone()
                .unwrap_or_else(|| self.location_display.clone()),
        }
    }

    /// 展示用位置: 优先名称, 否则回落到 id
    pub fn display_location(&self) -> &str {
        if self.location_display.is_empty() {
            self.location_id.as_deref().unwrap_or_default()
        } else {
            &self.location_display
        }
    }
}

/// (成本代码, 物料, 序号, 位置) 四元组
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemIdentity {
    pub cost_code_id: String,
    pub item_id: String,
    pub sequence: String,
    pub location: String,
}
