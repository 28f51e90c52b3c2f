use crate::models::{CostCode, ItemType, LineItem, Location};
use bigdecimal::{BigDecimal, Zero};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// 36 位字符串视为 UUID 引用而非字面标签 (仅按长度判断)
const UUID_LEN: usize = 36;

/// 小数位 / 指数绝对值上限, 超出按解析失败处理
const MAX_SCALE: i64 = 64;

/// 单次请求内只读的查找表
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    pub item_types: HashMap<String, String>,
    pub locations: HashMap<String, String>,
}

impl Lookups {
    pub fn new(item_types: &[ItemType], locations: &[Location]) -> Self {
        Self {
            item_types: item_types
                .iter()
                .map(|t| (t.uuid.clone(), t.label.clone().unwrap_or_default()))
                .collect(),
            locations: locations
                .iter()
                .map(|l| (l.uuid.clone(), l.name.clone().unwrap_or_default()))
                .collect(),
        }
    }
}

/// 明细规范化: 字段回落顺序反映上游历史 schema, 不可调整
pub struct Normalizer<'a> {
    lookups: &'a Lookups,
}

impl<'a> Normalizer<'a> {
    pub fn new(lookups: &'a Lookups) -> Self {
        Self { lookups }
    }

    /// 估算明细: 成本代码来自父行
    pub fn estimate_item(&self, cost_code: &CostCode, raw: &Value) -> LineItem {
        let quantity = decimal(first(raw, &["quantity", "qty", "quantity_value"]));
        let sequence = text(first(raw, &["sequence", "item_sequence", "sequence_uuid"]));
        self.build(cost_code, raw, quantity, sequence)
    }

    /// 采购明细: 成本代码在明细本身, po_quantity 优先, 序号可能在 metadata 里
    pub fn po_item(&self, raw: &Value) -> LineItem {
        let cost_code = CostCode {
            id: opt_text(first(raw, &["cost_code_uuid"])),
            number: text(first(raw, &["cost_code_number"])),
            name: text(first(raw, &["cost_code_name"])),
            division: text(first(raw, &["division_name"])),
        };
        let quantity = decimal(first(raw, &["po_quantity", "quantity", "qty", "quantity_value"]));
        let metadata = raw.get("metadata");
        let sequence = text(
            metadata
                .and_then(|m| first(m, &["sequence", "item_sequence"]))
                .or_else(|| first(raw, &["sequence", "item_sequence", "sequence_uuid"])),
        );
        self.build(&cost_code, raw, quantity, sequence)
    }

    fn build(&self, cost_code: &CostCode, raw: &Value, quantity: BigDecimal, sequence: String) -> LineItem {
        let sequence_id = is_uuid_like(&sequence).then(|| sequence.clone());

        let raw_location = text(first(raw, &["location", "location_uuid"]));
        let (location_id, location_display) = if is_uuid_like(&raw_location) {
            // 查不到名称时沿用原始字符串展示
            let display = self
                .lookups
                .locations
                .get(&raw_location)
                .cloned()
                .unwrap_or_else(|| raw_location.clone());
            (Some(raw_location), display)
        } else {
            (None, raw_location)
        };

        let item_type_id = opt_text(first(raw, &["item_type_uuid", "item_type"]));
        let item_type_label = match opt_text(first(raw, &["item_type_label", "item_type_name"])) {
            Some(label) => label,
            None => item_type_id
                .as_ref()
                .and_then(|id| self.lookups.item_types.get(id))
                .cloned()
                .unwrap_or_default(),
        };

        LineItem {
            cost_code_id: cost_code.id.clone(),
            cost_code_label: cost_code.label(),
            division_name: cost_code.division.clone(),
            item_id: opt_text(first(raw, &["item_uuid", "uuid"])),
            item_type_id,
            item_type_label,
            item_name: text(first(raw, &["name", "item_name", "title"])),
            description: text(first(raw, &["description"])),
            sequence,
            sequence_id,
            location_id,
            location_display,
            quantity,
            unit_price: decimal(first(raw, &["unit_price", "unitPrice", "price"])),
        }
    }
}

/// 第一个存在且非 null 的字段
fn first<'v>(raw: &'v Value, keys: &[&str]) -> Option<&'v Value> {
    keys.iter()
        .filter_map(|k| raw.get(*k))
        .find(|v| !v.is_null())
}

fn opt_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text(value: Option<&Value>) -> String {
    opt_text(value).unwrap_or_default()
}

/// 数值解析, 失败一律为 0
fn decimal(value: Option<&Value>) -> BigDecimal {
    let parsed = match value {
        Some(Value::Number(n)) => BigDecimal::from_str(&n.to_string()).ok(),
        Some(Value::String(s)) => BigDecimal::from_str(s.trim()).ok(),
        _ => None,
    };
    parsed
        .filter(|d| d.as_bigint_and_exponent().1.abs() <= MAX_SCALE)
        .unwrap_or_else(BigDecimal::zero)
}

fn is_uuid_like(value: &str) -> bool {
    value.chars().count() == UUID_LEN
}
