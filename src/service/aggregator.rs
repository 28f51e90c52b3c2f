use crate::models::{Commitment, ItemIdentity, LineItem, PurchaseOrder};
use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexMap;
use std::collections::HashMap;

/// 预算桶: 同一匹配键的估算明细数量累加, 展示字段取首个
pub fn aggregate_budget<I>(items: I) -> IndexMap<ItemIdentity, LineItem>
where
    I: IntoIterator<Item = LineItem>,
{
    let mut buckets: IndexMap<ItemIdentity, LineItem> = IndexMap::new();
    for item in items {
        match buckets.entry(item.identity()) {
            indexmap::map::Entry::Occupied(mut entry) => {
                entry.get_mut().quantity += &item.quantity;
            }
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(item);
            }
        }
    }
    buckets
}

/// 采购承诺桶: 数量累加, 供应商取第一个非空值
pub fn aggregate_commitments<I>(items: I) -> HashMap<ItemIdentity, Commitment>
where
    I: IntoIterator<Item = (LineItem, Option<String>)>,
{
    let mut buckets: HashMap<ItemIdentity, Commitment> = HashMap::new();
    for (item, vendor_id) in items {
        let bucket = buckets.entry(item.identity()).or_insert_with(|| Commitment {
            quantity: BigDecimal::zero(),
            vendor_id: None,
        });
        bucket.quantity += &item.quantity;
        if bucket.vendor_id.is_none() {
            bucket.vendor_id = vendor_id;
        }
    }
    buckets
}

/// 采购单ID -> 供应商ID
pub fn vendor_by_po(purchase_orders: &[PurchaseOrder]) -> HashMap<&str, Option<&str>> {
    purchase_orders
        .iter()
        .map(|po| (po.uuid.as_str(), po.vendor_uuid.as_deref()))
        .collect()
}
