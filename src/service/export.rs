use crate::models::ReconciledRow;
use std::io::Write;

const HEADER: [&str; 13] = [
    "corporation_name",
    "project_label",
    "cost_code_label",
    "vendor_name",
    "sequence",
    "item_type_label",
    "item_name",
    "description",
    "location",
    "budget_qty",
    "po_qty",
    "pending_qty",
    "status",
];

/// 导出对账结果为 CSV (带表头)
pub fn write_csv<W: Write>(rows: &[ReconciledRow], out: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;

    for row in rows {
        let budget_qty = row.budget_qty.normalized().to_string();
        let po_qty = row.po_qty.normalized().to_string();
        let pending_qty = row.pending_qty.normalized().to_string();
        writer.write_record([
            row.corporation_name.as_str(),
            row.project_label.as_str(),
            row.cost_code_label.as_str(),
            row.vendor_name.as_str(),
            row.sequence.as_str(),
            row.item_type_label.as_str(),
            row.item_name.as_str(),
            row.description.as_str(),
            row.location.as_str(),
            budget_qty.as_str(),
            po_qty.as_str(),
            pending_qty.as_str(),
            row.status.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
