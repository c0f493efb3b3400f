// Client-side salesperson filter; the data source cannot filter by salesperson
use crate::domain::sale::SaleRecord;
use std::collections::BTreeSet;

/// An empty selection means everyone.
pub fn filter_by_salespeople(records: &[SaleRecord], selected: &BTreeSet<String>) -> Vec<SaleRecord> {
    if selected.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| selected.contains(&r.salesperson))
        .cloned()
        .collect()
}

/// Distinct salespeople in first-seen order.
pub fn salesperson_options(records: &[SaleRecord]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.salesperson.as_str()))
        .map(|r| r.salesperson.clone())
        .collect()
}
