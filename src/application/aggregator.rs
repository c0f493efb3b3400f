// Aggregator - Groups one filtered record set into the dashboard tables
use crate::domain::aggregate::{
    Aggregates, CategoryTotals, Measure, Measured, MonthTotals, SalespersonTotals, StateTotals, Tally,
};
use crate::domain::sale::SaleRecord;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::{BTreeMap, HashMap};

pub fn aggregate(records: &[SaleRecord]) -> Aggregates {
    let by_state = state_totals(records);
    let by_category = category_totals(records);

    Aggregates {
        revenue_by_state: sorted_desc(by_state.clone(), Measure::Revenue),
        sales_by_state: sorted_desc(by_state, Measure::Count),
        by_month: month_totals(records),
        revenue_by_category: sorted_desc(by_category.clone(), Measure::Revenue),
        sales_by_category: sorted_desc(by_category, Measure::Count),
        salespeople: salesperson_totals(records),
        total_revenue: total_revenue(records),
        total_count: total_count(records),
    }
}

pub fn total_revenue(records: &[SaleRecord]) -> f64 {
    records.iter().map(|r| r.price).sum()
}

pub fn total_count(records: &[SaleRecord]) -> u64 {
    records.len() as u64
}

/// Per purchase location, in first-seen order. Coordinates come from the
/// first record seen for the location; later conflicting pairs are ignored.
pub fn state_totals(records: &[SaleRecord]) -> Vec<StateTotals> {
    tally_by(records, |r| r.location.as_str())
        .into_iter()
        .map(|(first, tally)| StateTotals {
            location: first.location.clone(),
            lat: first.lat,
            lon: first.lon,
            revenue: tally.revenue,
            count: tally.count,
        })
        .collect()
}

pub fn category_totals(records: &[SaleRecord]) -> Vec<CategoryTotals> {
    tally_by(records, |r| r.category.as_str())
        .into_iter()
        .map(|(first, tally)| CategoryTotals {
            category: first.category.clone(),
            revenue: tally.revenue,
            count: tally.count,
        })
        .collect()
}

/// Per salesperson, in first-seen order. Ranking happens at presentation time.
pub fn salesperson_totals(records: &[SaleRecord]) -> Vec<SalespersonTotals> {
    tally_by(records, |r| r.salesperson.as_str())
        .into_iter()
        .map(|(first, tally)| SalespersonTotals {
            salesperson: first.salesperson.clone(),
            revenue: tally.revenue,
            count: tally.count,
        })
        .collect()
}

/// Calendar-month buckets keyed by month end, in chronological order.
pub fn month_totals(records: &[SaleRecord]) -> Vec<MonthTotals> {
    let mut buckets: BTreeMap<(i32, u32), (NaiveDate, Tally)> = BTreeMap::new();
    for record in records {
        let date = record.purchase_date;
        buckets
            .entry((date.year(), date.month()))
            .or_insert_with(|| (month_end(date), Tally::default()))
            .1
            .add(record.price);
    }

    buckets
        .into_values()
        .map(|(end, tally)| MonthTotals {
            month_end: end,
            year: end.year(),
            month: end.format("%B").to_string(),
            revenue: tally.revenue,
            count: tally.count,
        })
        .collect()
}

/// Stable descending sort: equal rows keep their relative order.
pub fn sorted_desc<T: Measured>(mut rows: Vec<T>, measure: Measure) -> Vec<T> {
    rows.sort_by(|a, b| b.measure(measure).total_cmp(&a.measure(measure)));
    rows
}

fn month_end(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

fn tally_by<'a, F>(records: &'a [SaleRecord], key: F) -> Vec<(&'a SaleRecord, Tally)>
where
    F: Fn(&'a SaleRecord) -> &'a str,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a SaleRecord, Tally)> = Vec::new();

    for record in records {
        let slot = *index.entry(key(record)).or_insert_with(|| {
            groups.push((record, Tally::default()));
            groups.len() - 1
        });
        groups[slot].1.add(record.price);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::local_filter::fixtures::{sale, sample};

    #[test]
    fn test_counts_are_conserved_per_dimension() {
        let records = sample();
        let tables = aggregate(&records);
        let total = records.len() as u64;

        assert_eq!(tables.sales_by_state.iter().map(|r| r.count).sum::<u64>(), total);
        assert_eq!(tables.revenue_by_state.iter().map(|r| r.count).sum::<u64>(), total);
        assert_eq!(tables.by_month.iter().map(|r| r.count).sum::<u64>(), total);
        assert_eq!(tables.sales_by_category.iter().map(|r| r.count).sum::<u64>(), total);
        assert_eq!(tables.salespeople.iter().map(|r| r.count).sum::<u64>(), total);
        assert_eq!(tables.total_count, total);
        assert!((tables.total_revenue - 3050.0).abs() < 1e-9);
    }

    #[test]
    fn test_group_keys_are_exactly_the_distinct_values() {
        let tables = aggregate(&sample());
        let mut states: Vec<_> = tables.revenue_by_state.iter().map(|r| r.location.as_str()).collect();
        states.sort();
        assert_eq!(states, vec!["MG", "RJ", "SP"]);
        assert!(tables.revenue_by_category.iter().all(|r| r.count > 0));
    }

    #[test]
    fn test_state_tables_sorted_by_their_measure() {
        let tables = aggregate(&sample());
        let by_revenue: Vec<_> = tables.revenue_by_state.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(by_revenue, vec!["SP", "MG", "RJ"]);

        let by_count: Vec<_> = tables.sales_by_state.iter().map(|r| (r.location.as_str(), r.count)).collect();
        assert_eq!(by_count, vec![("SP", 3), ("RJ", 1), ("MG", 1)]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let records = vec![
            sale("A", "BA", "x", 10.0, (2021, 1, 1)),
            sale("A", "PE", "y", 50.0, (2021, 1, 1)),
            sale("A", "CE", "x", 10.0, (2021, 1, 1)),
            sale("A", "AL", "z", 10.0, (2021, 1, 1)),
        ];
        let states: Vec<_> = sorted_desc(state_totals(&records), Measure::Revenue)
            .into_iter()
            .map(|r| r.location)
            .collect();
        assert_eq!(states, vec!["PE", "BA", "CE", "AL"]);
    }

    #[test]
    fn test_first_seen_coordinates_win() {
        let mut first = sale("A", "SP", "x", 1.0, (2021, 1, 1));
        first.lat = -23.0;
        first.lon = -46.0;
        let mut second = sale("B", "SP", "x", 1.0, (2021, 1, 2));
        second.lat = 0.0;
        second.lon = 0.0;

        let states = state_totals(&[first, second]);
        assert_eq!(states.len(), 1);
        assert_eq!((states[0].lat, states[0].lon), (-23.0, -46.0));
    }

    #[test]
    fn test_month_buckets_span_years() {
        let months = month_totals(&sample());
        let keys: Vec<_> = months
            .iter()
            .map(|m| (m.month_end.to_string(), m.year, m.month.as_str(), m.count))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2021-01-31".to_string(), 2021, "January", 2),
                ("2021-02-28".to_string(), 2021, "February", 1),
                ("2022-02-28".to_string(), 2022, "February", 1),
                ("2022-03-31".to_string(), 2022, "March", 1),
            ]
        );
        assert!((months[0].revenue - 1240.0).abs() < 1e-9);
    }

    #[test]
    fn test_december_and_leap_month_ends() {
        let months = month_totals(&[
            sale("A", "SP", "x", 1.0, (2020, 2, 10)),
            sale("A", "SP", "x", 1.0, (2020, 12, 31)),
        ]);
        assert_eq!(months[0].month_end, NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
        assert_eq!(months[1].month_end, NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
    }

    #[test]
    fn test_salespeople_keep_first_seen_order() {
        let names: Vec<_> = salesperson_totals(&sample()).into_iter().map(|r| r.salesperson).collect();
        assert_eq!(names, vec!["Ana", "Bruno", "Carla"]);
    }

    #[test]
    fn test_empty_input_gives_empty_tables() {
        let tables = aggregate(&[]);
        assert!(tables.is_empty());
        assert!(tables.revenue_by_state.is_empty());
        assert!(tables.sales_by_state.is_empty());
        assert!(tables.by_month.is_empty());
        assert!(tables.revenue_by_category.is_empty());
        assert!(tables.sales_by_category.is_empty());
        assert!(tables.salespeople.is_empty());
        assert_eq!(tables.total_revenue, 0.0);
    }
}
