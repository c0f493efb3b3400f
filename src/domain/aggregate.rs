// Aggregate table rows
use chrono::NaiveDate;
use serde::Serialize;

/// Running sum and count of prices for one group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tally {
    pub revenue: f64,
    pub count: u64,
}

impl Tally {
    pub fn add(&mut self, price: f64) {
        self.revenue += price;
        self.count += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Revenue,
    Count,
}

impl Measure {
    pub fn field(&self) -> &'static str {
        match self {
            Measure::Revenue => "revenue",
            Measure::Count => "count",
        }
    }
}

/// Anything carrying both measures can be ranked by either.
pub trait Measured {
    fn revenue(&self) -> f64;
    fn count(&self) -> u64;

    fn measure(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Revenue => self.revenue(),
            Measure::Count => self.count() as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateTotals {
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    pub revenue: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotals {
    pub month_end: NaiveDate,
    pub year: i32,
    pub month: String,
    pub revenue: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotals {
    pub category: String,
    pub revenue: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalespersonTotals {
    pub salesperson: String,
    pub revenue: f64,
    pub count: u64,
}

macro_rules! impl_measured {
    ($($row:ty),*) => {
        $(impl Measured for $row {
            fn revenue(&self) -> f64 {
                self.revenue
            }

            fn count(&self) -> u64 {
                self.count
            }
        })*
    };
}

impl_measured!(StateTotals, MonthTotals, CategoryTotals, SalespersonTotals);

/// Every table derived from one filtered record set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Aggregates {
    pub revenue_by_state: Vec<StateTotals>,
    pub sales_by_state: Vec<StateTotals>,
    pub by_month: Vec<MonthTotals>,
    pub revenue_by_category: Vec<CategoryTotals>,
    pub sales_by_category: Vec<CategoryTotals>,
    pub salespeople: Vec<SalespersonTotals>,
    pub total_revenue: f64,
    pub total_count: u64,
}

impl Aggregates {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}
