// Presenter - Formats metrics and binds aggregate tables to chart specifications
use crate::application::aggregator::sorted_desc;
use crate::domain::aggregate::{Aggregates, Measure, Measured, StateTotals};
use crate::domain::chart::{ChartKind, ChartSpec, ChartTable};
use crate::domain::dashboard::{Metric, Tab};

const TOP_STATES: usize = 5;
const GEO_SCOPE: &str = "south america";
const MAGNITUDES: [&str; 2] = ["", "thousand"];
const LARGEST_MAGNITUDE: &str = "million";

/// Scale by 1000 through the magnitude labels and render with two decimals.
/// An empty prefix renders the bare number.
pub fn format_number(value: f64, prefix: &str) -> String {
    let mut value = value;
    for unit in MAGNITUDES {
        if value < 1000.0 {
            return render_number(prefix, value, unit);
        }
        value /= 1000.0;
    }
    render_number(prefix, value, LARGEST_MAGNITUDE)
}

fn render_number(prefix: &str, value: f64, unit: &str) -> String {
    if prefix.is_empty() {
        format!("{value:.2} {unit}")
    } else {
        format!("{prefix} {value:.2} {unit}")
    }
}

/// Bounds for the top-N salesperson selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopNRange {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl TopNRange {
    pub fn clamp(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default).clamp(self.min, self.max)
    }
}

/// The `n` largest rows by `measure`. Asking for more rows than exist is fine.
pub fn top_n<T: Measured + Clone>(table: &[T], measure: Measure, n: usize) -> Vec<T> {
    let mut ranked = sorted_desc(table.to_vec(), measure);
    ranked.truncate(n);
    ranked
}

pub fn summary_metrics(aggregates: &Aggregates) -> Vec<Metric> {
    vec![
        Metric::new("Revenue", format_number(aggregates.total_revenue, "R$")),
        Metric::new("Sales", format_number(aggregates.total_count as f64, "")),
    ]
}

pub fn build_tabs(aggregates: &Aggregates, top_salespeople: usize) -> Vec<Tab> {
    vec![
        revenue_tab(aggregates),
        sales_tab(aggregates),
        salespeople_tab(aggregates, top_salespeople),
    ]
}

pub fn revenue_tab(aggregates: &Aggregates) -> Tab {
    Tab::new(
        "revenue",
        "Revenue",
        summary_metrics(aggregates),
        vec![
            state_map("revenue_map", "Revenue by state", aggregates, Measure::Revenue),
            monthly_line("monthly_revenue", "Monthly revenue", aggregates, Measure::Revenue),
            top_states("top_states_revenue", "Top states (revenue)", aggregates, Measure::Revenue),
            category_bar("revenue_by_category", "Revenue by category", aggregates, Measure::Revenue),
        ],
    )
}

pub fn sales_tab(aggregates: &Aggregates) -> Tab {
    Tab::new(
        "sales",
        "Sales count",
        summary_metrics(aggregates),
        vec![
            state_map("sales_map", "Sales by state", aggregates, Measure::Count),
            monthly_line("monthly_sales", "Monthly sales count", aggregates, Measure::Count),
            top_states("top_states_sales", "Top 5 states", aggregates, Measure::Count),
            category_bar("sales_by_category", "Sales count by category", aggregates, Measure::Count),
        ],
    )
}

pub fn salespeople_tab(aggregates: &Aggregates, n: usize) -> Tab {
    Tab::new(
        "salespeople",
        "Salespeople",
        summary_metrics(aggregates),
        vec![
            salesperson_bar(
                "top_salespeople_revenue",
                format!("Top {n} salespeople (revenue)"),
                aggregates,
                Measure::Revenue,
                n,
            ),
            salesperson_bar(
                "top_salespeople_sales",
                format!("Top {n} salespeople (sales count)"),
                aggregates,
                Measure::Count,
                n,
            ),
        ],
    )
}

fn axis_title(measure: Measure) -> &'static str {
    match measure {
        Measure::Revenue => "Revenue",
        Measure::Count => "Sales count",
    }
}

fn state_rows(aggregates: &Aggregates, measure: Measure) -> &[StateTotals] {
    match measure {
        Measure::Revenue => &aggregates.revenue_by_state,
        Measure::Count => &aggregates.sales_by_state,
    }
}

fn state_map(id: &str, title: &str, aggregates: &Aggregates, measure: Measure) -> ChartSpec {
    let rows = state_rows(aggregates, measure).to_vec();
    ChartSpec::new(id, title, ChartKind::ScatterGeo, "lon", "lat", ChartTable::States(rows))
        .sized_by(measure.field())
        .hover("location")
        .scope(GEO_SCOPE)
}

fn monthly_line(id: &str, title: &str, aggregates: &Aggregates, measure: Measure) -> ChartSpec {
    let rows = aggregates.by_month.clone();
    let range = rows
        .iter()
        .map(|r| r.measure(measure))
        .reduce(f64::max)
        .map(|max| (0.0, max));

    ChartSpec::new(id, title, ChartKind::Line, "month", measure.field(), ChartTable::Months(rows))
        .split_by("year")
        .y_axis_title(axis_title(measure))
        .y_range(range)
}

fn top_states(id: &str, title: &str, aggregates: &Aggregates, measure: Measure) -> ChartSpec {
    let rows: Vec<_> = state_rows(aggregates, measure).iter().take(TOP_STATES).cloned().collect();
    ChartSpec::new(id, title, ChartKind::Bar, "location", measure.field(), ChartTable::States(rows))
        .y_axis_title(axis_title(measure))
        .limit(TOP_STATES)
}

fn category_bar(id: &str, title: &str, aggregates: &Aggregates, measure: Measure) -> ChartSpec {
    let rows = match measure {
        Measure::Revenue => aggregates.revenue_by_category.clone(),
        Measure::Count => aggregates.sales_by_category.clone(),
    };
    ChartSpec::new(id, title, ChartKind::Bar, "category", measure.field(), ChartTable::Categories(rows))
        .y_axis_title(axis_title(measure))
}

fn salesperson_bar(id: &str, title: String, aggregates: &Aggregates, measure: Measure, n: usize) -> ChartSpec {
    let rows = top_n(&aggregates.salespeople, measure, n);
    ChartSpec::new(
        id,
        title,
        ChartKind::HorizontalBar,
        measure.field(),
        "salesperson",
        ChartTable::Salespeople(rows),
    )
    .limit(n)
}
