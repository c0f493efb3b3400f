// Chart specification domain models
use super::aggregate::{CategoryTotals, MonthTotals, SalespersonTotals, StateTotals};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    ScatterGeo,
    Line,
    Bar,
    HorizontalBar,
}

/// Rows a chart is bound to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "table", content = "rows", rename_all = "snake_case")]
pub enum ChartTable {
    States(Vec<StateTotals>),
    Months(Vec<MonthTotals>),
    Categories(Vec<CategoryTotals>),
    Salespeople(Vec<SalespersonTotals>),
}

impl ChartTable {
    pub fn len(&self) -> usize {
        match self {
            ChartTable::States(rows) => rows.len(),
            ChartTable::Months(rows) => rows.len(),
            ChartTable::Categories(rows) => rows.len(),
            ChartTable::Salespeople(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub x: String,
    pub y: String,
    pub color: Option<String>,
    pub dash: Option<String>,
    pub size: Option<String>,
    pub hover: Option<String>,
    pub scope: Option<String>,
    pub y_axis_title: Option<String>,
    pub y_range: Option<(f64, f64)>,
    pub limit: Option<usize>,
    pub data: ChartTable,
}

impl ChartSpec {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ChartKind,
        x: impl Into<String>,
        y: impl Into<String>,
        data: ChartTable,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            x: x.into(),
            y: y.into(),
            color: None,
            dash: None,
            size: None,
            hover: None,
            scope: None,
            y_axis_title: None,
            y_range: None,
            limit: None,
            data,
        }
    }

    /// Split series by `field`, one colour and one line dash each.
    pub fn split_by(mut self, field: &str) -> Self {
        self.color = Some(field.to_string());
        self.dash = Some(field.to_string());
        self
    }

    pub fn sized_by(mut self, field: &str) -> Self {
        self.size = Some(field.to_string());
        self
    }

    pub fn hover(mut self, field: &str) -> Self {
        self.hover = Some(field.to_string());
        self
    }

    pub fn scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn y_axis_title(mut self, title: &str) -> Self {
        self.y_axis_title = Some(title.to_string());
        self
    }

    pub fn y_range(mut self, range: Option<(f64, f64)>) -> Self {
        self.y_range = range;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
