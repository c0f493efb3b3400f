// Dashboard domain model
use super::chart::ChartSpec;
use super::sale::FilterCriteria;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: String) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub metrics: Vec<Metric>,
    pub charts: Vec<ChartSpec>,
}

impl Tab {
    pub fn new(id: &str, title: &str, metrics: Vec<Metric>, charts: Vec<ChartSpec>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            metrics,
            charts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub filters: FilterCriteria,
    pub top_salespeople: usize,
    /// Options for the salesperson multi-select, taken before local filtering.
    pub salespeople: Vec<String>,
    pub tabs: Vec<Tab>,
}

impl Dashboard {
    pub fn new(
        title: String,
        filters: FilterCriteria,
        top_salespeople: usize,
        salespeople: Vec<String>,
        tabs: Vec<Tab>,
    ) -> Self {
        Self {
            title,
            filters,
            top_salespeople,
            salespeople,
            tabs,
        }
    }
}
