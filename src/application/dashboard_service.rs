// Dashboard service - One render pass from filter criteria to tabs
use crate::application::aggregator::aggregate;
use crate::application::error::DashboardError;
use crate::application::local_filter::{filter_by_salespeople, salesperson_options};
use crate::application::presenter::{build_tabs, TopNRange};
use crate::application::query_builder::build_query;
use crate::application::sales_repository::SalesRepository;
use crate::domain::dashboard::Dashboard;
use crate::domain::sale::{FilterCriteria, YearFilter};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn SalesRepository>,
    top_range: TopNRange,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn SalesRepository>, top_range: TopNRange) -> Self {
        Self {
            repository,
            top_range,
        }
    }

    pub fn top_range(&self) -> TopNRange {
        self.top_range
    }

    pub async fn build_dashboard(
        &self,
        criteria: &FilterCriteria,
        top_salespeople: Option<usize>,
    ) -> Result<Dashboard, DashboardError> {
        let query = build_query(criteria.region, criteria.year);
        let records = self.repository.fetch_sales(&query).await?;
        tracing::debug!(
            "Loaded {} records for regiao={:?} ano={:?}",
            records.len(),
            query.regiao,
            query.ano
        );

        let salespeople = salesperson_options(&records);
        let filtered = filter_by_salespeople(&records, &criteria.salespeople);
        let aggregates = aggregate(&filtered);
        if aggregates.is_empty() {
            tracing::info!("No sales match the current filters");
        }

        let top = self.top_range.clamp(top_salespeople);
        let tabs = build_tabs(&aggregates, top);
        let empty_charts = tabs
            .iter()
            .flat_map(|t| &t.charts)
            .filter(|c| c.data.is_empty())
            .count();
        tracing::debug!("Built {} tabs, {} charts without rows", tabs.len(), empty_charts);

        Ok(Dashboard::new(
            Self::title(criteria),
            criteria.clone(),
            top,
            salespeople,
            tabs,
        ))
    }

    fn title(criteria: &FilterCriteria) -> String {
        match criteria.year {
            YearFilter::AllTime => format!("Sales dashboard - {}", criteria.region),
            YearFilter::Year(year) => format!("Sales dashboard - {} {}", criteria.region, year),
        }
    }
}
