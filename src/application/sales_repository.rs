// Repository trait for sales data access
use crate::application::error::DashboardError;
use crate::application::query_builder::SalesQuery;
use crate::domain::sale::SaleRecord;
use async_trait::async_trait;

#[async_trait]
pub trait SalesRepository: Send + Sync {
    /// Fetch every record matching the query in a single request
    async fn fetch_sales(&self, query: &SalesQuery) -> Result<Vec<SaleRecord>, DashboardError>;
}
