// HTTP request handlers
use crate::domain::dashboard::Dashboard;
use crate::domain::sale::{FilterCriteria, Region, YearFilter};
use crate::presentation::app_state::AppState;
use crate::presentation::errors::AppError;
use crate::presentation::page::render_index;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Raw query parameters. Numbers stay text so an empty value reads as absent
/// and bad input is reported as JSON.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub region: Option<String>,
    /// Absent or empty means the whole period.
    pub year: Option<String>,
    /// Comma separated salesperson names.
    pub salespeople: Option<String>,
    pub top: Option<String>,
}

fn parse_number<T: std::str::FromStr>(name: &str, value: Option<&str>) -> Result<Option<T>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(text) => text
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::bad_request(format!("{} '{}' is not a valid number", name, text))),
        None => Ok(None),
    }
}

impl DashboardParams {
    pub fn criteria(&self, years: &RangeInclusive<i32>) -> Result<FilterCriteria, AppError> {
        let region = match &self.region {
            Some(name) => name
                .parse::<Region>()
                .map_err(|e| AppError::bad_request(e.to_string()))?,
            None => Region::Brasil,
        };

        let year = match parse_number::<i32>("year", self.year.as_deref())? {
            Some(year) if years.contains(&year) => YearFilter::Year(year),
            Some(year) => {
                return Err(AppError::bad_request(format!(
                    "year {} is outside {}..={}",
                    year,
                    years.start(),
                    years.end()
                )));
            }
            None => YearFilter::AllTime,
        };

        let salespeople: BTreeSet<String> = self
            .salespeople
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        Ok(FilterCriteria::new(region, year, salespeople))
    }

    pub fn top_salespeople(&self) -> Result<Option<usize>, AppError> {
        parse_number("top", self.top.as_deref())
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page shell
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_index(
        &state.years,
        state.dashboard_service.top_range(),
    ))
}

/// Run one render pass for the requested filters
pub async fn get_dashboard(
    query: Result<Query<DashboardParams>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Dashboard>, AppError> {
    let Query(params) = query?;
    let criteria = params.criteria(&state.years)?;
    let top = params.top_salespeople()?;
    tracing::info!(
        "Rendering dashboard region={} year={:?} salespeople={}",
        criteria.region,
        criteria.year,
        criteria.salespeople.len()
    );

    let dashboard = state
        .dashboard_service
        .build_dashboard(&criteria, top)
        .await?;
    Ok(Json(dashboard))
}
