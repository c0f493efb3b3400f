// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use std::ops::RangeInclusive;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub years: RangeInclusive<i32>,
}
