// Application layer - Use cases and the aggregation pipeline
pub mod aggregator;
pub mod dashboard_service;
pub mod error;
pub mod local_filter;
pub mod presenter;
pub mod query_builder;
pub mod sales_repository;
