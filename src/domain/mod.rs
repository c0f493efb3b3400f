// Domain layer - Plain data, no I/O
pub mod aggregate;
pub mod chart;
pub mod dashboard;
pub mod sale;
