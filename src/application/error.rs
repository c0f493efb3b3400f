// Errors raised by one render pass
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("data source returned status {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("sales payload is not a JSON array of records")]
    Payload(#[from] serde_json::Error),
    #[error("record {index} has purchase date {value:?}, expected dd/mm/yyyy")]
    PurchaseDate { index: usize, value: String },
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
