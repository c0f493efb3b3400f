// HTTP sales repository - Loads records from the remote products endpoint
use crate::application::error::{DashboardError, FetchError, ParseError};
use crate::application::query_builder::SalesQuery;
use crate::application::sales_repository::SalesRepository;
use crate::domain::sale::SaleRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

const PURCHASE_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone)]
pub struct HttpSalesRepository {
    base_url: String,
    client: reqwest::Client,
}

/// Wire shape of one record; dates arrive as `dd/mm/yyyy` text.
/// Fields the dashboard never reads (product, freight, rating, ...) are skipped.
#[derive(Debug, Deserialize)]
struct RawSale {
    #[serde(rename = "Categoria do Produto")]
    category: String,
    #[serde(rename = "Preço")]
    price: f64,
    #[serde(rename = "Data da Compra")]
    purchase_date: String,
    #[serde(rename = "Vendedor")]
    salesperson: String,
    #[serde(rename = "Local da compra")]
    location: String,
    lat: f64,
    lon: f64,
}

impl RawSale {
    fn into_record(self, index: usize) -> Result<SaleRecord, ParseError> {
        let purchase_date = NaiveDate::parse_from_str(self.purchase_date.trim(), PURCHASE_DATE_FORMAT)
            .map_err(|_| ParseError::PurchaseDate {
                index,
                value: self.purchase_date.clone(),
            })?;

        Ok(SaleRecord {
            category: self.category,
            price: self.price,
            purchase_date,
            salesperson: self.salesperson,
            location: self.location,
            lat: self.lat,
            lon: self.lon,
        })
    }
}

/// Decode a response body; one malformed date fails the whole load.
pub fn parse_sales(body: &str) -> Result<Vec<SaleRecord>, ParseError> {
    let raw: Vec<RawSale> = serde_json::from_str(body)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, sale)| sale.into_record(index))
        .collect()
}

impl HttpSalesRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_query_url(&self, query: &SalesQuery) -> String {
        let params: Vec<String> = query
            .pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        format!("{}?{}", self.base_url, params.join("&"))
    }
}

#[async_trait]
impl SalesRepository for HttpSalesRepository {
    async fn fetch_sales(&self, query: &SalesQuery) -> Result<Vec<SaleRecord>, DashboardError> {
        let url = self.build_query_url(query);
        tracing::debug!("Fetching sales from {}", url);

        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Sales endpoint answered {} for {}", status, url);
            return Err(FetchError::Status { status, body }.into());
        }

        let body = response.text().await.map_err(transport)?;
        let records = parse_sales(&body)?;
        tracing::info!("Fetched {} sales records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::query_builder::build_query;
    use crate::domain::sale::{Region, YearFilter};
    use axum::extract::{RawQuery, State};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use std::sync::{Arc, Mutex};

    const BODY: &str = r#"[
        {"Produto": "Modelagem preditiva", "Categoria do Produto": "livros", "Preço": 92.45,
         "Frete": 5.6, "Data da Compra": "01/01/2020", "Vendedor": "Thiago Silva",
         "Local da compra": "BA", "Avaliação da compra": 1, "Tipo de pagamento": "cartao_credito",
         "Quantidade de parcelas": 3, "lat": -13.29, "lon": -41.71},
        {"Categoria do Produto": "eletronicos", "Preço": 1500.0, "Data da Compra": "31/12/2022",
         "Vendedor": "Beatriz Moraes", "Local da compra": "SP", "lat": -22.19, "lon": -48.79}
    ]"#;

    type Seen = Arc<Mutex<Vec<Option<String>>>>;

    async fn serve(status: StatusCode, body: &'static str) -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route(
                "/produtos",
                get(move |State(seen): State<Seen>, RawQuery(query): RawQuery| async move {
                    seen.lock().unwrap().push(query);
                    (status, body)
                }),
            )
            .with_state(seen.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (format!("http://{}/produtos", addr), seen)
    }

    #[test]
    fn test_build_query_url() {
        let repo = HttpSalesRepository::new("https://labdados.com/produtos/".to_string());
        let url = repo.build_query_url(&build_query(Region::CentroOeste, YearFilter::Year(2023)));
        assert_eq!(url, "https://labdados.com/produtos?regiao=centro-oeste&ano=2023");

        let url = repo.build_query_url(&build_query(Region::Brasil, YearFilter::AllTime));
        assert_eq!(url, "https://labdados.com/produtos?regiao=&ano=");
    }

    #[test]
    fn test_parse_sales_reads_dates_and_fields() {
        let records = parse_sales(BODY).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].purchase_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(records[0].category, "livros");
        assert_eq!(records[1].purchase_date, NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
        assert_eq!(records[1].salesperson, "Beatriz Moraes");
        assert_eq!(records[1].location, "SP");
    }

    #[test]
    fn test_parse_sales_ignores_unused_fields_of_any_shape() {
        let body = r#"[{"Produto": 17, "Categoria do Produto": "livros", "Preço": 10.0,
            "Frete": "gratis", "Data da Compra": "05/06/2021", "Vendedor": "A",
            "Local da compra": "SP", "Avaliação da compra": 4.5, "Tipo de pagamento": null,
            "Quantidade de parcelas": 2.5, "lat": 0.0, "lon": 0.0}]"#;
        let records = parse_sales(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, 10.0);
    }

    #[test]
    fn test_parse_sales_rejects_bad_date() {
        let body = r#"[{"Categoria do Produto": "livros", "Preço": 1.0, "Data da Compra": "2020-01-31",
            "Vendedor": "A", "Local da compra": "SP", "lat": 0.0, "lon": 0.0}]"#;
        match parse_sales(body) {
            Err(ParseError::PurchaseDate { index, value }) => {
                assert_eq!(index, 0);
                assert_eq!(value, "2020-01-31");
            }
            other => panic!("expected date error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_sales_rejects_non_array() {
        assert!(matches!(parse_sales(r#"{"error": "nope"}"#), Err(ParseError::Payload(_))));
    }

    #[test]
    fn test_parse_sales_accepts_empty_array() {
        assert!(parse_sales("[]").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_sends_query_parameters() {
        let (url, seen) = serve(StatusCode::OK, BODY).await;
        let repo = HttpSalesRepository::new(url);

        let records = repo
            .fetch_sales(&build_query(Region::Sul, YearFilter::Year(2022)))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[Some("regiao=sul&ano=2022".to_string())]
        );
    }

    #[tokio::test]
    async fn test_fetch_non_success_is_fetch_error() {
        let (url, _) = serve(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let repo = HttpSalesRepository::new(url);

        let err = repo
            .fetch_sales(&build_query(Region::Brasil, YearFilter::AllTime))
            .await
            .unwrap_err();

        match err {
            DashboardError::Fetch(FetchError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_parse_error() {
        let (url, _) = serve(StatusCode::OK, "not json").await;
        let repo = HttpSalesRepository::new(url);

        let err = repo
            .fetch_sales(&build_query(Region::Brasil, YearFilter::AllTime))
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::Parse(ParseError::Payload(_))));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let repo = HttpSalesRepository::new(format!("http://127.0.0.1:{}/produtos", port));

        let err = repo
            .fetch_sales(&build_query(Region::Brasil, YearFilter::AllTime))
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::Fetch(FetchError::Transport { .. })));
    }
}
