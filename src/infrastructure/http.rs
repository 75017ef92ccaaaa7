use crate::domain::errors::{DashboardError, FetchResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{CompanyCode, TransactionRepository};
use crate::log_debug;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// REST client for the dashboard backend
#[derive(Clone)]
pub struct StockApiClient {
    base_url: String,
}

impl Default for StockApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StockApiClient {
    pub fn new() -> Self {
        Self { base_url: "http://localhost:8080/api".to_string() }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    pub fn companies_url(&self) -> String {
        format!("{}/companies", self.base_url)
    }

    pub fn transactions_url(&self, company: &CompanyCode) -> String {
        format!("{}/transactions/{}", self.base_url, company.value())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        log_debug!(LogComponent::Infrastructure("StockApi"), "🌐 GET {url}");

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| DashboardError::FetchFailure(format!("request failed: {e:?}")))?;

        if !response.ok() {
            return Err(DashboardError::FetchFailure(format!(
                "HTTP {} {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DashboardError::FetchFailure(format!("invalid JSON body: {e:?}")))
    }
}

impl TransactionRepository for StockApiClient {
    async fn fetch_companies(&self) -> FetchResult<Vec<String>> {
        let companies: Vec<String> = self.get_json(&self.companies_url()).await?;
        get_logger().info(
            LogComponent::Infrastructure("StockApi"),
            &format!("✅ Received {} company codes", companies.len()),
        );
        Ok(companies)
    }

    async fn fetch_transactions(&self, company: &CompanyCode) -> FetchResult<Vec<Value>> {
        let rows: Vec<Value> = self.get_json(&self.transactions_url(company)).await?;
        get_logger().info(
            LogComponent::Infrastructure("StockApi"),
            &format!("✅ Received {} raw records for {}", rows.len(), company.value()),
        );
        Ok(rows)
    }
}
