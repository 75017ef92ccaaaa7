use crate::domain::errors::FetchResult;
use crate::domain::market_data::CompanyCode;
use serde_json::Value;

/// Interface to the consumed transactions API.
///
/// Implemented by the gloo-net client in infrastructure and by in-memory
/// fakes in tests; the application layer only sees this trait.
#[allow(async_fn_in_trait)]
pub trait TransactionRepository {
    /// List tradable company codes
    async fn fetch_companies(&self) -> FetchResult<Vec<String>>;

    /// Raw transaction history for one company, exactly as served
    async fn fetch_transactions(&self, company: &CompanyCode) -> FetchResult<Vec<Value>>;
}
