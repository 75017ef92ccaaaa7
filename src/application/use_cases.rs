use crate::domain::errors::FetchResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{
    CompanyCode, RecordNormalizer, Transaction, TransactionRepository,
};

/// Use Case: load the tradable company list
pub struct LoadCompaniesUseCase<R: TransactionRepository> {
    repository: R,
}

impl<R: TransactionRepository> LoadCompaniesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> FetchResult<Vec<String>> {
        let companies = self.repository.fetch_companies().await?;
        get_logger().info(
            LogComponent::Application("LoadCompanies"),
            &format!("✅ Loaded {} companies", companies.len()),
        );
        Ok(companies)
    }
}

/// Use Case: fetch one company's history and normalize it record by record
///
/// Malformed records are skipped inside the normalizer; only transport and
/// body-level failures surface as errors.
pub struct LoadTransactionsUseCase<R: TransactionRepository> {
    repository: R,
}

impl<R: TransactionRepository> LoadTransactionsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, company: &CompanyCode) -> FetchResult<Vec<Transaction>> {
        let raw = self.repository.fetch_transactions(company).await?;
        let records = RecordNormalizer::normalize_batch(&raw);
        get_logger().info(
            LogComponent::Application("LoadTransactions"),
            &format!(
                "📊 Normalized {} of {} records for {}",
                records.len(),
                raw.len(),
                company.value()
            ),
        );
        Ok(records)
    }
}
