pub use super::value_objects::{DateRange, Signal, TradeDate};
use super::services::TransactionFilterService;
use serde::{Deserialize, Serialize};

/// Domain entity - one normalized trading day for a company
///
/// All numeric fields are f64 with NaN as the "unparsable" sentinel; the
/// two upstream flags stay alongside the derived signal so the table can
/// show exactly what the source reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub date: TradeDate,
    pub last_price: f64,
    pub min: f64,
    pub max: f64,
    pub average_price: f64,
    pub percentage_change: f64,
    pub quantity: f64,
    pub turnover: f64,
    pub total_turnover: f64,
    pub sma20: f64,
    pub sma50: f64,
    pub ema20: f64,
    pub ema50: f64,
    pub bb_mid: f64,
    pub rsi: f64,
    pub obv: f64,
    pub momentum: f64,
    pub buy_signal: bool,
    pub sell_signal: bool,
    pub signal: Signal,
}

impl Transaction {
    pub fn is_buy(&self) -> bool {
        self.signal == Signal::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.signal == Signal::Sell
    }
}

/// Domain entity - chronologically ordered history of one company
///
/// Replaced wholesale on every fetch; never mutated in place, so the
/// filter and assembler always see a consistent sequence.
#[derive(Debug, Clone, Default)]
pub struct TransactionHistory {
    transactions: Vec<Transaction>,
}

impl TransactionHistory {
    pub fn new() -> Self {
        Self { transactions: Vec::new() }
    }

    /// Build from records in arbitrary order; stable ascending sort by date
    pub fn from_records(records: Vec<Transaction>) -> Self {
        Self { transactions: TransactionFilterService::sort_chronological(records) }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn latest(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Restrict to an inclusive date range (bounded ranges only)
    pub fn restrict(&self, range: &DateRange) -> Vec<Transaction> {
        TransactionFilterService::filter_by_range(&self.transactions, range)
    }
}
