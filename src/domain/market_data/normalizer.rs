use super::entities::Transaction;
use super::value_objects::{Signal, TradeDate};
use crate::domain::errors::DashboardError;
use crate::domain::logging::LogComponent;
use crate::log_warn;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw wire record as served by the transactions endpoint.
///
/// The upstream pipeline serializes CSV cells, so every field arrives as
/// text: numbers locale-formatted (comma or period decimals), booleans as
/// "True"/"False". Unknown fields are ignored, missing ones stay absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTransaction {
    #[serde(deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(rename = "lastPrice", deserialize_with = "lenient_text")]
    pub last_price: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub min: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub max: Option<String>,
    #[serde(rename = "averagePrice", deserialize_with = "lenient_text")]
    pub average_price: Option<String>,
    #[serde(rename = "percentageChange", deserialize_with = "lenient_text")]
    pub percentage_change: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub quantity: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub turnover: Option<String>,
    #[serde(rename = "totalTurnover", deserialize_with = "lenient_text")]
    pub total_turnover: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub sma20: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub sma50: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub ema20: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub ema50: Option<String>,
    #[serde(rename = "bbMid", deserialize_with = "lenient_text")]
    pub bb_mid: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub rsi: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub obv: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub momentum: Option<String>,
    #[serde(rename = "buySignal", deserialize_with = "lenient_text")]
    pub buy_signal: Option<String>,
    #[serde(rename = "sellSignal", deserialize_with = "lenient_text")]
    pub sell_signal: Option<String>,
}

/// Accepts strings as-is; stray JSON numbers and booleans are converted to
/// their canonical text form ("True"/"False" matches the upstream CSV
/// dialect). Anything structured maps to absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(text) => Some(text),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }))
}

/// Record normalizer: locale-formatted wire records to typed transactions
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Comma decimals are the locale leak this endpoint is known for.
    /// Anything still unparsable degrades to NaN so one bad cell cannot
    /// take the rest of the record down.
    pub fn parse_numeric(field: Option<&str>) -> f64 {
        match field {
            Some(text) => text.trim().replace(',', ".").parse::<f64>().unwrap_or(f64::NAN),
            None => f64::NAN,
        }
    }

    /// Only the exact string "True" counts; everything else is false.
    pub fn parse_flag(field: Option<&str>) -> bool {
        field == Some("True")
    }

    /// Total over any raw record: fields populate independently.
    pub fn normalize(raw: &RawTransaction) -> Transaction {
        let buy_signal = Self::parse_flag(raw.buy_signal.as_deref());
        let sell_signal = Self::parse_flag(raw.sell_signal.as_deref());

        Transaction {
            date: TradeDate::parse(raw.date.as_deref().unwrap_or("")),
            last_price: Self::parse_numeric(raw.last_price.as_deref()),
            min: Self::parse_numeric(raw.min.as_deref()),
            max: Self::parse_numeric(raw.max.as_deref()),
            average_price: Self::parse_numeric(raw.average_price.as_deref()),
            percentage_change: Self::parse_numeric(raw.percentage_change.as_deref()),
            quantity: Self::parse_numeric(raw.quantity.as_deref()),
            turnover: Self::parse_numeric(raw.turnover.as_deref()),
            total_turnover: Self::parse_numeric(raw.total_turnover.as_deref()),
            sma20: Self::parse_numeric(raw.sma20.as_deref()),
            sma50: Self::parse_numeric(raw.sma50.as_deref()),
            ema20: Self::parse_numeric(raw.ema20.as_deref()),
            ema50: Self::parse_numeric(raw.ema50.as_deref()),
            bb_mid: Self::parse_numeric(raw.bb_mid.as_deref()),
            rsi: Self::parse_numeric(raw.rsi.as_deref()),
            obv: Self::parse_numeric(raw.obv.as_deref()),
            momentum: Self::parse_numeric(raw.momentum.as_deref()),
            buy_signal,
            sell_signal,
            signal: Signal::classify(buy_signal, sell_signal),
        }
    }

    /// One raw JSON value to one transaction. Fails only when the value is
    /// not a record at all; the caller treats that as a per-record skip.
    pub fn from_value(value: &Value) -> Result<Transaction, DashboardError> {
        let raw: RawTransaction = serde_json::from_value(value.clone())
            .map_err(|e| DashboardError::MalformedRecord(e.to_string()))?;
        Ok(Self::normalize(&raw))
    }

    /// Batch entry point: malformed entries are skipped with a warning,
    /// the remaining records survive. Never aborts the batch.
    pub fn normalize_batch(values: &[Value]) -> Vec<Transaction> {
        let mut records = Vec::with_capacity(values.len());
        let mut skipped = 0usize;

        for (index, value) in values.iter().enumerate() {
            match Self::from_value(value) {
                Ok(transaction) => records.push(transaction),
                Err(error) => {
                    skipped += 1;
                    log_warn!(
                        LogComponent::Domain("Normalizer"),
                        "Skipping record {index}: {error}"
                    );
                }
            }
        }

        if skipped > 0 {
            log_warn!(
                LogComponent::Domain("Normalizer"),
                "⚠️ Skipped {skipped} malformed records, kept {}",
                records.len()
            );
        }

        records
    }
}
