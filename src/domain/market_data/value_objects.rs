use chrono::NaiveDate;
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - company code as listed by the exchange
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "CompanyCode({})", _0)]
pub struct CompanyCode(String);

impl CompanyCode {
    pub fn new(code: String) -> Result<Self, String> {
        if code.trim().is_empty() {
            return Err("Company code cannot be empty".to_string());
        }
        Ok(Self(code.trim().to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CompanyCode {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

/// Value Object - trading day
///
/// Carries the undefined variant instead of failing: a record with an
/// unreadable date still reaches the table, formats as an empty label and
/// sorts after every readable date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeDate(Option<NaiveDate>);

impl TradeDate {
    /// Accepts the exchange format (`dd.mm.yyyy`), ISO (`yyyy-mm-dd`) and
    /// the date prefix of a longer ISO timestamp.
    pub fn parse(input: &str) -> Self {
        let text = input.trim();
        let parsed = NaiveDate::parse_from_str(text, "%d.%m.%Y")
            .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
            .or_else(|_| NaiveDate::parse_from_str(text.get(..10).unwrap_or(""), "%Y-%m-%d"))
            .ok();
        Self(parsed)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    pub fn undefined() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    /// Category label: zero-padded day.month.year, empty when undefined
    pub fn format_label(&self) -> String {
        match self.0 {
            Some(date) => date.format("%d.%m.%Y").to_string(),
            None => String::new(),
        }
    }
}

impl Ord for TradeDate {
    // Undefined dates sort after every defined one; equal among themselves
    // so a stable sort keeps their input order.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for TradeDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Value Object - derived trading signal
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Signal {
    #[strum(serialize = "Buy")]
    Buy,
    #[strum(serialize = "Sell")]
    Sell,
    #[strum(serialize = "Hold")]
    Hold,
}

impl Signal {
    /// Buy takes precedence when both upstream flags are set.
    pub fn classify(buy_signal: bool, sell_signal: bool) -> Self {
        if buy_signal {
            Self::Buy
        } else if sell_signal {
            Self::Sell
        } else {
            Self::Hold
        }
    }
}

/// Value Object - inclusive calendar interval, either bound optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Filtering applies only when both bounds are present.
    pub fn is_bounded(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Inclusive on both ends; undefined dates never match a bounded range.
    /// An inverted range matches nothing, which is the documented behavior,
    /// not an error.
    pub fn contains(&self, date: &TradeDate) -> bool {
        match (self.from, self.to, date.value()) {
            (Some(from), Some(to), Some(day)) => from <= day && day <= to,
            _ => false,
        }
    }
}
