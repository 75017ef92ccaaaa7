use super::entities::Transaction;
use super::value_objects::DateRange;

/// Domain service - chronological ordering and date-range restriction
pub struct TransactionFilterService;

impl TransactionFilterService {
    /// Stable ascending sort: equal dates keep their input order and
    /// undefined dates go last (see TradeDate::cmp).
    pub fn sort_chronological(mut records: Vec<Transaction>) -> Vec<Transaction> {
        records.sort_by(|a, b| a.date.cmp(&b.date));
        records
    }

    /// Bounded ranges only: with either bound missing the full sequence
    /// comes back untouched. An inverted range yields an empty result.
    pub fn filter_by_range(records: &[Transaction], range: &DateRange) -> Vec<Transaction> {
        if !range.is_bounded() {
            return records.to_vec();
        }
        records.iter().filter(|tx| range.contains(&tx.date)).cloned().collect()
    }
}
