use chrono::NaiveDate;
use serde_json::json;
use stock_dashboard_wasm::domain::market_data::{
    DateRange, RecordNormalizer, Transaction, TransactionFilterService,
};

fn day(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

fn record(date: &str) -> Transaction {
    RecordNormalizer::from_value(&json!({"date": date, "lastPrice": "1,0"})).unwrap()
}

fn january() -> Vec<Transaction> {
    TransactionFilterService::sort_chronological(vec![
        record("01.01.2024"),
        record("05.01.2024"),
        record("10.01.2024"),
        record("31.01.2024"),
    ])
}

#[test]
fn bounded_range_is_inclusive_on_both_ends() {
    let filtered = TransactionFilterService::filter_by_range(
        &january(),
        &DateRange::new(Some(day("2024-01-05")), Some(day("2024-01-10"))),
    );

    let labels: Vec<String> = filtered.iter().map(|tx| tx.date.format_label()).collect();
    assert_eq!(labels, vec!["05.01.2024", "10.01.2024"]);
}

#[test]
fn half_open_range_returns_the_full_sequence() {
    let records = january();

    let only_from = TransactionFilterService::filter_by_range(
        &records,
        &DateRange::new(Some(day("2024-01-05")), None),
    );
    let only_to = TransactionFilterService::filter_by_range(
        &records,
        &DateRange::new(None, Some(day("2024-01-05"))),
    );

    assert_eq!(only_from.len(), records.len());
    assert_eq!(only_to.len(), records.len());
}

#[test]
fn no_range_filtering_is_idempotent() {
    let records = january();
    let once = TransactionFilterService::filter_by_range(&records, &DateRange::unbounded());
    let twice = TransactionFilterService::filter_by_range(&once, &DateRange::unbounded());

    // NaN fields make whole-record equality useless; the label sequence
    // identifies order and content here
    let labels = |txs: &[Transaction]| -> Vec<String> {
        txs.iter().map(|tx| tx.date.format_label()).collect()
    };
    assert_eq!(labels(&once), labels(&records));
    assert_eq!(labels(&twice), labels(&once));
}

#[test]
fn inverted_range_yields_empty_not_error() {
    let filtered = TransactionFilterService::filter_by_range(
        &january(),
        &DateRange::new(Some(day("2024-02-01")), Some(day("2024-01-01"))),
    );
    assert!(filtered.is_empty());
}

#[test]
fn empty_input_filters_to_empty() {
    let filtered = TransactionFilterService::filter_by_range(
        &[],
        &DateRange::new(Some(day("2024-01-01")), Some(day("2024-01-31"))),
    );
    assert!(filtered.is_empty());
}

#[test]
fn undefined_dates_never_match_a_bounded_range() {
    let records = TransactionFilterService::sort_chronological(vec![
        record("05.01.2024"),
        record("not a date"),
    ]);

    let filtered = TransactionFilterService::filter_by_range(
        &records,
        &DateRange::new(Some(day("2024-01-01")), Some(day("2024-12-31"))),
    );

    assert_eq!(filtered.len(), 1);
    assert!(filtered[0].date.is_defined());
}
