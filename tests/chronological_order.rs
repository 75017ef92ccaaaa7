use serde_json::json;
use stock_dashboard_wasm::domain::market_data::{
    RecordNormalizer, Transaction, TransactionHistory,
};

fn record(date: &str, quantity: &str) -> Transaction {
    RecordNormalizer::from_value(&json!({
        "date": date,
        "lastPrice": "1,0",
        "quantity": quantity
    }))
    .unwrap()
}

#[test]
fn arbitrary_input_order_comes_out_ascending() {
    let history = TransactionHistory::from_records(vec![
        record("03.01.2024", "1"),
        record("01.01.2024", "2"),
        record("02.01.2024", "3"),
    ]);

    let labels: Vec<String> =
        history.transactions().iter().map(|tx| tx.date.format_label()).collect();
    assert_eq!(labels, vec!["01.01.2024", "02.01.2024", "03.01.2024"]);
}

#[test]
fn equal_dates_keep_their_input_order() {
    let history = TransactionHistory::from_records(vec![
        record("02.01.2024", "10"),
        record("01.01.2024", "0"),
        record("02.01.2024", "20"),
        record("02.01.2024", "30"),
    ]);

    let same_day: Vec<f64> = history
        .transactions()
        .iter()
        .filter(|tx| tx.date.format_label() == "02.01.2024")
        .map(|tx| tx.quantity)
        .collect();
    assert_eq!(same_day, vec![10.0, 20.0, 30.0]);
}

#[test]
fn unparsable_dates_sort_last_in_input_order() {
    let history = TransactionHistory::from_records(vec![
        record("??", "1"),
        record("02.01.2024", "2"),
        record("garbage", "3"),
        record("01.01.2024", "4"),
    ]);

    let tags: Vec<f64> = history.transactions().iter().map(|tx| tx.quantity).collect();
    assert_eq!(tags, vec![4.0, 2.0, 1.0, 3.0]);
    assert!(!history.transactions()[2].date.is_defined());
    assert!(!history.transactions()[3].date.is_defined());
}

#[test]
fn empty_input_is_an_empty_history() {
    let history = TransactionHistory::from_records(Vec::new());
    assert!(history.is_empty());
    assert_eq!(history.count(), 0);
    assert!(history.latest().is_none());
}
