use chrono::NaiveDate;
use serde_json::json;
use stock_dashboard_wasm::application::dashboard::DashboardController;
use stock_dashboard_wasm::domain::chart::SeriesId;
use stock_dashboard_wasm::domain::market_data::{RecordNormalizer, Transaction};

fn records() -> Vec<Transaction> {
    (1..=4u32)
        .map(|i| {
            RecordNormalizer::from_value(&json!({
                "date": format!("{i:02}.01.2024"),
                "lastPrice": format!("{i},00"),
                "sma20": "1,0",
                "rsi": "50,0"
            }))
            .unwrap()
        })
        .collect()
}

fn loaded_controller() -> DashboardController {
    let mut controller = DashboardController::new();
    controller.set_company("ALK");
    let ticket = controller.begin_fetch().unwrap();
    assert!(controller.complete_fetch(&ticket, Ok(records())));
    controller
}

#[test]
fn toggle_off_then_on_reproduces_the_chart_byte_for_byte() {
    let mut controller = loaded_controller();
    let before = controller.chart_description().to_json();

    controller.toggle_series(SeriesId::Sma20);
    let hidden = controller.chart_description().to_json();
    assert_ne!(hidden, before);

    controller.toggle_series(SeriesId::Sma20);
    let restored = controller.chart_description().to_json();
    assert_eq!(restored, before);
}

#[test]
fn visibility_survives_a_refilter() {
    let mut controller = loaded_controller();
    controller.toggle_series(SeriesId::Rsi);

    controller.set_date_range(
        NaiveDate::from_ymd_opt(2024, 1, 2),
        NaiveDate::from_ymd_opt(2024, 1, 3),
    );

    let chart = controller.chart_description();
    assert!(chart.find_series("RSI").is_none());
    assert_eq!(chart.labels.len(), 2);
}

#[test]
fn visibility_survives_a_filter_reset() {
    let mut controller = loaded_controller();
    controller.toggle_series(SeriesId::BuySignal);
    controller.reset_filter();

    assert!(controller.chart_description().find_series("Buy Signals").is_none());
}

#[test]
fn chart_is_recomputed_per_call_not_cached() {
    let mut controller = loaded_controller();
    let full = controller.chart_description();

    controller.set_date_range(
        NaiveDate::from_ymd_opt(2024, 1, 1),
        NaiveDate::from_ymd_opt(2024, 1, 1),
    );
    let narrowed = controller.chart_description();

    assert_eq!(full.labels.len(), 4);
    assert_eq!(narrowed.labels.len(), 1);
}
