use quickcheck_macros::quickcheck;
use serde_json::json;
use stock_dashboard_wasm::domain::chart::{
    AxisId, ChartAssembler, SeriesId, SeriesPoints, SeriesStyle, VisibilitySelection,
};
use stock_dashboard_wasm::domain::market_data::{RecordNormalizer, Transaction};
use strum::IntoEnumIterator;

fn sample_history() -> Vec<Transaction> {
    (1..=5u32)
        .map(|i| {
            RecordNormalizer::from_value(&json!({
                "date": format!("{i:02}.01.2024"),
                "lastPrice": format!("{},50", 100 + i),
                "sma20": "100,0",
                "sma50": "101,0",
                "ema20": "102,0",
                "ema50": "103,0",
                "bbMid": "104,0",
                "rsi": "50,0",
                "obv": "100000",
                "momentum": "1,5",
                "buySignal": (if i == 2 { "True" } else { "False" }),
                "sellSignal": (if i == 4 { "True" } else { "False" })
            }))
            .unwrap()
        })
        .collect()
}

#[test]
fn all_visible_yields_the_fixed_series_order() {
    let chart = ChartAssembler::assemble(&sample_history(), &VisibilitySelection::default());

    let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Transaction Price",
            "SMA 20",
            "SMA 50",
            "EMA 20",
            "EMA 50",
            "BB Mid",
            "RSI",
            "OBV",
            "Momentum",
            "Buy Signals",
            "Sell Signals",
        ]
    );
}

#[test]
fn oscillators_get_their_own_axes() {
    let chart = ChartAssembler::assemble(&sample_history(), &VisibilitySelection::default());

    let axis_of = |label: &str| chart.find_series(label).unwrap().axis;
    assert_eq!(axis_of("Transaction Price"), AxisId::Price);
    assert_eq!(axis_of("SMA 20"), AxisId::Price);
    assert_eq!(axis_of("BB Mid"), AxisId::Price);
    assert_eq!(axis_of("RSI"), AxisId::Rsi);
    assert_eq!(axis_of("OBV"), AxisId::Obv);
    assert_eq!(axis_of("Momentum"), AxisId::Momentum);
    assert_eq!(axis_of("Buy Signals"), AxisId::Price);
    assert_eq!(axis_of("Sell Signals"), AxisId::Price);
}

#[test]
fn hidden_series_are_absent_not_empty() {
    let mut visibility = VisibilitySelection::default();
    visibility.toggle(SeriesId::Rsi);
    visibility.toggle(SeriesId::Sma20);

    let chart = ChartAssembler::assemble(&sample_history(), &visibility);

    assert!(chart.find_series("RSI").is_none());
    assert!(chart.find_series("SMA 20").is_none());
    assert_eq!(chart.series_count(), 9);
}

#[test]
fn primary_series_ignores_visibility_toggles() {
    let mut visibility = VisibilitySelection::default();
    for id in SeriesId::iter() {
        visibility.set(id, false);
    }

    let chart = ChartAssembler::assemble(&sample_history(), &visibility);

    assert_eq!(chart.series_count(), 1);
    assert_eq!(chart.series[0].label, "Transaction Price");
    assert_eq!(chart.series[0].style, SeriesStyle::Line);
}

#[quickcheck]
fn series_count_is_one_plus_the_true_flags(mask: u16) -> bool {
    let mut visibility = VisibilitySelection::default();
    let mut expected = 1usize;
    for (bit, id) in SeriesId::iter().enumerate() {
        let on = mask & (1u16 << bit) != 0;
        visibility.set(id, on);
        if on {
            expected += 1;
        }
    }

    let chart = ChartAssembler::assemble(&sample_history(), &visibility);
    chart.series_count() == expected
}

#[test]
fn dense_series_align_one_to_one_with_labels() {
    let history = sample_history();
    let chart = ChartAssembler::assemble(&history, &VisibilitySelection::default());

    assert_eq!(chart.labels.len(), history.len());
    assert_eq!(chart.labels[0], "01.01.2024");
    for series in &chart.series {
        if let SeriesPoints::Dense(values) = &series.points {
            assert_eq!(values.len(), chart.labels.len(), "series {}", series.label);
        }
    }
}

#[test]
fn empty_sequence_yields_empty_description_with_primary_series() {
    let chart = ChartAssembler::assemble(&[], &VisibilitySelection::default());

    assert!(chart.labels.is_empty());
    let primary = chart.find_series("Transaction Price").unwrap();
    assert!(primary.points.is_empty());
}

#[test]
fn unparsable_dates_become_empty_category_labels() {
    let records = vec![
        RecordNormalizer::from_value(&json!({"date": "01.01.2024", "lastPrice": "1,0"})).unwrap(),
        RecordNormalizer::from_value(&json!({"date": "whenever", "lastPrice": "2,0"})).unwrap(),
    ];

    let chart = ChartAssembler::assemble(&records, &VisibilitySelection::default());
    assert_eq!(chart.labels, vec!["01.01.2024".to_string(), String::new()]);
}
