use super::entities::{ChartDescription, MarkerPoint, Series, SeriesPoints};
use super::value_objects::{AxisId, SeriesId, SeriesStyle, VisibilitySelection};
use crate::domain::market_data::{Signal, Transaction};

/// Domain service - deterministic chart composition
///
/// Series order is fixed so legend and render order never shuffle between
/// recomputes: primary price, price-axis overlays, oscillators on their
/// own axes, then the buy/sell marker series.
pub struct ChartAssembler;

impl ChartAssembler {
    /// Total over any (sequence, selection) pair; the empty sequence
    /// yields zero labels and a zero-point primary series.
    pub fn assemble(
        transactions: &[Transaction],
        visibility: &VisibilitySelection,
    ) -> ChartDescription {
        let labels: Vec<String> =
            transactions.iter().map(|tx| tx.date.format_label()).collect();

        let overlays: [(SeriesId, &str, fn(&Transaction) -> f64); 5] = [
            (SeriesId::Sma20, "SMA 20", |tx| tx.sma20),
            (SeriesId::Sma50, "SMA 50", |tx| tx.sma50),
            (SeriesId::Ema20, "EMA 20", |tx| tx.ema20),
            (SeriesId::Ema50, "EMA 50", |tx| tx.ema50),
            (SeriesId::BbMid, "BB Mid", |tx| tx.bb_mid),
        ];

        let oscillators: [(SeriesId, &str, AxisId, fn(&Transaction) -> f64); 3] = [
            (SeriesId::Rsi, "RSI", AxisId::Rsi, |tx| tx.rsi),
            (SeriesId::Obv, "OBV", AxisId::Obv, |tx| tx.obv),
            (SeriesId::Momentum, "Momentum", AxisId::Momentum, |tx| tx.momentum),
        ];

        let mut series = Vec::new();

        // The primary series ignores visibility toggles
        series.push(Self::dense_series(
            "Transaction Price",
            AxisId::Price,
            transactions,
            |tx| tx.last_price,
        ));

        for (id, label, extract) in overlays {
            if visibility.is_visible(id) {
                series.push(Self::dense_series(label, AxisId::Price, transactions, extract));
            }
        }

        for (id, label, axis, extract) in oscillators {
            if visibility.is_visible(id) {
                series.push(Self::dense_series(label, axis, transactions, extract));
            }
        }

        if visibility.is_visible(SeriesId::BuySignal) {
            series.push(Self::marker_series("Buy Signals", Signal::Buy, transactions));
        }
        if visibility.is_visible(SeriesId::SellSignal) {
            series.push(Self::marker_series("Sell Signals", Signal::Sell, transactions));
        }

        ChartDescription { labels, series }
    }

    fn dense_series(
        label: &str,
        axis: AxisId,
        transactions: &[Transaction],
        extract: fn(&Transaction) -> f64,
    ) -> Series {
        Series {
            label: label.to_string(),
            axis,
            style: SeriesStyle::Line,
            points: SeriesPoints::Dense(transactions.iter().map(extract).collect()),
        }
    }

    /// Markers carry the transaction price so they sit on the price line
    fn marker_series(label: &str, signal: Signal, transactions: &[Transaction]) -> Series {
        let points = transactions
            .iter()
            .filter(|tx| tx.signal == signal)
            .map(|tx| MarkerPoint { category: tx.date.format_label(), value: tx.last_price })
            .collect();

        Series {
            label: label.to_string(),
            axis: AxisId::Price,
            style: SeriesStyle::Marker,
            points: SeriesPoints::Sparse(points),
        }
    }
}
