use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// Value Object - the closed set of toggleable series
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
pub enum SeriesId {
    #[strum(serialize = "sma20")]
    #[serde(rename = "sma20")]
    Sma20,

    #[strum(serialize = "sma50")]
    #[serde(rename = "sma50")]
    Sma50,

    #[strum(serialize = "ema20")]
    #[serde(rename = "ema20")]
    Ema20,

    #[strum(serialize = "ema50")]
    #[serde(rename = "ema50")]
    Ema50,

    #[strum(serialize = "bbMid")]
    #[serde(rename = "bbMid")]
    BbMid,

    #[strum(serialize = "rsi")]
    #[serde(rename = "rsi")]
    Rsi,

    #[strum(serialize = "obv")]
    #[serde(rename = "obv")]
    Obv,

    #[strum(serialize = "momentum")]
    #[serde(rename = "momentum")]
    Momentum,

    #[strum(serialize = "buySignal")]
    #[serde(rename = "buySignal")]
    BuySignal,

    #[strum(serialize = "sellSignal")]
    #[serde(rename = "sellSignal")]
    SellSignal,
}

/// Value Object - which axis a series is scaled against
///
/// Oscillators get an axis each; their value ranges (0-100 for RSI,
/// cumulative volume for OBV, price deltas for momentum) are incompatible
/// with the price scale and with each other.
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
pub enum AxisId {
    #[strum(serialize = "price")]
    #[serde(rename = "price")]
    Price,

    #[strum(serialize = "rsi")]
    #[serde(rename = "rsi")]
    Rsi,

    #[strum(serialize = "obv")]
    #[serde(rename = "obv")]
    Obv,

    #[strum(serialize = "momentum")]
    #[serde(rename = "momentum")]
    Momentum,
}

/// Value Object - how the renderer should draw a series
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum SeriesStyle {
    #[strum(serialize = "line")]
    #[serde(rename = "line")]
    Line,

    #[strum(serialize = "marker")]
    #[serde(rename = "marker")]
    Marker,
}

/// Value Object - per-series visibility map
///
/// Defaults to everything visible. Mutated only by explicit toggles and
/// survives re-filters; a full reload builds a fresh default.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilitySelection {
    visible: HashMap<SeriesId, bool>,
}

impl Default for VisibilitySelection {
    fn default() -> Self {
        Self { visible: SeriesId::iter().map(|id| (id, true)).collect() }
    }
}

impl VisibilitySelection {
    pub fn all_visible() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, id: SeriesId) -> bool {
        self.visible.get(&id).copied().unwrap_or(true)
    }

    pub fn toggle(&mut self, id: SeriesId) {
        let flag = self.visible.entry(id).or_insert(true);
        *flag = !*flag;
    }

    pub fn set(&mut self, id: SeriesId, visible: bool) {
        self.visible.insert(id, visible);
    }

    pub fn visible_count(&self) -> usize {
        self.visible.values().filter(|flag| **flag).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn defaults_to_all_visible() {
        let selection = VisibilitySelection::default();
        for id in SeriesId::iter() {
            assert!(selection.is_visible(id));
        }
        assert_eq!(selection.visible_count(), 10);
    }

    #[test]
    fn toggle_flips_and_round_trips() {
        let mut selection = VisibilitySelection::default();
        selection.toggle(SeriesId::Rsi);
        assert!(!selection.is_visible(SeriesId::Rsi));
        selection.toggle(SeriesId::Rsi);
        assert!(selection.is_visible(SeriesId::Rsi));
    }

    #[test]
    fn series_ids_parse_from_their_wire_names() {
        assert_eq!(SeriesId::from_str("sma20"), Ok(SeriesId::Sma20));
        assert_eq!(SeriesId::from_str("bbMid"), Ok(SeriesId::BbMid));
        assert_eq!(SeriesId::from_str("buySignal"), Ok(SeriesId::BuySignal));
        assert!(SeriesId::from_str("volume").is_err());
    }
}
