use serde::{Deserialize, Serialize};

/// One OHLC price bar.
///
/// Candle series are ordered newest first throughout the system: index 0 is
/// the most recent bar, and a bar's time is implicit in its position. Every
/// indicator and detector depends on this ordering; a differently-ordered
/// series must not be passed in without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Directional market view synthesized from trend and structure signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

impl std::fmt::Display for Bias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bias::Bullish => write!(f, "Bullish"),
            Bias::Bearish => write!(f, "Bearish"),
            Bias::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Which side of the market an order block sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    Demand,
    Supply,
}

/// An order-block zone: a price region associated with past institutional
/// buying (demand) or selling (supply) pressure.
///
/// `low <= high` always. `index` is the position of the zone's defining
/// candle in the original newest-first series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub kind: ZoneKind,
    pub low: f64,
    pub high: f64,
    pub index: usize,
}

/// Direction of a fair value gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapKind {
    Bullish,
    Bearish,
}

/// A fair value gap: a price interval the market jumped over between the
/// outer candles of a three-candle window.
///
/// `top >= bottom` always. `index` is the window's first position in the
/// original newest-first series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    pub kind: GapKind,
    pub top: f64,
    pub bottom: f64,
    pub index: usize,
}

/// Recommended trade levels derived from the latest close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeLevels {
    pub entry: f64,
    pub tp1: f64,
    pub tp2: f64,
    pub sl: f64,
}

/// The full output of one analysis pass over a candle series.
///
/// A pure derived value: it copies the numbers it needs and holds no
/// references into the input series. Nothing persists between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub pair: String,
    pub bias: Bias,
    /// `None` when fewer than 9 candles were available.
    pub ema9: Option<f64>,
    /// `None` when fewer than 20 candles were available.
    pub ema20: Option<f64>,
    pub momentum: f64,
    pub zones: Vec<Zone>,
    pub gaps: Vec<Gap>,
    pub recommended: TradeLevels,
    pub reasoning: String,
}
