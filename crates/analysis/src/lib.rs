//! Deterministic market-structure analyzer.
//!
//! A pure, synchronous pipeline over a newest-first candle series: the close
//! series is extracted once, the trend estimate (EMA pair plus one-step
//! momentum) and the structure scans (order blocks, fair value gaps) run
//! independently over it, and the synthesizer combines both into a bias and
//! recommended trade levels.

pub mod indicators;
pub mod structure;
pub mod synth;

use tracing::debug;

use common::{Candle, MarketAnalysis};

use crate::indicators::{ema, momentum};
use crate::structure::{detect_fair_value_gaps, detect_order_blocks};

/// Fast EMA period for the trend estimate.
pub const EMA_FAST_PERIOD: usize = 9;
/// Slow EMA period for the trend estimate.
pub const EMA_SLOW_PERIOD: usize = 20;

/// Run the full analysis pipeline over a newest-first candle series.
///
/// The result is a pure derived value; nothing is retained between calls,
/// so this may be invoked concurrently with independent inputs.
///
/// # Panics
///
/// Panics if `candles` is empty. Callers validate the series before
/// invoking the analyzer.
pub fn analyze(pair: &str, candles: &[Candle]) -> MarketAnalysis {
    assert!(!candles.is_empty(), "analyze requires at least one candle");

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    // The close series is consumed as received (newest first), so the EMA
    // seed window covers the newest bars. See `indicators::ema`.
    let ema9 = ema(&closes, EMA_FAST_PERIOD);
    let ema20 = ema(&closes, EMA_SLOW_PERIOD);
    let momentum = momentum(&closes);

    let zones = detect_order_blocks(candles);
    let gaps = detect_fair_value_gaps(candles);

    let result = synth::assemble(pair, &closes, ema9, ema20, momentum, zones, gaps);

    debug!(
        pair,
        bias = %result.bias,
        zones = result.zones.len(),
        gaps = result.gaps.len(),
        "Analysis complete"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Bias, ZoneKind};

    fn candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle { open, high, low, close }
    }

    fn flat(price: f64) -> Candle {
        candle(price, price, price, price)
    }

    #[test]
    fn thirty_flat_candles_resolve_bearish_via_tie_break() {
        let candles = vec![flat(100.0); 30];
        let result = analyze("XAU/USD", &candles);

        assert_eq!(result.momentum, 0.0);
        assert_eq!(result.ema9, Some(100.0));
        assert_eq!(result.ema20, Some(100.0));
        // Equal EMAs: the strict comparison resolves to Bearish
        assert_eq!(result.bias, Bias::Bearish);
        assert_eq!(result.recommended.entry, 100.0);
        assert_eq!(result.recommended.sl, 100.5);
        assert_eq!(result.recommended.tp1, 99.7);
    }

    #[test]
    fn single_candle_degrades_to_neutral() {
        let candles = vec![flat(1935.5)];
        let result = analyze("XAU/USD", &candles);

        assert_eq!(result.ema9, None);
        assert_eq!(result.ema20, None);
        assert_eq!(result.momentum, 0.0);
        assert_eq!(result.bias, Bias::Neutral);
        assert!(result.reasoning.contains("n/a"));
    }

    #[test]
    fn demand_shape_yields_exactly_one_demand_zone() {
        // Window (c, p, n) at i = 2: n closes bullish, n.low undercuts
        // p.low, and p.low does not undercut c.low.
        let candles = vec![
            candle(101.0, 102.0, 100.0, 101.5), // c
            candle(100.5, 101.5, 100.0, 101.0), // p
            candle(99.0, 101.5, 98.0, 101.0),   // n
        ];
        let result = analyze("EUR/USD", &candles);

        assert_eq!(result.zones.len(), 1);
        let zone = &result.zones[0];
        assert_eq!(zone.kind, ZoneKind::Demand);
        assert_eq!(zone.low, 98.0);
        assert_eq!(zone.high, 101.0);
        assert_eq!(zone.index, 2);
    }

    #[test]
    fn momentum_fallback_sets_bias_when_emas_unavailable() {
        // Two candles: too short for either EMA, momentum decides
        let rising = vec![flat(101.0), flat(100.0)];
        assert_eq!(analyze("XAU/USD", &rising).bias, Bias::Bullish);

        let falling = vec![flat(100.0), flat(101.0)];
        assert_eq!(analyze("XAU/USD", &falling).bias, Bias::Bearish);
    }

    #[test]
    fn result_is_tagged_with_the_requested_pair() {
        let result = analyze("GBP/JPY", &[flat(190.0)]);
        assert_eq!(result.pair, "GBP/JPY");
    }

    #[test]
    #[should_panic(expected = "at least one candle")]
    fn empty_series_is_rejected() {
        analyze("XAU/USD", &[]);
    }
}
