use common::{Bias, Candle};
use proptest::prelude::*;

/// A well-formed candle: open and close sit inside the high/low range.
fn arb_candle() -> impl Strategy<Value = Candle> {
    (1.0f64..10_000.0, 0.0f64..100.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(
        |(low, span, open_t, close_t)| Candle {
            open: low + span * open_t,
            high: low + span,
            low,
            close: low + span * close_t,
        },
    )
}

proptest! {
    /// The analyzer must complete on any non-empty well-formed series, and
    /// its structural invariants must hold on the output.
    #[test]
    fn analyzer_never_panics_on_any_series(
        candles in prop::collection::vec(arb_candle(), 1..120),
    ) {
        let result = analysis::analyze("XAU/USD", &candles);

        prop_assert!(result.zones.len() <= 5);
        prop_assert!(result.gaps.len() <= 5);
        for zone in &result.zones {
            prop_assert!(zone.low <= zone.high);
        }
        for gap in &result.gaps {
            prop_assert!(gap.top >= gap.bottom);
        }
    }

    /// Momentum is exactly the first difference of the close series.
    #[test]
    fn momentum_is_exact_first_difference(
        closes in prop::collection::vec(1.0f64..10_000.0, 2..50),
    ) {
        let value = analysis::indicators::momentum(&closes);
        prop_assert_eq!(value, closes[0] - closes[1]);
    }

    /// Any series shorter than the period leaves the EMA unavailable.
    #[test]
    fn short_series_ema_is_none(
        values in prop::collection::vec(1.0f64..10_000.0, 0..9),
    ) {
        prop_assert!(analysis::indicators::ema(&values, 9).is_none());
    }

    /// With both EMAs defined, bias follows the strict crossover comparison.
    #[test]
    fn bias_follows_ema_crossover(
        candles in prop::collection::vec(arb_candle(), 20..80),
    ) {
        let result = analysis::analyze("EUR/USD", &candles);

        let ema9 = result.ema9.expect("20+ candles define EMA9");
        let ema20 = result.ema20.expect("20+ candles define EMA20");
        if ema9 > ema20 {
            prop_assert_eq!(result.bias, Bias::Bullish);
        } else {
            prop_assert_eq!(result.bias, Bias::Bearish);
        }
    }

    /// The stop always sits on the opposite side of entry from both targets.
    #[test]
    fn stop_opposes_the_targets(
        candles in prop::collection::vec(arb_candle(), 1..80),
    ) {
        let r = analysis::analyze("GBP/USD", &candles).recommended;

        let targets_above = r.tp1 > r.entry && r.tp2 > r.entry;
        let targets_below = r.tp1 < r.entry && r.tp2 < r.entry;
        prop_assert!(targets_above || targets_below);
        if targets_above {
            prop_assert!(r.sl < r.entry);
        } else {
            prop_assert!(r.sl > r.entry);
        }
    }
}
