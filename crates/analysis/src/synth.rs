use common::{Bias, Gap, MarketAnalysis, TradeLevels, Zone};

/// Combine the trend estimate and structure scans into the final record.
///
/// `closes` is the newest-first close series; `closes[0]` anchors the
/// recommended levels. Levels and momentum are reported at 4 decimal
/// digits.
pub fn assemble(
    pair: &str,
    closes: &[f64],
    ema9: Option<f64>,
    ema20: Option<f64>,
    momentum: f64,
    zones: Vec<Zone>,
    gaps: Vec<Gap>,
) -> MarketAnalysis {
    let bias = bias_from(ema9, ema20, momentum);
    let recommended = levels_for(bias, closes[0]);
    let reasoning = format!(
        "EMA9 {} vs EMA20 {}, momentum {:.2}",
        fmt2(ema9),
        fmt2(ema20),
        momentum
    );

    MarketAnalysis {
        pair: pair.to_string(),
        bias,
        ema9,
        ema20,
        momentum: round4(momentum),
        zones,
        gaps,
        recommended,
        reasoning,
    }
}

/// EMA crossover when both averages exist, momentum sign otherwise.
/// Equal EMAs resolve to Bearish: the comparison is strict.
fn bias_from(ema9: Option<f64>, ema20: Option<f64>, momentum: f64) -> Bias {
    match (ema9, ema20) {
        (Some(fast), Some(slow)) => {
            if fast > slow {
                Bias::Bullish
            } else {
                Bias::Bearish
            }
        }
        _ => {
            if momentum > 0.0 {
                Bias::Bullish
            } else if momentum < 0.0 {
                Bias::Bearish
            } else {
                Bias::Neutral
            }
        }
    }
}

/// Fixed percentage offsets from the latest close, keyed by bias.
/// Only a bullish bias flips the direction of the offsets; Neutral takes
/// the bearish-side levels.
fn levels_for(bias: Bias, last_price: f64) -> TradeLevels {
    let (tp1, tp2, sl) = match bias {
        Bias::Bullish => (
            last_price * 1.003,
            last_price * 1.007,
            last_price * 0.995,
        ),
        _ => (
            last_price * 0.997,
            last_price * 0.993,
            last_price * 1.005,
        ),
    };

    TradeLevels {
        entry: round4(last_price),
        tp1: round4(tp1),
        tp2: round4(tp2),
        sl: round4(sl),
    }
}

fn fmt2(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}

/// Round to 4 decimal digits, the precision levels are reported at.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossover_bias_ignores_momentum() {
        assert_eq!(bias_from(Some(101.0), Some(100.0), -5.0), Bias::Bullish);
        assert_eq!(bias_from(Some(100.0), Some(101.0), 5.0), Bias::Bearish);
    }

    #[test]
    fn equal_emas_resolve_bearish() {
        assert_eq!(bias_from(Some(100.0), Some(100.0), 5.0), Bias::Bearish);
    }

    #[test]
    fn momentum_sign_decides_without_emas() {
        assert_eq!(bias_from(None, None, 0.5), Bias::Bullish);
        assert_eq!(bias_from(None, None, -0.5), Bias::Bearish);
        assert_eq!(bias_from(None, None, 0.0), Bias::Neutral);
        assert_eq!(bias_from(Some(100.0), None, -0.5), Bias::Bearish);
    }

    #[test]
    fn bullish_levels_bracket_the_entry() {
        let levels = levels_for(Bias::Bullish, 2000.0);
        assert_eq!(levels.entry, 2000.0);
        assert_eq!(levels.tp1, 2006.0);
        assert_eq!(levels.tp2, 2014.0);
        assert_eq!(levels.sl, 1990.0);

        // tp2 is the farther target; the stop sits on the opposite side
        assert!((levels.tp2 - levels.entry).abs() > (levels.tp1 - levels.entry).abs());
        assert!(levels.sl < levels.entry && levels.tp1 > levels.entry);
    }

    #[test]
    fn bearish_levels_mirror_the_bullish_ones() {
        let levels = levels_for(Bias::Bearish, 2000.0);
        assert_eq!(levels.tp1, 1994.0);
        assert_eq!(levels.tp2, 1986.0);
        assert_eq!(levels.sl, 2010.0);

        assert!((levels.tp2 - levels.entry).abs() > (levels.tp1 - levels.entry).abs());
        assert!(levels.sl > levels.entry && levels.tp1 < levels.entry);
    }

    #[test]
    fn neutral_levels_match_the_bearish_side() {
        assert_eq!(levels_for(Bias::Neutral, 2000.0), levels_for(Bias::Bearish, 2000.0));
    }

    #[test]
    fn levels_round_to_four_digits() {
        let levels = levels_for(Bias::Bullish, 1.23456789);
        assert_eq!(levels.entry, 1.2346);
        // 1.23456789 * 1.003 = 1.23827159...
        assert_eq!(levels.tp1, 1.2383);
    }

    #[test]
    fn reasoning_reports_missing_emas_as_na() {
        let result = assemble("XAU/USD", &[1935.0], None, None, 0.0, Vec::new(), Vec::new());
        assert_eq!(result.reasoning, "EMA9 n/a vs EMA20 n/a, momentum 0.00");
    }

    #[test]
    fn reasoning_reports_emas_at_two_digits() {
        let result = assemble(
            "XAU/USD",
            &[1935.0],
            Some(1935.5678),
            Some(1930.1),
            2.3456,
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(result.reasoning, "EMA9 1935.57 vs EMA20 1930.10, momentum 2.35");
    }

    #[test]
    fn momentum_is_rounded_in_the_record() {
        let result = assemble("XAU/USD", &[100.0], None, None, 0.123456, Vec::new(), Vec::new());
        assert_eq!(result.momentum, 0.1235);
    }
}
