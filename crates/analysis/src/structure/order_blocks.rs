use common::{Candle, Zone, ZoneKind};

/// Hard cap on reported zones. The scan stops at the first five found.
pub const MAX_ZONES: usize = 5;

/// How deep into the series the scan looks.
const SCAN_DEPTH: usize = 30;

/// Scan a newest-first candle series for order-block zones.
///
/// Walks indices `2..min(len, 30)` with a three-candle window
/// `(c, p, n) = (i - 2, i - 1, i)`. The window is taken in scan order over
/// the stored series, not reinterpreted chronologically; with newest-first
/// input, `c` is the latest of the three bars.
///
/// Demand: `n` has a bullish body, `n`'s low undercuts `p`'s low, and `p`'s
/// low does not undercut `c`'s. Supply is the mirror image on the highs.
/// Zones come back in scan order, lowest index first, with no significance
/// ranking.
pub fn detect_order_blocks(candles: &[Candle]) -> Vec<Zone> {
    let mut zones = Vec::new();
    let end = candles.len().min(SCAN_DEPTH);

    for i in 2..end {
        let c = &candles[i - 2];
        let p = &candles[i - 1];
        let n = &candles[i];

        if n.close > n.open && n.low < p.low && p.low <= c.low {
            zones.push(Zone {
                kind: ZoneKind::Demand,
                low: n.low,
                high: n.close,
                index: i,
            });
        } else if n.close < n.open && n.high > p.high && p.high >= c.high {
            zones.push(Zone {
                kind: ZoneKind::Supply,
                low: n.close,
                high: n.high,
                index: i,
            });
        }

        if zones.len() >= MAX_ZONES {
            break;
        }
    }

    zones
}
