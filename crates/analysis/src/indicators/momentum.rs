/// One-step momentum: the most recent close minus the previous close.
///
/// `closes` is newest first. Returns `0.0` when fewer than two closes are
/// available. This is a raw single-step delta, not a smoothed indicator;
/// it is only directionally indicative.
pub fn momentum(closes: &[f64]) -> f64 {
    if closes.len() < 2 {
        return 0.0;
    }
    closes[0] - closes[1]
}
