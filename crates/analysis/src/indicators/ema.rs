/// Exponential moving average with an SMA seed.
///
/// Returns `None` when `values` is shorter than `period`; insufficient
/// data is a soft failure, never an error. The first `period` entries seed
/// the average as a plain arithmetic mean; each remaining value is folded
/// in with the standard smoothing factor `2 / (period + 1)`, and the value
/// after the final element is returned.
///
/// The slice is consumed front to back exactly as given. The analyzer
/// passes the close series in its native newest-first order, so the seed
/// window covers the newest bars and the recurrence walks toward the
/// oldest.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut ema_val = values[..period].iter().sum::<f64>() / period as f64;

    for &value in &values[period..] {
        ema_val = (value - ema_val) * k + ema_val;
    }

    Some(ema_val)
}
