pub mod ema;
pub mod momentum;

pub use ema::ema;
pub use momentum::momentum;
