pub mod fvg;
pub mod order_blocks;

pub use fvg::detect_fair_value_gaps;
pub use order_blocks::detect_order_blocks;
