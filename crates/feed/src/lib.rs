pub mod news;
pub mod twelvedata;

pub use news::{Headline, NewsClient};
pub use twelvedata::TwelveDataClient;
