pub mod calendar;
pub mod random;
pub mod services;
pub mod time;
pub mod utils;

pub use calendar::IsoWeek;
pub use random::RandomSource;
pub use time::{Clock, FixedClock, SystemClock};
