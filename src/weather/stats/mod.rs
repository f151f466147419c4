pub mod extremes;
pub mod rain;
pub mod statistics;
pub mod window;

pub use extremes::{pick_extremes, HighLow};
pub use rain::count_rain_events;
pub use statistics::{reduce, CityStatistics, TempStats};
pub use window::DateWindow;
