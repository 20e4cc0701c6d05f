pub mod event;
pub mod timing;

pub use event::{Event, default_events, event_date_set, sort_events};
pub use timing::{PrayerName, PrayerTiming, default_timings};
