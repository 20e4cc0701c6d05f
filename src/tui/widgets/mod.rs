pub mod calendar;
pub mod events_list;
pub mod header;
pub mod live;
pub mod statusbar;
pub mod timings;
