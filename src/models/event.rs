use serde::{Deserialize, Serialize};

/// A scheduled masjid event. `date` is an ISO `YYYY-MM-DD` string so that
/// lexical order equals chronological order; `time` is `HH:MM`.
///
/// Events carry no synthetic id — deletion is keyed by the full value
/// (title + date + time), so Eq is the identity used everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub date: String,
    pub time: String,
}

impl Event {
    pub fn new(title: &str, date: &str, time: &str) -> Self {
        Self {
            title: title.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }
}

/// Seed events used whenever the store has nothing usable.
pub fn default_events() -> Vec<Event> {
    vec![
        Event::new("Jumu'ah Khutbah", "2025-12-05", "13:15"),
        Event::new("Weekly Tafseer", "2025-12-06", "18:30"),
    ]
}

/// Display order: ascending by ISO date string. Stable, so same-date
/// events keep their insertion order.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| a.date.cmp(&b.date));
}

/// The set of dates that should light up on the calendar.
pub fn event_date_set(events: &[Event]) -> std::collections::HashSet<String> {
    events.iter().map(|ev| ev.date.clone()).collect()
}
