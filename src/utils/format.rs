use chrono::NaiveDate;

use crate::models::Event;

/// Two-digit zero pad for month/day numbers.
///
/// Panics on anything that would not fit in two digits instead of
/// silently truncating.
pub fn pad2(n: u32) -> String {
    assert!(n < 100, "pad2 expects a value below 100, got {}", n);
    format!("{:02}", n)
}

/// Build the zero-padded ISO date string used as the calendar lookup key.
pub fn iso_date(year: i32, month: u32, day: u32) -> String {
    format!("{}-{}-{}", year, pad2(month), pad2(day))
}

/// Human-readable "DD Mon YYYY" rendering of an ISO date string.
/// Unparseable input comes back unchanged.
pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(d) => d.format("%d %b %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Display line for one event, public and admin lists alike.
pub fn format_event_line(event: &Event) -> String {
    format!("{} – {} ({})", format_date(&event.date), event.title, event.time)
}

pub const NO_EVENTS_PLACEHOLDER: &str = "No upcoming events.";

/// Lines for an event list view: one formatted line per event, or
/// exactly one placeholder line for an empty collection. Callers sort
/// first; this keeps whatever order it is given.
pub fn event_list_lines(events: &[Event]) -> Vec<String> {
    if events.is_empty() {
        vec![NO_EVENTS_PLACEHOLDER.to_string()]
    } else {
        events.iter().map(format_event_line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad2_pads_single_digits() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(12), "12");
        assert_eq!(pad2(99), "99");
    }

    #[test]
    #[should_panic]
    fn pad2_rejects_three_digit_input() {
        pad2(100);
    }

    #[test]
    fn format_date_renders_day_month_year() {
        assert_eq!(format_date("2025-12-05"), "05 Dec 2025");
    }

    #[test]
    fn format_date_passes_garbage_through() {
        assert_eq!(format_date("not a date"), "not a date");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2025-13-40"), "2025-13-40");
    }

    #[test]
    fn event_line_shape() {
        let ev = Event::new("Jumu'ah Khutbah", "2025-12-05", "13:15");
        assert_eq!(format_event_line(&ev), "05 Dec 2025 – Jumu'ah Khutbah (13:15)");
    }

    #[test]
    fn empty_event_list_is_exactly_one_placeholder_line() {
        let lines = event_list_lines(&[]);
        assert_eq!(lines, vec![NO_EVENTS_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn event_list_lines_one_per_event() {
        let events = vec![
            Event::new("Jumu'ah Khutbah", "2025-12-05", "13:15"),
            Event::new("Weekly Tafseer", "2025-12-06", "18:30"),
        ];
        let lines = event_list_lines(&events);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "05 Dec 2025 – Jumu'ah Khutbah (13:15)");
        assert_eq!(lines[1], "06 Dec 2025 – Weekly Tafseer (18:30)");
    }
}
