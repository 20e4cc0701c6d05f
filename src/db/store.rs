use anyhow::Result;
use log::warn;
use rusqlite::{Connection, OptionalExtension, params};

use crate::models::{Event, PrayerTiming, default_events, default_timings};

// The original site kept these blobs in browser storage under the same
// key names. The SQLite store keeps them verbatim so an exported blob
// reads the same either way.
pub const KEY_PRAYER_TIMINGS: &str = "mosquePrayerTimings";
pub const KEY_EVENTS: &str = "mosqueEvents";
pub const KEY_ADMIN_SESSION: &str = "masjidAdminLoggedIn";

/// Raw JSON-text key-value access. Every write replaces a whole blob.
pub struct StoreRepo;

impl StoreRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM store WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn delete(conn: &Connection, key: &str) -> Result<()> {
        conn.execute("DELETE FROM store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// Decode a stored blob, falling back to `default` when the key is
/// missing or the JSON does not parse. Corruption is logged, never fatal.
fn load_or_default<T: serde::de::DeserializeOwned>(
    conn: &Connection,
    key: &str,
    default: impl FnOnce() -> Vec<T>,
) -> Result<Vec<T>> {
    match StoreRepo::get(conn, key)? {
        None => Ok(default()),
        Some(raw) => match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) if !items.is_empty() => Ok(items),
            Ok(_) => Ok(default()),
            Err(err) => {
                warn!("Corrupt blob under '{}', using defaults: {}", key, err);
                Ok(default())
            }
        },
    }
}

// ─── Prayer timings ──────────────────────────────────────────────────────────

pub struct TimingsRepo;

impl TimingsRepo {
    pub fn load(conn: &Connection) -> Result<Vec<PrayerTiming>> {
        load_or_default(conn, KEY_PRAYER_TIMINGS, default_timings)
    }

    pub fn save(conn: &Connection, timings: &[PrayerTiming]) -> Result<()> {
        let blob = serde_json::to_string(timings)?;
        StoreRepo::set(conn, KEY_PRAYER_TIMINGS, &blob)
    }
}

// ─── Events ──────────────────────────────────────────────────────────────────

pub struct EventsRepo;

impl EventsRepo {
    pub fn load(conn: &Connection) -> Result<Vec<Event>> {
        // An explicitly saved empty list is honored; only a missing or
        // corrupt blob falls back to the seed events.
        match StoreRepo::get(conn, KEY_EVENTS)? {
            None => Ok(default_events()),
            Some(raw) => match serde_json::from_str::<Vec<Event>>(&raw) {
                Ok(events) => Ok(events),
                Err(err) => {
                    warn!("Corrupt blob under '{}', using defaults: {}", KEY_EVENTS, err);
                    Ok(default_events())
                }
            },
        }
    }

    pub fn save(conn: &Connection, events: &[Event]) -> Result<()> {
        let blob = serde_json::to_string(events)?;
        StoreRepo::set(conn, KEY_EVENTS, &blob)
    }

    pub fn add(conn: &Connection, event: Event) -> Result<()> {
        let mut events = Self::load(conn)?;
        events.push(event);
        Self::save(conn, &events)
    }

    /// Remove by full value identity rather than list position, so a
    /// re-sorted view can never delete the wrong row. Returns false when
    /// no stored event matches.
    pub fn remove(conn: &Connection, event: &Event) -> Result<bool> {
        let mut events = Self::load(conn)?;
        let before = events.len();
        if let Some(pos) = events.iter().position(|ev| ev == event) {
            events.remove(pos);
        }
        let removed = events.len() < before;
        if removed {
            Self::save(conn, &events)?;
        }
        Ok(removed)
    }
}

// ─── Admin session flag ──────────────────────────────────────────────────────

pub struct SessionRepo;

impl SessionRepo {
    pub fn is_logged_in(conn: &Connection) -> Result<bool> {
        Ok(StoreRepo::get(conn, KEY_ADMIN_SESSION)?.as_deref() == Some("true"))
    }

    pub fn log_in(conn: &Connection) -> Result<()> {
        StoreRepo::set(conn, KEY_ADMIN_SESSION, "true")
    }

    pub fn log_out(conn: &Connection) -> Result<()> {
        StoreRepo::delete(conn, KEY_ADMIN_SESSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::models::PrayerName;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn timings_round_trip_preserves_order_and_values() {
        let conn = test_conn();
        let mut timings = default_timings();
        timings[0].time = "5:25 AM".to_string();
        timings.swap(1, 2);

        TimingsRepo::save(&conn, &timings).unwrap();
        let loaded = TimingsRepo::load(&conn).unwrap();
        assert_eq!(loaded, timings);
    }

    #[test]
    fn missing_timings_blob_yields_defaults() {
        let conn = test_conn();
        let loaded = TimingsRepo::load(&conn).unwrap();
        assert_eq!(loaded, default_timings());
    }

    #[test]
    fn corrupt_timings_blob_yields_defaults() {
        let conn = test_conn();
        StoreRepo::set(&conn, KEY_PRAYER_TIMINGS, "not json").unwrap();
        let loaded = TimingsRepo::load(&conn).unwrap();
        assert_eq!(loaded.len(), 6);
        assert_eq!(loaded, default_timings());
    }

    #[test]
    fn empty_timings_blob_yields_defaults() {
        let conn = test_conn();
        StoreRepo::set(&conn, KEY_PRAYER_TIMINGS, "[]").unwrap();
        assert_eq!(TimingsRepo::load(&conn).unwrap(), default_timings());
    }

    #[test]
    fn saved_empty_event_list_stays_empty() {
        let conn = test_conn();
        EventsRepo::save(&conn, &[]).unwrap();
        assert!(EventsRepo::load(&conn).unwrap().is_empty());
    }

    #[test]
    fn remove_deletes_by_value_not_position() {
        let conn = test_conn();
        let events = vec![
            Event::new("Tafseer", "2026-01-10", "18:30"),
            Event::new("Youth Halaqa", "2026-01-03", "19:00"),
            Event::new("Fundraiser Iftar", "2026-01-20", "17:45"),
        ];
        EventsRepo::save(&conn, &events).unwrap();

        // Target is the 2nd row of the date-sorted view (Tafseer), which
        // sits at index 0 of the stored order.
        let target = Event::new("Tafseer", "2026-01-10", "18:30");
        assert!(EventsRepo::remove(&conn, &target).unwrap());

        let remaining = EventsRepo::load(&conn).unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(!remaining.contains(&target));
        assert!(remaining.contains(&events[1]));
        assert!(remaining.contains(&events[2]));
    }

    #[test]
    fn remove_of_unknown_event_is_a_noop() {
        let conn = test_conn();
        EventsRepo::save(&conn, &[Event::new("Tafseer", "2026-01-10", "18:30")]).unwrap();
        let missing = Event::new("Tafseer", "2026-01-10", "19:30");
        assert!(!EventsRepo::remove(&conn, &missing).unwrap());
        assert_eq!(EventsRepo::load(&conn).unwrap().len(), 1);
    }

    #[test]
    fn timing_names_survive_the_store() {
        let conn = test_conn();
        TimingsRepo::save(&conn, &default_timings()).unwrap();
        let loaded = TimingsRepo::load(&conn).unwrap();
        assert_eq!(loaded[5].name, PrayerName::Jumuah);
        assert_eq!(loaded[5].name.display_name(), "Jumu'ah");
    }

    #[test]
    fn session_flag_lifecycle() {
        let conn = test_conn();
        assert!(!SessionRepo::is_logged_in(&conn).unwrap());
        SessionRepo::log_in(&conn).unwrap();
        assert!(SessionRepo::is_logged_in(&conn).unwrap());
        SessionRepo::log_out(&conn).unwrap();
        assert!(!SessionRepo::is_logged_in(&conn).unwrap());
    }
}
