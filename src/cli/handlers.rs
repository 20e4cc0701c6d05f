use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use log::error;
use rusqlite::Connection;
use std::str::FromStr;

use crate::calendar::{Cell, DAY_NAMES, MonthGrid};
use crate::cli::args::AdminCommands;
use crate::config::AppConfig;
use crate::db::store::{EventsRepo, SessionRepo, TimingsRepo};
use crate::live::{FETCH_FAILED_MESSAGE, LiveClient};
use crate::models::{Event, PrayerName, event_date_set, sort_events};
use crate::utils::format::{event_list_lines, format_event_line};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const TEAL: &str = "\x1b[38;2;64;160;148m";

// ─── Timings ─────────────────────────────────────────────────────────────────

pub fn handle_timings(conn: &Connection, config: &AppConfig) -> Result<()> {
    let timings = TimingsRepo::load(conn)?;

    println!();
    println_colored!(TEAL, "  Prayer Timings — {}", config.site.name);
    println!();
    for row in &timings {
        println_colored!(BOLD, "  {:<10}  {}", row.name.display_name(), row.time);
    }
    println!();
    Ok(())
}

// ─── Events ──────────────────────────────────────────────────────────────────

pub fn handle_events(conn: &Connection) -> Result<()> {
    let mut events = EventsRepo::load(conn)?;

    println!();
    println_colored!(TEAL, "  Upcoming Events");
    println!();
    sort_events(&mut events);
    for line in event_list_lines(&events) {
        if events.is_empty() {
            println_colored!(DIM, "  {}", line);
        } else {
            println!("  {}", line);
        }
    }
    println!();
    Ok(())
}

// ─── Calendar ────────────────────────────────────────────────────────────────

pub fn handle_calendar(conn: &Connection, year: Option<i32>, month: Option<u32>) -> Result<()> {
    let events = EventsRepo::load(conn)?;
    let dates = event_date_set(&events);

    let grid = match (year, month) {
        (Some(y), Some(m)) => MonthGrid::build(y, m, &dates)?,
        _ => MonthGrid::current(&dates)?,
    };

    println!();
    println_colored!(TEAL, "  {}", grid.title());
    println!();
    print!("  ");
    for name in DAY_NAMES {
        print!("{:>5}", name);
    }
    println!();

    for week in grid.weeks() {
        print!("  ");
        for cell in week {
            match cell {
                Cell::Blank => print!("{:>5}", ""),
                Cell::Day { number, has_event: true } => {
                    print!("{}{:>4}*\x1b[0m", AMBER, number);
                }
                Cell::Day { number, has_event: false } => print!("{:>4} ", number),
            }
        }
        println!();
    }
    println!();
    println_colored!(DIM, "  * event day");
    println!();
    Ok(())
}

// ─── Live timings ────────────────────────────────────────────────────────────

pub fn handle_live(config: &AppConfig) -> Result<()> {
    let client = LiveClient::new(&config.site);

    println!();
    println_colored!(
        TEAL,
        "  Live Timings — {}, {}",
        config.site.city,
        config.site.country
    );
    println!();

    match client.fetch() {
        Ok(live) => {
            println_colored!(DIM, "  Date:     {}", live.date);
            println_colored!(BOLD, "  Fajr:     {}", live.fajr);
            println_colored!(BOLD, "  Dhuhr:    {}", live.dhuhr);
            println_colored!(BOLD, "  Asr:      {}", live.asr);
            println_colored!(BOLD, "  Maghrib:  {}", live.maghrib);
            println_colored!(BOLD, "  Isha:     {}", live.isha);
        }
        Err(err) => {
            error!("Live timings fetch failed: {}", err);
            println_colored!(RED, "  {}", FETCH_FAILED_MESSAGE);
        }
    }
    println!();
    Ok(())
}

// ─── Admin ───────────────────────────────────────────────────────────────────

pub fn handle_admin(conn: &Connection, config: &AppConfig, action: &AdminCommands) -> Result<()> {
    if let AdminCommands::Login { username, password } = action {
        if config.admin.verify(username, password) {
            SessionRepo::log_in(conn)?;
            println_colored!(GREEN, "  ✓ Logged in");
        } else {
            println_colored!(RED, "  Invalid credentials.");
        }
        return Ok(());
    }

    if !SessionRepo::is_logged_in(conn)? {
        return Err(anyhow!("Not logged in. Run `minbar admin login <username> <password>` first."));
    }

    match action {
        AdminCommands::Login { .. } => unreachable!(),
        AdminCommands::Logout => {
            SessionRepo::log_out(conn)?;
            println_colored!(GREEN, "  ✓ Logged out");
        }
        AdminCommands::List => {
            handle_timings(conn, config)?;
            handle_events(conn)?;
        }
        AdminCommands::SetTiming { prayer, time } => {
            let name = PrayerName::from_str(prayer).map_err(|_| {
                anyhow!("Unknown prayer '{}'. Use: fajr, dhuhr, asr, maghrib, isha, jumuah", prayer)
            })?;
            let time = time.trim();
            if time.is_empty() {
                return Err(anyhow!("Time must not be empty"));
            }

            let mut timings = TimingsRepo::load(conn)?;
            match timings.iter_mut().find(|t| t.name == name) {
                Some(row) => row.time = time.to_string(),
                None => timings.push(crate::models::PrayerTiming::new(name, time)),
            }
            TimingsRepo::save(conn, &timings)?;
            println_colored!(GREEN, "  ✓ {} set to {}", name.display_name(), time);
        }
        AdminCommands::AddEvent { title, date, time } => {
            validate_event_fields(title, date, time)?;
            let event = Event::new(title.trim(), date.trim(), time.trim());
            EventsRepo::add(conn, event.clone())?;
            println_colored!(GREEN, "  ✓ Added: {}", format_event_line(&event));
        }
        AdminCommands::RemoveEvent { title, date, time } => {
            let event = Event::new(title.trim(), date.trim(), time.trim());
            if EventsRepo::remove(conn, &event)? {
                println_colored!(AMBER, "  Removed: {}", format_event_line(&event));
            } else {
                println_colored!(RED, "  No event matches that title, date and time.");
            }
        }
    }
    Ok(())
}

fn validate_event_fields(title: &str, date: &str, time: &str) -> Result<()> {
    if title.trim().is_empty() || date.trim().is_empty() || time.trim().is_empty() {
        return Err(anyhow!("Title, date and time are all required"));
    }
    // Calendar lookups compare raw strings, so the date must be valid
    // AND zero-padded: parse it, then demand it re-formats identically.
    let date = date.trim();
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| anyhow!("Date must be YYYY-MM-DD, got '{}'", date))?;
    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(anyhow!("Date must be zero-padded YYYY-MM-DD, got '{}'", date));
    }
    Ok(())
}
