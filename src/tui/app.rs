use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEventKind};
use log::error;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use rusqlite::Connection;
use std::thread;

use crate::calendar::MonthGrid;
use crate::config::AppConfig;
use crate::db::store::{EventsRepo, SessionRepo, TimingsRepo};
use crate::live::{LiveClient, LiveTimings};
use crate::models::{Event as MasjidEvent, PrayerTiming, event_date_set, sort_events};
use crate::tui::events::{Event, EventHandler};
use crate::tui::form::{Form, FormField};
use crate::tui::theme;
use crate::tui::widgets::{calendar, events_list, header, live, statusbar, timings};

const DONATION_ACK: &str = "JazakAllahu Khairan! We received your donation intent.";
const CONTACT_ACK: &str = "Thank you for contacting us. We will get back to you insha'Allah.";
const TIMINGS_SAVED: &str = "Prayer timings saved successfully.";

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Board,
    AdminLogin,
    Admin,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FocusSection {
    Timings,
    Events,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EditTiming,
    NewEvent,
    Donation,
    Contact,
}

#[derive(Debug, Clone)]
pub enum LiveState {
    Loading,
    Ready(LiveTimings),
    Failed,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub form: Form,
    pub notice: Option<String>,

    // Admin state
    pub focus_section: FocusSection,
    pub timing_idx: usize,
    pub event_idx: usize,

    // Cached state (reloaded after every mutation)
    pub timings: Vec<PrayerTiming>,
    pub events: Vec<MasjidEvent>,
    pub grid: MonthGrid,
    pub live: LiveState,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let grid = MonthGrid::current(&std::collections::HashSet::new())?;
        Ok(App {
            view: View::Board,
            config,
            should_quit: false,
            input_mode: InputMode::Normal,
            form: Form::new(vec![FormField::new("")]),
            notice: None,
            focus_section: FocusSection::Timings,
            timing_idx: 0,
            event_idx: 0,
            timings: Vec::new(),
            events: Vec::new(),
            grid,
            live: LiveState::Loading,
        })
    }

    /// Re-read both blobs and rebuild the calendar. Views always render
    /// exactly what the store holds.
    pub fn load(&mut self, conn: &Connection) -> Result<()> {
        self.timings = TimingsRepo::load(conn)?;

        let mut events = EventsRepo::load(conn)?;
        sort_events(&mut events);
        self.grid = MonthGrid::current(&event_date_set(&events))?;
        self.events = events;

        self.timing_idx = self.timing_idx.min(self.timings.len().saturating_sub(1));
        self.event_idx = self.event_idx.min(self.events.len().saturating_sub(1));
        Ok(())
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.notice = None;

        match self.input_mode {
            InputMode::Normal => match self.view {
                View::Board => self.handle_board_key(key, conn),
                View::AdminLogin => self.handle_login_key(key, conn),
                View::Admin => self.handle_admin_key(key, conn),
                View::Help => self.handle_help_key(key),
            },
            _ => self.handle_form_key(key, conn),
        }
    }

    fn handle_board_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('a') => {
                // A surviving session flag skips the login form.
                if SessionRepo::is_logged_in(conn).unwrap_or(false) {
                    self.view = View::Admin;
                } else {
                    self.form = Form::new(vec![
                        FormField::new("Username"),
                        FormField::masked("Password"),
                    ]);
                    self.view = View::AdminLogin;
                }
            }
            KeyCode::Char('d') => {
                self.form = Form::new(vec![FormField::new("Name"), FormField::new("Amount")]);
                self.input_mode = InputMode::Donation;
            }
            KeyCode::Char('c') => {
                self.form = Form::new(vec![FormField::new("Name"), FormField::new("Message")]);
                self.input_mode = InputMode::Contact;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.view = View::Board;
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => {
                let user = self.form.value(0).to_string();
                let pass = self.form.value(1).to_string();
                if self.config.admin.verify(&user, &pass) {
                    let _ = SessionRepo::log_in(conn);
                    self.view = View::Admin;
                    self.focus_section = FocusSection::Timings;
                    self.timing_idx = 0;
                    self.event_idx = 0;
                } else {
                    self.form.error = Some("Invalid credentials.".to_string());
                }
            }
            KeyCode::Char(c) => self.form.push_char(c),
            _ => {}
        }
    }

    fn handle_admin_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.view = View::Board;
            }
            KeyCode::Tab => {
                self.focus_section = match self.focus_section {
                    FocusSection::Timings => FocusSection::Events,
                    FocusSection::Events => FocusSection::Timings,
                };
            }
            KeyCode::Up => match self.focus_section {
                FocusSection::Timings => self.timing_idx = self.timing_idx.saturating_sub(1),
                FocusSection::Events => self.event_idx = self.event_idx.saturating_sub(1),
            },
            KeyCode::Down => match self.focus_section {
                FocusSection::Timings => {
                    let max = self.timings.len().saturating_sub(1);
                    self.timing_idx = (self.timing_idx + 1).min(max);
                }
                FocusSection::Events => {
                    let max = self.events.len().saturating_sub(1);
                    self.event_idx = (self.event_idx + 1).min(max);
                }
            },
            KeyCode::Char('e') => {
                if self.focus_section == FocusSection::Timings {
                    if let Some(timing) = self.timings.get(self.timing_idx) {
                        let mut field = FormField::new(timing.name.display_name());
                        field.value = timing.time.clone();
                        self.form = Form::new(vec![field]);
                        self.input_mode = InputMode::EditTiming;
                    }
                }
            }
            KeyCode::Char('n') => {
                self.form = Form::new(vec![
                    FormField::new("Title"),
                    FormField::new("Date (YYYY-MM-DD)"),
                    FormField::new("Time (HH:MM)"),
                ]);
                self.input_mode = InputMode::NewEvent;
            }
            KeyCode::Char('x') => {
                if self.focus_section == FocusSection::Events {
                    self.delete_selected_event(conn);
                }
            }
            KeyCode::Char('o') => {
                let _ = SessionRepo::log_out(conn);
                self.view = View::Board;
                self.notice = Some("Logged out.".to_string());
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Board;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => self.submit_form(conn),
            KeyCode::Char(c) => self.form.push_char(c),
            _ => {}
        }
    }

    fn submit_form(&mut self, conn: &Connection) {
        match self.input_mode {
            InputMode::EditTiming => self.submit_timing_edit(conn),
            InputMode::NewEvent => self.submit_new_event(conn),
            InputMode::Donation => {
                if self.form.value(1).trim().is_empty() {
                    self.form.error = Some("Amount is required".to_string());
                    return;
                }
                self.input_mode = InputMode::Normal;
                self.notice = Some(DONATION_ACK.to_string());
            }
            InputMode::Contact => {
                if self.form.value(1).trim().is_empty() {
                    self.form.error = Some("Message is required".to_string());
                    return;
                }
                self.input_mode = InputMode::Normal;
                self.notice = Some(CONTACT_ACK.to_string());
            }
            InputMode::Normal => {}
        }
    }

    fn submit_timing_edit(&mut self, conn: &Connection) {
        let time = self.form.value(0).trim().to_string();
        // An emptied field keeps the row's current time, as the original
        // editor did.
        if !time.is_empty() {
            if let Some(timing) = self.timings.get_mut(self.timing_idx) {
                timing.time = time;
            }
            match TimingsRepo::save(conn, &self.timings) {
                Ok(()) => self.notice = Some(TIMINGS_SAVED.to_string()),
                Err(err) => error!("Saving timings failed: {}", err),
            }
            let _ = self.load(conn);
        }
        self.input_mode = InputMode::Normal;
    }

    fn submit_new_event(&mut self, conn: &Connection) {
        let title = self.form.value(0).trim().to_string();
        let date = self.form.value(1).trim().to_string();
        let time = self.form.value(2).trim().to_string();

        if title.is_empty() || date.is_empty() || time.is_empty() {
            self.form.error = Some("All fields are required".to_string());
            return;
        }
        let padded = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map(|d| d.format("%Y-%m-%d").to_string());
        if padded.as_deref() != Ok(date.as_str()) {
            self.form.error = Some("Date must be YYYY-MM-DD".to_string());
            return;
        }

        match EventsRepo::add(conn, MasjidEvent::new(&title, &date, &time)) {
            Ok(()) => self.notice = Some("Event added.".to_string()),
            Err(err) => error!("Adding event failed: {}", err),
        }
        let _ = self.load(conn);
        self.input_mode = InputMode::Normal;
    }

    fn delete_selected_event(&mut self, conn: &Connection) {
        // Key the deletion by the selected row's value, never its index:
        // the stored order and this sorted view can disagree.
        if let Some(event) = self.events.get(self.event_idx).cloned() {
            match EventsRepo::remove(conn, &event) {
                Ok(true) => self.notice = Some("Event removed.".to_string()),
                Ok(false) => self.notice = Some("Event was already gone.".to_string()),
                Err(err) => error!("Deleting event failed: {}", err),
            }
            let _ = self.load(conn);
        }
    }

    pub fn on_live_result(&mut self, result: Result<LiveTimings, String>) {
        self.live = match result {
            Ok(live) => LiveState::Ready(live),
            Err(_) => LiveState::Failed,
        };
    }

    // ─── Drawing ─────────────────────────────────────────────────────────────

    pub fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Board => self.draw_board(frame),
            View::AdminLogin => self.draw_login(frame),
            View::Admin => self.draw_admin(frame),
            View::Help => {
                self.draw_board(frame);
                self.draw_help_overlay(frame);
            }
        }

        match self.input_mode {
            InputMode::Normal => {}
            InputMode::EditTiming => self.draw_form_popup(frame, " Edit Timing "),
            InputMode::NewEvent => self.draw_form_popup(frame, " New Event "),
            InputMode::Donation => self.draw_form_popup(frame, " Donate "),
            InputMode::Contact => self.draw_form_popup(frame, " Contact Us "),
        }
    }

    fn draw_board(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], &self.config.site.name);

        let hints = [
            ("[a]", " admin  "),
            ("[d]", " donate  "),
            ("[c]", " contact  "),
            ("[?]", " help  "),
            ("[Esc]", " quit"),
        ];
        statusbar::render(frame, outer_chunks[2], &hints, self.notice.as_deref());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(outer_chunks[1]);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Length(8), Constraint::Min(0)])
            .split(columns[0]);

        timings::render(frame, left_chunks[0], &self.timings, None, false);
        live::render(
            frame,
            left_chunks[1],
            &self.live,
            &self.config.site.city,
            &self.config.site.country,
        );

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(12), Constraint::Min(6)])
            .split(columns[1]);

        calendar::render(frame, right_chunks[0], &self.grid);
        events_list::render(frame, right_chunks[1], &self.events, None, false);
    }

    fn draw_login(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 3,
            width: area.width / 2,
            height: if self.form.error.is_some() { 9 } else { 8 },
        };

        let mut lines = vec![Line::from("")];
        for (i, field) in self.form.fields.iter().enumerate() {
            let active = i == self.form.active;
            let cursor = if active { "█" } else { "" };
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<10}", field.label), theme::dim()),
                Span::styled(
                    field.display_value(),
                    if active {
                        theme::teal().add_modifier(Modifier::BOLD)
                    } else {
                        theme::bold()
                    },
                ),
                Span::styled(cursor, theme::amber()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  [Tab] switch  ·  [Enter] log in  ·  [Esc] back",
            theme::dim(),
        )));
        if let Some(err) = &self.form.error {
            lines.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let block = Block::default()
            .title(Span::styled(" Admin Login ", theme::teal()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.form.error.is_some() {
                theme::red()
            } else {
                theme::teal()
            })
            .style(theme::surface());

        frame.render_widget(Clear, popup_area);
        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }

    fn draw_admin(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        header::render(frame, outer_chunks[0], &self.config.site.name);

        let hints = [
            ("[Tab]", " section  "),
            ("[e]", " edit timing  "),
            ("[n]", " new event  "),
            ("[x]", " delete event  "),
            ("[o]", " log out  "),
            ("[Esc]", " back"),
        ];
        statusbar::render(frame, outer_chunks[2], &hints, self.notice.as_deref());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(outer_chunks[1]);

        timings::render(
            frame,
            columns[0],
            &self.timings,
            Some(self.timing_idx),
            self.focus_section == FocusSection::Timings,
        );
        events_list::render(
            frame,
            columns[1],
            &self.events,
            Some(self.event_idx),
            self.focus_section == FocusSection::Events,
        );
    }

    fn draw_form_popup(&self, frame: &mut Frame, title: &str) {
        let area = frame.area();
        let height = (self.form.fields.len() as u16 + 5)
            + if self.form.error.is_some() { 1 } else { 0 };

        let popup_area = Rect {
            x: area.width / 4,
            y: (area.height / 2).saturating_sub(height / 2),
            width: area.width / 2,
            height,
        };

        let mut lines = vec![Line::from("")];
        for (i, field) in self.form.fields.iter().enumerate() {
            let active = i == self.form.active;
            let cursor = if active { "█" } else { "" };
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<20}", field.label), theme::dim()),
                Span::styled(
                    field.display_value(),
                    if active {
                        theme::teal().add_modifier(Modifier::BOLD)
                    } else {
                        theme::bold()
                    },
                ),
                Span::styled(cursor, theme::amber()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  [Tab] next field  ·  [Enter] submit  ·  [Esc] cancel",
            theme::dim(),
        )));
        if let Some(err) = &self.form.error {
            lines.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let block = Block::default()
            .title(Span::styled(title, theme::teal()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.form.error.is_some() {
                theme::red()
            } else {
                theme::amber()
            })
            .style(theme::surface());

        frame.render_widget(Clear, popup_area);
        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::teal().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [a]    ", theme::teal()),
                Span::styled("Admin area (login required)", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [d]    ", theme::teal()),
                Span::styled("Donation form", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [c]    ", theme::teal()),
                Span::styled("Contact form", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]    ", theme::teal()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc]  ", theme::teal()),
                Span::styled("Quit", theme::dim()),
            ]),
            Line::from(""),
            Line::from(Span::styled("  Admin view:", theme::teal())),
            Line::from(vec![
                Span::styled("  [Tab]  ", theme::teal()),
                Span::styled("Switch section", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [e]    ", theme::teal()),
                Span::styled("Edit selected timing", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [n]    ", theme::teal()),
                Span::styled("New event", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [x]    ", theme::teal()),
                Span::styled("Delete selected event", theme::dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::teal()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::teal())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }
}

/// Run the TUI event loop. The live fetch happens once, on a side
/// thread, and posts its result back through the event channel.
pub fn run(conn: Connection, config: AppConfig) -> Result<()> {
    let mut app = App::new(config)?;
    app.load(&conn)?;

    let mut terminal = ratatui::init();
    let events = EventHandler::new(500);

    let live_tx = events.sender();
    let client = LiveClient::new(&app.config.site);
    thread::spawn(move || {
        let result = client.fetch().map_err(|err| {
            error!("Live timings fetch failed: {}", err);
            err.to_string()
        });
        let _ = live_tx.send(Event::Live(result));
    });

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, &conn);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {}
            Event::Live(result) => {
                app.on_live_result(result);
            }
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::models::default_timings;

    fn test_app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    fn edit_form(value: &str) -> Form {
        let mut form = Form::new(vec![FormField::new("Fajr")]);
        for c in value.chars() {
            form.push_char(c);
        }
        form
    }

    fn event_form(title: &str, date: &str, time: &str) -> Form {
        let mut form = Form::new(vec![
            FormField::new("Title"),
            FormField::new("Date (YYYY-MM-DD)"),
            FormField::new("Time (HH:MM)"),
        ]);
        form.fields[0].value = title.to_string();
        form.fields[1].value = date.to_string();
        form.fields[2].value = time.to_string();
        form
    }

    #[test]
    fn timing_edit_persists_and_notices() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let mut app = test_app();
        app.load(&conn).unwrap();

        app.timing_idx = 0;
        app.form = edit_form("5:25 AM");
        app.input_mode = InputMode::EditTiming;
        app.submit_timing_edit(&conn);

        assert_eq!(app.notice.as_deref(), Some(TIMINGS_SAVED));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(TimingsRepo::load(&conn).unwrap()[0].time, "5:25 AM");
    }

    #[test]
    fn emptied_timing_field_keeps_current_time() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let mut app = test_app();
        app.load(&conn).unwrap();

        app.form = edit_form("   ");
        app.input_mode = InputMode::EditTiming;
        app.submit_timing_edit(&conn);

        assert!(app.notice.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(TimingsRepo::load(&conn).unwrap(), default_timings());
    }

    #[test]
    fn failed_timing_save_leaves_no_notice() {
        // No migrations, so the store table is missing and the save fails.
        let conn = Connection::open_in_memory().unwrap();
        let mut app = test_app();
        app.timings = default_timings();

        app.form = edit_form("6:00 AM");
        app.input_mode = InputMode::EditTiming;
        app.submit_timing_edit(&conn);

        assert!(app.notice.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn new_event_submit_persists_and_notices() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let mut app = test_app();
        app.load(&conn).unwrap();

        app.form = event_form("Eid Prayer", "2026-03-20", "07:30");
        app.input_mode = InputMode::NewEvent;
        app.submit_new_event(&conn);

        assert_eq!(app.notice.as_deref(), Some("Event added."));
        assert_eq!(app.input_mode, InputMode::Normal);
        let events = crate::db::store::EventsRepo::load(&conn).unwrap();
        assert!(events.contains(&MasjidEvent::new("Eid Prayer", "2026-03-20", "07:30")));
    }

    #[test]
    fn unpadded_event_date_is_rejected_with_feedback() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let mut app = test_app();
        app.load(&conn).unwrap();

        app.form = event_form("Eid Prayer", "2026-3-20", "07:30");
        app.input_mode = InputMode::NewEvent;
        app.submit_new_event(&conn);

        assert!(app.form.error.is_some());
        assert_eq!(app.input_mode, InputMode::NewEvent);
    }

    #[test]
    fn failed_event_add_leaves_no_notice() {
        let conn = Connection::open_in_memory().unwrap();
        let mut app = test_app();

        app.form = event_form("Eid Prayer", "2026-03-20", "07:30");
        app.input_mode = InputMode::NewEvent;
        app.submit_new_event(&conn);

        assert!(app.notice.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
