use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "minbar", version, about = "A terminal notice board for your local masjid")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the masjid's posted prayer timings
    Timings,
    /// List upcoming events
    Events,
    /// Print the month calendar with event days marked
    Calendar {
        /// Year to show (defaults to the current year)
        #[arg(long, requires = "month")]
        year: Option<i32>,
        /// Month to show, 1-12 (defaults to the current month)
        #[arg(long, requires = "year")]
        month: Option<u32>,
    },
    /// Fetch today's live timings from the AlAdhan API
    Live,
    /// Operator actions (require a login session)
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Start an admin session
    Login {
        username: String,
        password: String,
    },
    /// End the admin session
    Logout,
    /// Show the dashboard summary (timings + events)
    List,
    /// Update one prayer's posted time
    SetTiming {
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha, jumuah)
        prayer: String,
        /// New display time, e.g. "5:15 AM"
        time: String,
    },
    /// Add an event
    AddEvent {
        title: String,
        /// ISO date, YYYY-MM-DD
        date: String,
        /// 24h time, HH:MM
        time: String,
    },
    /// Remove an event (matched by exact title, date and time)
    RemoveEvent {
        title: String,
        date: String,
        time: String,
    },
}
