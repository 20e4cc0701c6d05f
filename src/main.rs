mod calendar;
mod cli;
mod config;
mod db;
mod live;
mod models;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // First run: materialize the default config so operators can find
    // and edit the credentials file.
    if !AppConfig::config_path()?.exists() {
        config.save().context("Writing default config")?;
    }

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    match cli.command {
        Some(Commands::Timings) => {
            handlers::handle_timings(&conn, &config)?;
        }
        Some(Commands::Events) => {
            handlers::handle_events(&conn)?;
        }
        Some(Commands::Calendar { year, month }) => {
            handlers::handle_calendar(&conn, year, month)?;
        }
        Some(Commands::Live) => {
            handlers::handle_live(&config)?;
        }
        Some(Commands::Admin { action }) => {
            handlers::handle_admin(&conn, &config, &action)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(conn, config)?;
        }
    }

    Ok(())
}
