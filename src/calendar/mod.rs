use anyhow::{Result, anyhow};
use chrono::{Datelike, Local, NaiveDate};
use std::collections::HashSet;

use crate::utils::format::iso_date;

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One slot in the 7-column month grid: padding before the 1st, or a
/// numbered day flagged when an event falls on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Day { number: u32, has_event: bool },
}

/// A fully laid-out calendar month. Pure data — the CLI and TUI render
/// it their own way.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<Cell>,
}

impl MonthGrid {
    /// Lay out `year`/`month`, flagging every day whose zero-padded ISO
    /// date string is in `event_dates`. Membership is exact string
    /// comparison, so unpadded or malformed event dates simply never
    /// light up a cell.
    pub fn build(year: i32, month: u32, event_dates: &HashSet<String>) -> Result<MonthGrid> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| anyhow!("Invalid month: {}-{}", year, month))?;

        // Day 0 of the following month, i.e. the last day of this one.
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| anyhow!("Invalid month: {}-{}", year, month))?
            .day();

        let leading_blanks = first.weekday().num_days_from_sunday() as usize;

        let mut cells = Vec::with_capacity(leading_blanks + last_day as usize);
        cells.extend(std::iter::repeat_n(Cell::Blank, leading_blanks));
        for number in 1..=last_day {
            let has_event = event_dates.contains(&iso_date(year, month, number));
            cells.push(Cell::Day { number, has_event });
        }

        Ok(MonthGrid { year, month, cells })
    }

    /// The no-argument base case: today's month and year.
    pub fn current(event_dates: &HashSet<String>) -> Result<MonthGrid> {
        let now = Local::now().date_naive();
        Self::build(now.year(), now.month(), event_dates)
    }

    /// "December 2025" style heading.
    pub fn title(&self) -> String {
        let month_name = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B").to_string())
            .unwrap_or_default();
        format!("{} {}", month_name, self.year)
    }

    /// Grid rows of 7 cells each, the last one padded with blanks.
    pub fn weeks(&self) -> Vec<[Cell; 7]> {
        let mut weeks = Vec::new();
        let mut row = [Cell::Blank; 7];
        let mut col = 0;
        for cell in &self.cells {
            row[col] = *cell;
            col += 1;
            if col == 7 {
                weeks.push(row);
                row = [Cell::Blank; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(row);
        }
        weeks
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, Cell::Blank))
            .count()
    }

    pub fn day_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Cell::Day { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn blanks_match_weekday_of_the_first() {
        // 2025-12-01 is a Monday.
        let grid = MonthGrid::build(2025, 12, &HashSet::new()).unwrap();
        assert_eq!(grid.leading_blanks(), 1);

        // 2026-02-01 is a Sunday.
        let grid = MonthGrid::build(2026, 2, &HashSet::new()).unwrap();
        assert_eq!(grid.leading_blanks(), 0);

        // 2025-11-01 is a Saturday.
        let grid = MonthGrid::build(2025, 11, &HashSet::new()).unwrap();
        assert_eq!(grid.leading_blanks(), 6);
    }

    #[test]
    fn day_count_matches_month_length() {
        assert_eq!(MonthGrid::build(2025, 12, &HashSet::new()).unwrap().day_count(), 31);
        assert_eq!(MonthGrid::build(2025, 11, &HashSet::new()).unwrap().day_count(), 30);
        assert_eq!(MonthGrid::build(2025, 2, &HashSet::new()).unwrap().day_count(), 28);
        // Leap year February.
        assert_eq!(MonthGrid::build(2024, 2, &HashSet::new()).unwrap().day_count(), 29);
    }

    #[test]
    fn flags_only_exact_date_matches() {
        let set = dates(&["2025-12-05", "2025-12-6", "2025-11-20"]);
        let grid = MonthGrid::build(2025, 12, &set).unwrap();

        for cell in &grid.cells {
            if let Cell::Day { number, has_event } = cell {
                // Dec 6 is listed unpadded, so it must NOT be flagged.
                assert_eq!(*has_event, *number == 5, "day {}", number);
            }
        }
    }

    #[test]
    fn empty_event_set_flags_nothing() {
        let grid = MonthGrid::build(2025, 12, &HashSet::new()).unwrap();
        assert!(
            grid.cells
                .iter()
                .all(|c| !matches!(c, Cell::Day { has_event: true, .. }))
        );
    }

    #[test]
    fn no_trailing_overflow_days() {
        let grid = MonthGrid::build(2025, 12, &HashSet::new()).unwrap();
        let last = grid.cells.last().unwrap();
        assert_eq!(*last, Cell::Day { number: 31, has_event: false });
    }

    #[test]
    fn weeks_pad_the_final_row() {
        let grid = MonthGrid::build(2025, 12, &HashSet::new()).unwrap();
        let weeks = grid.weeks();
        // 1 blank + 31 days = 32 cells -> 5 rows.
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[4][3], Cell::Day { number: 31, has_event: false });
        assert_eq!(weeks[4][4], Cell::Blank);
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(MonthGrid::build(2025, 13, &HashSet::new()).is_err());
        assert!(MonthGrid::build(2025, 0, &HashSet::new()).is_err());
    }
}
