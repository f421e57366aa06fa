//! The 6 × 7 grid of days displayed for a month

use std::error::Error;

use chrono::{Datelike, Duration, Month, NaiveDate};

use crate::Event;
use crate::moon::{estimate_phase, MoonPhase};
use crate::store::EventStore;

/// Number of days in a week (and of columns in the grid)
pub const WEEK_LEN: usize = 7;
/// Number of cells of a grid (6 weeks)
pub const GRID_CELLS: usize = 6 * WEEK_LEN;

/// A day of the grid, and what should be displayed in it
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    /// False for the days of the previous and next months that pad the grid
    pub in_current_month: bool,
    pub is_today: bool,
    pub moon_phase: MoonPhase,
    /// Events that happen on this exact date
    pub events: Vec<&'a Event>,
}

impl<'a> DayCell<'a> {
    fn new(date: NaiveDate, in_current_month: bool, is_today: bool, store: &'a EventStore) -> Self {
        Self {
            date,
            in_current_month,
            is_today,
            moon_phase: estimate_phase(date),
            events: store.events_on(date),
        }
    }
}

/// Build the grid of `month`, Sunday first.
///
/// The grid always has [`GRID_CELLS`] cells: the days of the month, preceded by the last days of the previous month
/// (so that the 1st falls on the right weekday), and followed by the first days of the next month.
/// Only a day of the current month can be marked as `today`.
pub fn build_grid<'a>(year: i32, month: Month, store: &'a EventStore, today: NaiveDate) -> Result<Vec<DayCell<'a>>, Box<dyn Error>> {
    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
        .ok_or_else(|| format!("{} {} cannot be represented", month.name(), year))?;
    let n_leading = first.weekday().num_days_from_sunday() as usize;
    let n_days = days_in_month(first)?;
    let n_trailing = GRID_CELLS.saturating_sub(n_leading + n_days);

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for offset in (1..=n_leading).rev() {
        let date = shift(first, -(offset as i64))?;
        cells.push(DayCell::new(date, false, false, store));
    }
    for offset in 0..n_days {
        let date = shift(first, offset as i64)?;
        cells.push(DayCell::new(date, true, date == today, store));
    }
    for offset in 0..n_trailing {
        let date = shift(first, (n_days + offset) as i64)?;
        cells.push(DayCell::new(date, false, false, store));
    }

    log::trace!("Built grid for {} {}: {} leading, {} trailing days", month.name(), year, n_leading, n_trailing);
    Ok(cells)
}

/// Same as [`build_grid`], using the local clock to find today
pub fn build_grid_for_today(year: i32, month: Month, store: &EventStore) -> Result<Vec<DayCell<'_>>, Box<dyn Error>> {
    build_grid(year, month, store, chrono::Local::now().date_naive())
}

/// Number of days of the month starting at `first`
fn days_in_month(first: NaiveDate) -> Result<usize, Box<dyn Error>> {
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    match next_first {
        Some(next) => Ok((next - first).num_days() as usize),
        None => Err(format!("No month after {}", first).into()),
    }
}

fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, Box<dyn Error>> {
    date.checked_add_signed(Duration::days(days))
        .ok_or_else(|| format!("{} days from {} is out of range", days, date).into())
}
