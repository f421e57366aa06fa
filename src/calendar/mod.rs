//! Month navigation and month grids

pub mod grid;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};

use crate::store::EventStore;
use grid::DayCell;

const MONTHS: [Month; 12] = [
    Month::January, Month::February, Month::March, Month::April,
    Month::May, Month::June, Month::July, Month::August,
    Month::September, Month::October, Month::November, Month::December,
];

/// The month numbered `number` (1 for January)
pub fn month_from_number(number: u32) -> Option<Month> {
    MONTHS.get((number as usize).checked_sub(1)?).copied()
}

/// The month currently displayed by the calendar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: Month,
}

impl MonthCursor {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The month that contains `date`
    pub fn containing(date: NaiveDate) -> Self {
        let month = month_from_number(date.month()).unwrap_or(Month::January);
        Self::new(date.year(), month)
    }

    pub fn year(&self) -> i32     { self.year }
    pub fn month(&self) -> Month  { self.month }

    /// Move to the next month
    pub fn next(&self) -> Self {
        match self.month {
            Month::December => Self::new(self.year + 1, Month::January),
            month => Self::new(self.year, month.succ()),
        }
    }

    /// Move to the previous month
    pub fn prev(&self) -> Self {
        match self.month {
            Month::January => Self::new(self.year - 1, Month::December),
            month => Self::new(self.year, month.pred()),
        }
    }

    /// e.g. `February 2026`
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }

    /// Build the grid of this month
    pub fn grid<'a>(&self, store: &'a EventStore, today: NaiveDate) -> Result<Vec<DayCell<'a>>, Box<dyn Error>> {
        grid::build_grid(self.year, self.month, store, today)
    }
}

impl Default for MonthCursor {
    /// The calendar opens on January 2026
    fn default() -> Self {
        Self::new(2026, Month::January)
    }
}

impl Display for MonthCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MonthCursor {
    type Err = Box<dyn Error>;

    /// Parse a `YYYY-MM` string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = match s.split_once('-') {
            Some(parts) => parts,
            None => return Err(format!("Invalid month {:?}, expected YYYY-MM", s).into()),
        };
        let year: i32 = year.parse()?;
        let month: u32 = month.parse()?;
        match month_from_number(month) {
            Some(month) => Ok(Self::new(year, month)),
            None => Err(format!("Invalid month number {}", month).into()),
        }
    }
}
