//! Some utility functions to display the calendar as text

use std::fmt::Write;

use crate::Event;
use crate::calendar::MonthCursor;
use crate::calendar::grid::{DayCell, WEEK_LEN};

const WEEKDAYS: [&str; WEEK_LEN] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Render a month grid.
///
/// Days of the adjacent months are shown in parentheses, today in brackets, and days with events are starred.
/// The events of the displayed days are listed below the grid.
pub fn format_month(cursor: &MonthCursor, cells: &[DayCell]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:^width$}", cursor.label(), width = WEEK_LEN * 7);
    for name in WEEKDAYS.iter() {
        let _ = write!(out, "{:^7}", name);
    }
    out.push('\n');

    for week in cells.chunks(WEEK_LEN) {
        for cell in week {
            let day = cell.date.format("%e").to_string();
            let day = match (cell.in_current_month, cell.is_today) {
                (_, true) => format!("[{}]", day.trim()),
                (true, false) => day,
                (false, false) => format!("({})", day.trim()),
            };
            let marker = if cell.events.is_empty() { ' ' } else { '*' };
            let _ = write!(out, "{:>4}{}{} ", day, cell.moon_phase.symbol(), marker);
        }
        out.push('\n');
    }

    for cell in cells.iter().filter(|cell| cell.events.is_empty() == false) {
        for event in &cell.events {
            let _ = writeln!(out, "  {} {} {} [{}]", cell.date.format("%b %e"), cell.moon_phase.symbol(), event.short_title(), event.category());
        }
    }
    out
}

pub fn print_month(cursor: &MonthCursor, cells: &[DayCell]) {
    print!("{}", format_month(cursor, cells));
}

/// Render the list view of events: one block per event
pub fn format_event_list(events: &[&Event]) -> String {
    let mut out = String::new();
    for event in events {
        let _ = writeln!(out, "{}", event.long_date());
        let _ = writeln!(out, "    {} [{}]", event.title(), event.category());
        let _ = writeln!(out, "    {}", event.description());
        let _ = writeln!(out, "    > {}", event.action().label());
    }
    out
}

pub fn print_event_list(events: &[&Event]) {
    print!("{}", format_event_list(events));
}
