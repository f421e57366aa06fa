//! A module to build ICal files

use chrono::{DateTime, Utc};
use ics::properties::{Description, DtEnd, DtStart, Location, Summary};
use ics::ICalendar;

use crate::Event;
use crate::export::location_of;

/// Create an iCal file that contains a single `VEVENT` for `event`, that lasts from `start` to `end`.
///
/// `stamp` is the creation time of this file.
/// Note that texts are copied as-is: commas and semicolons are not escaped.
pub fn build_from(event: &Event, start: &DateTime<Utc>, end: &DateTime<Utc>, stamp: &DateTime<Utc>) -> String {
    let mut vevent = ics::Event::new(
        super::event_uid(event),
        format_date_time(stamp),
    );
    vevent.push(DtStart::new(format_date_time(start)));
    vevent.push(DtEnd::new(format_date_time(end)));
    vevent.push(Summary::new(event.title()));
    vevent.push(Description::new(event.description()));
    vevent.push(Location::new(location_of(event)));

    let mut calendar = ICalendar::new("2.0", super::default_prod_id());
    calendar.add_event(vevent);

    calendar.to_string()
}

/// Format a UTC timestamp the compact iCal way, e.g. `20260401T000000Z`
pub fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}
