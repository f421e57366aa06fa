//! A module to parse ICal files

use std::error::Error;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use ical::parser::ical::component::IcalEvent;

/// The content of a single-event iCal file, as built by [`super::build_from`]
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedEvent {
    pub uid: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl ParsedEvent {
    /// The calendar date of the start of this event, as seen in `tz`
    pub fn date_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.start.with_timezone(tz).date_naive()
    }
}

/// Parse an iCal file that contains a single event
pub fn parse(content: &str) -> Result<ParsedEvent, Box<dyn Error>> {
    let unfolded = unfold(content);
    let mut reader = ical::IcalParser::new(unfolded.as_bytes());
    let calendar = match reader.next() {
        None => return Err("Invalid iCal data to parse".into()),
        Some(item) => match item {
            Err(err) => return Err(format!("Unable to parse iCal data: {}", err).into()),
            Ok(item) => item,
        }
    };

    if calendar.events.len() != 1 {
        return Err(format!("Expected a single EVENT, found {}", calendar.events.len()).into());
    }
    // What to do with multiple calendars?
    if reader.next().map(|r| r.is_ok()) == Some(true) {
        return Err("Parsing multiple calendars is not supported".into());
    }

    let vevent = &calendar.events[0];
    let uid = match property(vevent, "UID") {
        Some(uid) => uid,
        None => return Err("Missing UID".into()),
    };
    let title = match property(vevent, "SUMMARY") {
        Some(title) => title,
        None => return Err(format!("Missing name for event {}", uid).into()),
    };
    let start = match property(vevent, "DTSTART") {
        Some(start) => parse_date_time(&start)?,
        None => return Err(format!("Missing start for event {}", uid).into()),
    };
    let end = match property(vevent, "DTEND") {
        Some(end) => Some(parse_date_time(&end)?),
        None => None,
    };

    Ok(ParsedEvent {
        title,
        start,
        end,
        description: property(vevent, "DESCRIPTION"),
        location: property(vevent, "LOCATION"),
        uid,
    })
}

/// Join folded content lines (RFC 5545 §3.1).
///
/// The `ical` reader trims the end of a line before joining its continuation, which loses a space that sat right before a fold.
fn unfold(content: &str) -> String {
    content
        .replace("\r\n ", "")
        .replace("\r\n\t", "")
        .replace("\n ", "")
        .replace("\n\t", "")
}

fn property(vevent: &IcalEvent, name: &str) -> Option<String> {
    vevent.properties
        .iter()
        .find(|prop| prop.name == name)
        .and_then(|prop| prop.value.clone())
}

fn parse_date_time(value: &str) -> Result<DateTime<Utc>, Box<dyn Error>> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%SZ")
        .map_err(|err| format!("Invalid UTC date-time {:?}: {}", value, err))?;
    Ok(Utc.from_utc_datetime(&naive))
}
