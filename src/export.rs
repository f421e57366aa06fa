//! Export events to external calendars
//!
//! An event is exported either as a link that pre-fills a new Google Calendar event, or as an `.ics` file.
//! Both describe a one-hour event starting at midnight (local time) on the event date.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use url::Url;

use crate::Event;
use crate::config::{DEFAULT_LOCATION, EXPORT_DURATION_HOURS};
use crate::ical::{self, format_date_time, slugify};

static GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";
/// MIME type of exported files
pub const ICS_MIME_TYPE: &str = "text/calendar";


/// Where an event should be exported
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// A Google Calendar link
    GoogleCalendar,
    /// An `.ics` file, for Apple Calendar, Outlook and the like
    ICalendar,
}

impl FromStr for ExportFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(ExportFormat::GoogleCalendar),
            "ical" | "apple" | "outlook" => Ok(ExportFormat::ICalendar),
            other => Err(format!("Unknown export format {:?} (expected google, ical, apple or outlook)", other).into()),
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ExportFormat::GoogleCalendar => write!(f, "google"),
            ExportFormat::ICalendar => write!(f, "ical"),
        }
    }
}

/// A file to be offered for download
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl CalendarFile {
    /// Write this file into `folder`, and return its path
    pub fn save_to_folder(&self, folder: &Path) -> Result<PathBuf, Box<dyn Error>> {
        let path = folder.join(&self.file_name);
        std::fs::write(&path, &self.content)
            .map_err(|err| format!("Unable to save file {:?}: {}", path, err))?;
        log::info!("Saved {}", path.display());
        Ok(path)
    }
}

/// The result of an export
#[derive(Clone, Debug, PartialEq)]
pub enum Export {
    /// Open this URL
    Redirect(Url),
    /// Save this file
    File(CalendarFile),
}

/// Export an event, using the local timezone
pub fn export_event(event: &Event, format: ExportFormat) -> Result<Export, Box<dyn Error>> {
    export_event_in(event, format, &Local, Utc::now())
}

/// Export an event whose date is interpreted in `tz`. `now` is used as the iCal creation time
pub fn export_event_in<Tz: TimeZone>(event: &Event, format: ExportFormat, tz: &Tz, now: DateTime<Utc>) -> Result<Export, Box<dyn Error>> {
    let (start, end) = time_range(event.date(), tz)?;
    log::debug!("Exporting {} as {}", event.title(), format);

    match format {
        ExportFormat::GoogleCalendar => {
            Ok(Export::Redirect(google_calendar_url(event, &start, &end)?))
        },
        ExportFormat::ICalendar => {
            Ok(Export::File(CalendarFile {
                file_name: file_name_for(event),
                mime_type: ICS_MIME_TYPE,
                content: ical::build_from(event, &start, &end, &now),
            }))
        },
    }
}

/// Start and end of the exported event: midnight of `date` in `tz`, and one hour later
pub fn time_range<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<(DateTime<Utc>, DateTime<Utc>), Box<dyn Error>> {
    let midnight = match date.and_hms_opt(0, 0, 0) {
        Some(midnight) => midnight,
        None => return Err(format!("No midnight on {}", date).into()),
    };
    let start = match tz.from_local_datetime(&midnight).earliest() {
        Some(start) => start.with_timezone(&Utc),
        None => return Err(format!("Midnight does not exist on {} in this timezone", date).into()),
    };
    Ok((start, start + Duration::hours(EXPORT_DURATION_HOURS)))
}

/// The location of an exported event
pub fn location_of(event: &Event) -> &str {
    event.location().unwrap_or(DEFAULT_LOCATION)
}

/// Build the link that creates this event in Google Calendar
pub fn google_calendar_url(event: &Event, start: &DateTime<Utc>, end: &DateTime<Utc>) -> Result<Url, Box<dyn Error>> {
    let dates = format!("{}/{}", format_date_time(start), format_date_time(end));
    let url = Url::parse_with_params(GOOGLE_CALENDAR_URL, &[
        ("action", "TEMPLATE"),
        ("text", event.title()),
        ("dates", dates.as_str()),
        ("details", event.description()),
        ("location", location_of(event)),
    ])?;
    Ok(url)
}

/// The name of the `.ics` file of an event, e.g. `Artemis-II-Launch.ics`
pub fn file_name_for(event: &Event) -> String {
    sanitize_filename::sanitize(format!("{}.ics", slugify(event.title())))
}
