//! Calendar events (celestial occurrences and space launches)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use url::Url;

/// How many characters of the title are shown in a grid cell
const SHORT_TITLE_LEN: usize = 15;

/// The kind of an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Eclipse,
    MeteorShower,
    SolsticeOrEquinox,
    Launch,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Eclipse => "eclipse",
            EventCategory::MeteorShower => "meteor-shower",
            EventCategory::SolsticeOrEquinox => "solstice-or-equinox",
            EventCategory::Launch => "launch",
        }
    }
}

impl Display for EventCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

/// What happens when the user picks an event
#[derive(Clone, Debug, PartialEq)]
pub enum EventAction {
    /// Open a live broadcast
    WatchLive(Url),
    /// Open a recorded broadcast
    ViewRecording(Url),
    /// Show the export format chooser
    AddToCalendar,
}

impl EventAction {
    /// The text of the button that triggers this action
    pub fn label(&self) -> &'static str {
        match self {
            EventAction::WatchLive(_) => "Watch Live",
            EventAction::ViewRecording(_) => "View on YouTube",
            EventAction::AddToCalendar => "Add to Calendar",
        }
    }
}

/// An event displayed by the calendar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// The day this event happens. Launches keep the UTC date of their launch time
    date: NaiveDate,
    title: String,
    category: EventCategory,
    description: String,
    /// Advisory only, e.g. "3h 36m" or "Night"
    duration: String,

    /// A live or recorded broadcast of this event
    #[serde(default)]
    stream_url: Option<Url>,
    /// Only meaningful when `stream_url` is set
    #[serde(default)]
    live_stream: bool,

    /// Launch provider, only set for fetched launches
    #[serde(default)]
    agency: Option<String>,
    /// Launch pad location, only set for fetched launches
    #[serde(default)]
    location: Option<String>,
}

impl Event {
    /// Create an event without any broadcast or launch details
    pub fn new<T: ToString, D: ToString, U: ToString>(date: NaiveDate, title: T, category: EventCategory, description: D, duration: U) -> Self {
        Self {
            date,
            title: title.to_string(),
            category,
            description: description.to_string(),
            duration: duration.to_string(),
            stream_url: None,
            live_stream: false,
            agency: None,
            location: None,
        }
    }

    /// Attach a broadcast to this event
    pub fn with_stream(mut self, url: Option<Url>, live: bool) -> Self {
        self.stream_url = url;
        self.live_stream = live;
        self
    }

    /// Attach launch provider and pad location to this event
    pub fn with_launch_details(mut self, agency: Option<String>, location: Option<String>) -> Self {
        self.agency = agency;
        self.location = location;
        self
    }

    pub fn date(&self) -> NaiveDate            { self.date }
    pub fn title(&self) -> &str                { &self.title }
    pub fn category(&self) -> EventCategory    { self.category }
    pub fn description(&self) -> &str          { &self.description }
    pub fn duration(&self) -> &str             { &self.duration }
    pub fn stream_url(&self) -> Option<&Url>   { self.stream_url.as_ref() }
    pub fn is_live_stream(&self) -> bool       { self.live_stream }
    pub fn agency(&self) -> Option<&str>       { self.agency.as_deref() }
    pub fn location(&self) -> Option<&str>     { self.location.as_deref() }

    /// Whether this event shows a broadcast button rather than the export chooser
    pub fn action(&self) -> EventAction {
        match (&self.stream_url, self.live_stream) {
            (Some(url), true) => EventAction::WatchLive(url.clone()),
            (Some(url), false) => EventAction::ViewRecording(url.clone()),
            (None, _) => EventAction::AddToCalendar,
        }
    }

    /// The title as displayed in a (narrow) grid cell
    pub fn short_title(&self) -> String {
        let short: String = self.title.chars().take(SHORT_TITLE_LEN).collect();
        format!("{}...", short)
    }

    /// The date as displayed in the event list, e.g. `Tuesday, February 17, 2026`
    pub fn long_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn eclipse() -> Event {
        Event::new(
            NaiveDate::from_ymd_opt(2026, 2, 17).unwrap(),
            "Total Lunar Eclipse",
            EventCategory::Eclipse,
            "Visible from the Americas",
            "3h 36m",
        )
    }

    #[test]
    fn action_depends_on_stream() {
        let url = Url::parse("https://www.youtube.com/nasa").unwrap();

        assert_eq!(eclipse().action(), EventAction::AddToCalendar);
        assert_eq!(eclipse().with_stream(Some(url.clone()), true).action(), EventAction::WatchLive(url.clone()));
        assert_eq!(eclipse().with_stream(Some(url.clone()), false).action().label(), "View on YouTube");
        // the live flag alone means nothing
        assert_eq!(eclipse().with_stream(None, true).action(), EventAction::AddToCalendar);
    }

    #[test]
    fn display_helpers() {
        let event = eclipse();
        assert_eq!(event.short_title(), "Total Lunar Ecl...");
        assert_eq!(event.long_date(), "Tuesday, February 17, 2026");
    }

    #[test]
    fn category_serialization() {
        let json = serde_json::to_string(&EventCategory::SolsticeOrEquinox).unwrap();
        assert_eq!(json, "\"solstice-or-equinox\"");
        let parsed: EventCategory = serde_json::from_str("\"meteor-shower\"").unwrap();
        assert_eq!(parsed, EventCategory::MeteorShower);
    }
}
