//! The curated list of celestial events that is always available, even without network access
//!
//! New events can be added to `celestial_events.json`. Events that carry a `stream_url` open
//! this broadcast when clicked, the other ones offer to export them to a calendar.

use std::error::Error;

use crate::Event;

static CELESTIAL_EVENTS_JSON: &str = include_str!("celestial_events.json");

/// Returns the built-in celestial events, in the order they are listed in the data file
pub fn celestial_events() -> Result<Vec<Event>, Box<dyn Error>> {
    let events: Vec<Event> = serde_json::from_str(CELESTIAL_EVENTS_JSON)
        .map_err(|err| format!("Invalid built-in event list: {}", err))?;
    log::debug!("Loaded {} built-in events", events.len());
    Ok(events)
}
