//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Part of the ProdID string that describes the organization (example of a ProdID string: `-//ABC Corporation//My Product//EN`).
/// Feel free to override it when initing this library.
pub static ORG_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Astronomy Calendar".to_string())));

/// Part of the ProdID string that describes the product name (example of a ProdID string: `-//ABC Corporation//My Product//EN`).
/// Feel free to override it when initing this library.
pub static PRODUCT_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("AstroCalendar".to_string())));

/// The Launch Library endpoint that lists upcoming launches.
/// The binary overrides it from the `ASTRO_CALENDAR_LAUNCH_API` environment variable.
pub static LAUNCH_API_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("https://ll.thespacedevs.com/2.2.0/launch/upcoming/".to_string())));

/// Domain part of the UIDs of exported iCal events
pub static UID_DOMAIN: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("astronomycalendar.com".to_string())));

/// How many launches are requested from the API
pub const LAUNCH_FETCH_LIMIT: u32 = 100;
/// How many fetched launches are kept in the store
pub const MAX_LAUNCHES: usize = 50;
/// Location of exported events that have no launch location
pub const DEFAULT_LOCATION: &str = "Sky";
/// Length of exported events
pub const EXPORT_DURATION_HOURS: i64 = 1;

/// Read the current value of one of the settings above
pub fn get(setting: &Lazy<Arc<Mutex<String>>>) -> String {
    match setting.lock() {
        Ok(value) => value.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Override one of the settings above
pub fn set<S: ToString>(setting: &Lazy<Arc<Mutex<String>>>, value: S) {
    match setting.lock() {
        Ok(mut current) => *current = value.to_string(),
        Err(poisoned) => *poisoned.into_inner() = value.to_string(),
    }
}
