//! Conversion between events and single-event iCal files
//!
//! Files are written with the `ics` crate, and read back with the `ical` crate (see [`parse`]), which is enough to check what an export contains.

mod parser;
pub use parser::{parse, ParsedEvent};
mod builder;
pub use builder::{build_from, format_date_time};

use crate::Event;
use crate::config::{self, ORG_NAME, PRODUCT_NAME, UID_DOMAIN};

pub fn default_prod_id() -> String {
    format!("-//{}//{}//EN", config::get(&ORG_NAME), config::get(&PRODUCT_NAME))
}

/// Replace every run of whitespace in `title` by a single `-`
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if in_whitespace == false {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    slug
}

/// The UID of the iCal item built from an event
pub fn event_uid(event: &Event) -> String {
    format!("{}-{}@{}", event.date().format("%Y-%m-%d"), slugify(event.title()), config::get(&UID_DOMAIN))
}
