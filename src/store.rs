//! This module provides the in-memory list of events the calendar displays

use std::error::Error;

use chrono::{Datelike, Month, NaiveDate};

use crate::Event;


/// The events known by the calendar
///
/// It always contains the built-in (static) events. Fetched launches are added by [`EventStore::merge_launches`],
/// which replaces any previously fetched launches.
#[derive(Clone, Debug, PartialEq)]
pub struct EventStore {
    static_events: Vec<Event>,
    events: Vec<Event>,
}

impl EventStore {
    /// Create a store that contains only the given static events
    pub fn new(static_events: Vec<Event>) -> Self {
        Self {
            events: static_events.clone(),
            static_events,
        }
    }

    /// Create a store seeded with the built-in celestial events
    pub fn with_celestial_events() -> Result<Self, Box<dyn Error>> {
        Ok(Self::new(crate::data::celestial_events()?))
    }

    /// The current list of events
    pub fn get(&self) -> &[Event] {
        &self.events
    }

    /// The events this store has been seeded with
    pub fn static_events(&self) -> &[Event] {
        &self.static_events
    }

    /// Replace the whole list of events
    pub fn replace(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// Forget every fetched (or custom) event
    pub fn reset_to_static(&mut self) {
        self.events = self.static_events.clone();
    }

    /// Replace the current list by the static events plus `launches`, sorted by date.
    ///
    /// Events that share a date keep their relative order (static events first)
    pub fn merge_launches(&mut self, launches: Vec<Event>) {
        let mut all = self.static_events.clone();
        all.extend(launches);
        all.sort_by_key(|event| event.date());
        self.replace(all);
    }

    /// Add an event to the current list.
    ///
    /// It is not part of the static events, so that it will be dropped at the next refresh
    pub fn add_custom_event(&mut self, event: Event) {
        log::info!("Adding custom event {} on {}", event.title(), event.date());
        self.events.push(event);
    }

    /// Every event that happens on `date`
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.date() == date)
            .collect()
    }

    /// Every event that happens during the given month
    pub fn events_in_month(&self, year: i32, month: Month) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.date().year() == year && event.date().month() == month.number_from_month())
            .collect()
    }

    /// All events, sorted by date (used by the list view)
    pub fn sorted_by_date(&self) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        sorted.sort_by_key(|event| event.date());
        sorted
    }
}
