//! This crate provides a month-grid astronomy calendar.
//!
//! Built-in celestial events (eclipses, meteor showers, solstices and equinoxes) are stored in an [`EventStore`](store::EventStore),
//! that can be completed by upcoming space launches fetched from the Launch Library API (see [`provider::refresh_launches`]).
//!
//! The [`calendar`] module builds 6-week grids of days, each one with its [moon phase](moon::estimate_phase) and its events. \
//! Events can be exported to external calendars by the [`export`] module, either as a Google Calendar link or as an iCal file.

pub mod traits;

pub mod calendar;
pub use calendar::MonthCursor;
pub mod event;
pub use event::Event;
pub mod store;
pub use store::EventStore;
pub mod moon;
pub mod provider;
pub mod client;
pub mod export;
pub mod ical;
pub mod data;

pub mod config;
pub mod utils;
