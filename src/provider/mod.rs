//! This modules merges fetched launches into an [`EventStore`]

use std::error::Error;

use chrono::{DateTime, Utc};

use crate::Event;
use crate::event::EventCategory;
use crate::client::LaunchRecord;
use crate::config::MAX_LAUNCHES;
use crate::store::EventStore;
use crate::traits::LaunchSource;

pub mod channels;
use channels::{resolve_stream_url, AGENCY_CHANNELS};

const DEFAULT_LAUNCH_TITLE: &str = "Space Launch";
const DEFAULT_AGENCY: &str = "Unknown agency";
const DEFAULT_MISSION: &str = "No mission details available";
const LAUNCH_DURATION: &str = "Launch window";


/// Fetch launches from `source`, and replace the launches of `store` with them.
///
/// In case the fetch fails, the store only keeps its static events. Details about errors are logged using the `log::*` macros.
/// Returns whether the fetch was successful.
pub async fn refresh_launches<S: LaunchSource>(source: &S, store: &mut EventStore) -> bool {
    refresh_launches_at(source, store, Utc::now()).await
}

/// Same as [`refresh_launches`], but only keeps launches that happen after `now`
pub async fn refresh_launches_at<S: LaunchSource>(source: &S, store: &mut EventStore, now: DateTime<Utc>) -> bool {
    match source.fetch_launches().await {
        Err(err) => {
            log::warn!("Unable to fetch launches: {}. Only built-in events will be displayed", err);
            store.reset_to_static();
            false
        },
        Ok(records) => {
            let launches = launches_from_records(&records, now);
            log::info!("Merging {} upcoming launches", launches.len());
            store.merge_launches(launches);
            true
        },
    }
}

/// Turn API records into events.
///
/// Only launches after `now` are kept, and at most [`MAX_LAUNCHES`] of them, in the order of `records`.
pub fn launches_from_records(records: &[LaunchRecord], now: DateTime<Utc>) -> Vec<Event> {
    records.iter()
        .filter_map(|record| {
            let net = match launch_time(record) {
                Err(err) => {
                    log::warn!("Ignoring launch {:?}: {}", record.name, err);
                    return None;
                },
                Ok(net) => net,
            };
            if net > now {
                Some(event_from_record(record, net))
            } else {
                None
            }
        })
        .take(MAX_LAUNCHES)
        .collect()
}

fn launch_time(record: &LaunchRecord) -> Result<DateTime<Utc>, Box<dyn Error>> {
    let net = match &record.net {
        None => return Err("missing launch time".into()),
        Some(net) => net,
    };
    let parsed = DateTime::parse_from_rfc3339(net)
        .map_err(|err| format!("invalid launch time {:?} ({})", net, err))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Build the calendar event of a launch that happens at `net`
pub fn event_from_record(record: &LaunchRecord, net: DateTime<Utc>) -> Event {
    let title = record.name.as_deref().unwrap_or(DEFAULT_LAUNCH_TITLE);
    let agency = record.agency_name();
    let description = format!("{} - {}",
        agency.unwrap_or(DEFAULT_AGENCY),
        record.mission_description().unwrap_or(DEFAULT_MISSION),
    );
    let stream_url = resolve_stream_url(
        AGENCY_CHANNELS,
        agency,
        record.vid_urls.iter().map(|video| video.as_str()),
    );

    Event::new(net.date_naive(), title, EventCategory::Launch, description, LAUNCH_DURATION)
        .with_stream(stream_url, true)
        .with_launch_details(agency.map(String::from), record.location_name().map(String::from))
}
