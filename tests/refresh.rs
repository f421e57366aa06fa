//! Fetching launches and merging them into the event store

use std::error::Error;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use astro_calendar::client::{parse_launch_list, LaunchRecord};
use astro_calendar::event::{EventAction, EventCategory};
use astro_calendar::provider::refresh_launches_at;
use astro_calendar::traits::LaunchSource;
use astro_calendar::EventStore;

static LAUNCH_LIST: &str = r#"{
    "count": 3,
    "next": null,
    "results": [
        {
            "name": "Starship | Flight 12",
            "net": "2026-11-20T13:00:00Z",
            "launch_service_provider": { "name": "SpaceX Starship" },
            "mission": { "description": "Suborbital test flight." },
            "pad": { "location": { "name": "Starbase, TX, USA" } },
            "vidURLs": []
        },
        {
            "name": "Electron | Some Payload",
            "net": "2026-10-20T06:00:00Z",
            "launch_service_provider": { "name": "Galactic Energy" },
            "mission": null,
            "pad": { "location": null },
            "vidURLs": [ { "url": "https://www.youtube.com/watch?v=123" } ]
        },
        {
            "name": "Already gone",
            "net": "2026-10-01T06:00:00Z",
            "launch_service_provider": { "name": "NASA" }
        }
    ]
}"#;

/// A launch source that does not need the network
enum MockSource {
    Body(&'static str),
    Failure,
}

#[async_trait]
impl LaunchSource for MockSource {
    async fn fetch_launches(&self) -> Result<Vec<LaunchRecord>, Box<dyn Error>> {
        match self {
            MockSource::Body(body) => parse_launch_list(body),
            MockSource::Failure => Err("Unexpected HTTP status 503 Service Unavailable".into()),
        }
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap()
}

#[tokio::test]
async fn launches_are_merged_and_sorted() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = EventStore::with_celestial_events().unwrap();
    let n_static = store.static_events().len();

    assert!(refresh_launches_at(&MockSource::Body(LAUNCH_LIST), &mut store, now()).await);
    assert_eq!(store.get().len(), n_static + 2);

    let dates: Vec<NaiveDate> = store.get().iter().map(|e| e.date()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);

    let starship = store.get().iter().find(|e| e.title() == "Starship | Flight 12").unwrap();
    assert_eq!(starship.category(), EventCategory::Launch);
    assert_eq!(starship.description(), "SpaceX Starship - Suborbital test flight.");
    assert_eq!(starship.stream_url().unwrap().as_str(), "https://www.youtube.com/@SpaceX");
    assert_eq!(starship.action().label(), "Watch Live");

    let electron = store.get().iter().find(|e| e.title() == "Electron | Some Payload").unwrap();
    assert_eq!(electron.description(), "Galactic Energy - No mission details available");
    assert_eq!(electron.action(), EventAction::WatchLive("https://www.youtube.com/watch?v=123".parse().unwrap()));
    assert_eq!(electron.location(), None);

    assert!(store.get().iter().all(|e| e.title() != "Already gone"));
}

#[tokio::test]
async fn failures_fall_back_to_static_events() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = EventStore::with_celestial_events().unwrap();
    let baseline = store.clone();

    // A failed first fetch changes nothing
    assert_eq!(refresh_launches_at(&MockSource::Failure, &mut store, now()).await, false);
    assert_eq!(store, baseline);

    // A failed fetch after a successful one drops the launches
    assert!(refresh_launches_at(&MockSource::Body(LAUNCH_LIST), &mut store, now()).await);
    assert_ne!(store.get(), baseline.get());
    assert_eq!(refresh_launches_at(&MockSource::Failure, &mut store, now()).await, false);
    assert_eq!(store.get(), baseline.get());

    // So does a malformed payload
    assert!(refresh_launches_at(&MockSource::Body(LAUNCH_LIST), &mut store, now()).await);
    assert_eq!(refresh_launches_at(&MockSource::Body("<html>rate limited</html>"), &mut store, now()).await, false);
    assert_eq!(store.get(), baseline.get());
}

#[tokio::test]
async fn empty_listing_keeps_static_events() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = EventStore::with_celestial_events().unwrap();
    assert!(refresh_launches_at(&MockSource::Body(r#"{"results": []}"#), &mut store, now()).await);
    assert_eq!(store.get(), store.static_events());
}
