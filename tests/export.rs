//! Exporting events and reading the exported files back

use chrono::{FixedOffset, Utc};

use astro_calendar::export::{export_event_in, Export, ExportFormat};
use astro_calendar::ical::parse as parse_ical;
use astro_calendar::EventStore;

#[test]
fn ics_round_trip() {
    let store = EventStore::with_celestial_events().unwrap();
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();

    for event in store.get() {
        let file = match export_event_in(event, ExportFormat::ICalendar, &tz, Utc::now()).unwrap() {
            Export::File(file) => file,
            other => panic!("Unexpected export {:?}", other),
        };
        let parsed = parse_ical(&file.content).unwrap();
        assert_eq!(parsed.title, event.title());
        assert_eq!(parsed.date_in(&tz), event.date());
        assert_eq!(parsed.description.as_deref(), Some(event.description()));
        assert_eq!(parsed.location.as_deref(), Some("Sky"));
        assert_eq!(parsed.end.unwrap() - parsed.start, chrono::Duration::hours(1));
    }
}

#[test]
fn folded_description_is_read_back_verbatim() {
    let store = EventStore::with_celestial_events().unwrap();
    let eclipse = store.get().iter().find(|e| e.title() == "Total Lunar Eclipse").unwrap();

    let file = match export_event_in(eclipse, ExportFormat::ICalendar, &Utc, Utc::now()).unwrap() {
        Export::File(file) => file,
        other => panic!("Unexpected export {:?}", other),
    };
    // long enough to be folded by the builder
    assert!(file.content.contains("\r\n "));
    let parsed = parse_ical(&file.content).unwrap();
    assert_eq!(
        parsed.description.as_deref(),
        Some("Total lunar eclipse visible from North America, South America, Europe, and Africa. Maximum eclipse at 12:13 UTC.")
    );
}

#[test]
fn artemis_file() {
    let store = EventStore::with_celestial_events().unwrap();
    let artemis = store.get().iter().find(|e| e.title() == "Artemis II Launch").unwrap();

    let file = match export_event_in(artemis, "apple".parse().unwrap(), &Utc, Utc::now()).unwrap() {
        Export::File(file) => file,
        other => panic!("Unexpected export {:?}", other),
    };
    assert_eq!(file.file_name, "Artemis-II-Launch.ics");
    assert!(file.content.contains("SUMMARY:Artemis II Launch"));
    assert!(file.content.starts_with("BEGIN:VCALENDAR\r\n"));

    let folder = std::env::temp_dir().join("astro-calendar-export-test");
    std::fs::create_dir_all(&folder).unwrap();
    let path = file.save_to_folder(&folder).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), file.content);
    let _ = std::fs::remove_file(path);
}
