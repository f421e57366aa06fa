use std::error::Error;
use std::path::PathBuf;

use astro_calendar::calendar::grid::build_grid_for_today;
use astro_calendar::client::LaunchClient;
use astro_calendar::config::{self, LAUNCH_API_URL};
use astro_calendar::export::{export_event, Export, ExportFormat};
use astro_calendar::provider::refresh_launches;
use astro_calendar::{EventStore, MonthCursor};

const USAGE: &str = "Usage: astro-calendar [--offline] <command>

Commands:
    month [YYYY-MM]                                 Display a month (defaults to the current month)
    list [--json]                                   List every event
    export <title> <google|ical|apple|outlook> [dir] Export an event to a calendar

Set ASTRO_CALENDAR_LAUNCH_API to use another launch listing endpoint, and RUST_LOG to get more details.";


#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run(std::env::args().skip(1).collect()).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

async fn run(mut args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let offline = match args.iter().position(|arg| arg == "--offline") {
        Some(index) => { args.remove(index); true },
        None => false,
    };
    if let Ok(url) = std::env::var("ASTRO_CALENDAR_LAUNCH_API") {
        config::set(&LAUNCH_API_URL, url);
    }

    let mut store = EventStore::with_celestial_events()?;
    if offline == false {
        let client = LaunchClient::from_config()?;
        if refresh_launches(&client, &mut store).await == false {
            log::warn!("Launches are not available, only built-in events will be displayed");
        }
    }

    let command = args.first().map(String::as_str);
    match command {
        Some("month") => {
            let cursor = match args.get(1) {
                Some(month) => month.parse::<MonthCursor>()?,
                None => MonthCursor::containing(chrono::Local::now().date_naive()),
            };
            let cells = build_grid_for_today(cursor.year(), cursor.month(), &store)?;
            astro_calendar::utils::print_month(&cursor, &cells);
        },
        Some("list") => {
            let events = store.sorted_by_date();
            if args.get(1).map(String::as_str) == Some("--json") {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                astro_calendar::utils::print_event_list(&events);
            }
        },
        Some("export") => {
            let (title, format) = match (args.get(1), args.get(2)) {
                (Some(title), Some(format)) => (title, format.parse::<ExportFormat>()?),
                _ => return Err(USAGE.into()),
            };
            let event = match store.get().iter().find(|event| event.title() == title) {
                Some(event) => event,
                None => return Err(format!("No event named {:?}", title).into()),
            };
            match export_event(event, format)? {
                Export::Redirect(url) => println!("{}", url),
                Export::File(file) => {
                    let folder = args.get(3).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
                    let path = file.save_to_folder(&folder)?;
                    println!("Saved {} ({})", path.display(), file.mime_type);
                },
            }
        },
        _ => return Err(USAGE.into()),
    }
    Ok(())
}
