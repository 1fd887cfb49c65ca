use std::io::Write;

use clap::Parser;
use moonsync::command::{Command, HELP};
use moonsync::config::Config;
use moonsync::controller::{Event, SyncController};
use moonsync::error::SyncError;
use moonsync::geo_location::{FixedGeolocator, Geolocator, IpGeolocator};
use moonsync::map::{MapWidget, TerminalMap};
use moonsync::session::Session;
use moonsync::timezone::{self, LocalZone, TIMEZONES};
use moonsync::times::{HttpTimeSource, TimeSource};
use tracing::{info, span, warn};
use tracing_subscriber::EnvFilter;

/// The main function initializes the tracing subscriber, builds the session from the
/// command line and environment, locates the user, and then reads commands until the
/// user inputs "exit".
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::parse();
    config.validate()?;

    let mut local_zone = LocalZone::detect();
    if let Some(zone) = &config.zone {
        local_zone.id = Some(zone.clone());
        // keep the numeric fallback in line with the chosen zone
        if let Some(entry) = timezone::find_by_id(zone) {
            local_zone.offset_hours = entry.offset;
        }
    }

    let source = HttpTimeSource::new(&config.server_url, config.request_timeout())?;
    info!("Using moon server at {}", source.base_url());
    let controller = SyncController::new(local_zone);

    // a fixed position wins over IP lookups
    match config.fixed_position() {
        Some(position) => {
            let locator = FixedGeolocator::new(Some(position));
            run(Session::new(controller, TerminalMap::default(), source, locator)).await
        }
        None => {
            let client = reqwest::Client::builder()
                .timeout(config.request_timeout())
                .build()?;
            let locator = IpGeolocator::new(client, config.geolocation_api_key.clone());
            run(Session::new(controller, TerminalMap::default(), source, locator)).await
        }
    }
}

async fn run<S, G>(mut session: Session<TerminalMap, S, G>) -> anyhow::Result<()>
where
    S: TimeSource,
    G: Geolocator,
{
    session.start().await;
    render(&session);
    println!("Type `help` for commands, `exit` to stop.");

    // read user commands until `exit`
    let mut buffer = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        buffer.clear();
        if std::io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let line = buffer.trim_start_matches('>').trim();
        if line.is_empty() {
            continue;
        }

        let commands = match Command::parse_line(line) {
            Ok(commands) => commands,
            Err(e) => {
                warn!("Rejected input: {}", line);
                eprintln!("{}", e);
                continue;
            }
        };

        let mut events = Vec::new();
        let mut exit = false;
        for command in commands {
            match command {
                Command::Event(event) => events.push(event),
                Command::Drag { lat, lon } => match session.place_marker(lat, lon) {
                    Some(dropped) => events.push(Event::from(dropped)),
                    None => eprintln!("{}", SyncError::InvalidCoordinates),
                },
                Command::Zones => print_zones(),
                Command::Show => {}
                Command::Help => println!("{}", HELP),
                Command::Exit => {
                    exit = true;
                    break;
                }
            }
        }

        if !events.is_empty() {
            span!(tracing::Level::INFO, "input").in_scope(|| info!("{}", line));
            session.dispatch_all(events).await;
        }
        render(&session);

        if exit {
            info!("User wants to exit");
            break;
        }
    }

    Ok(())
}

fn render<S, G>(session: &Session<TerminalMap, S, G>)
where
    S: TimeSource,
    G: Geolocator,
{
    let map = session.view().map();
    print!("{}", session.page());
    match (map.marker_position(), map.view_url()) {
        (Some(marker), Some(url)) => println!("Marker   : {} ({})", marker, url),
        _ => println!("Marker   : -"),
    }
    if let Some(center) = map.center().filter(|c| Some(*c) != map.marker_position()) {
        println!("Map view : centred on {}", center);
    }
}

fn print_zones() {
    for tz in TIMEZONES.iter() {
        println!("{:>6}  {:<32} {}", tz.offset_text(), tz.id, tz.label);
    }
}
