//! State transitions of the location/time sync.
//!
//! The controller owns the current coordinate and zone. Every input is an
//! [`Event`]; handling one returns the [`Effect`]s the shell must perform, in
//! order. Nothing in here touches the network or the widgets.

use tracing::{debug, info, warn};

use crate::error::{AppError, SyncError};
use crate::geo::{Coordinate, GeolocationError, Position, PositionOptions};
use crate::notice::Notice;
use crate::timezone::{self, LocalZone, TimezoneEntry};
use crate::times::{self, TimeLookupResult, TimesQuery, TimesResponse};

/// Zone offset in effect before anything is resolved
const DEFAULT_OFFSET_HOURS: f64 = 10.0;

pub const LOCATING_TEXT: &str = "Getting your location...";

/// Inputs delivered to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Result of asking the location provider
    Geolocated(Result<Position, GeolocationError>),
    /// Coordinates typed into the input fields
    ManualInput { lat: f64, lon: f64 },
    /// Marker dropped at a new position
    MarkerDragged { lat: f64, lon: f64 },
    /// A zone picked by its offset
    TimezoneOffset(f64),
    /// A zone picked by its identifier
    TimezoneId(String),
    /// Ask for the location again
    Refresh,
    /// Host surface resized
    Resize,
    /// Look up times for the current state
    Lookup,
}

impl From<Coordinate> for Event {
    /// A marker drop at `coordinate`.
    fn from(coordinate: Coordinate) -> Self {
        Event::MarkerDragged {
            lat: coordinate.latitude(),
            lon: coordinate.longitude(),
        }
    }
}

/// Identifies one issued lookup. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub ticket: LookupTicket,
    pub query: TimesQuery,
}

/// Work for the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the coordinate into the lat/lon fields
    ShowCoordinate(Coordinate),
    SelectTimezone(&'static TimezoneEntry),
    /// Put the marker at `to`; `pan` also recentres the map
    MoveMarker { to: Coordinate, pan: bool },
    SetCalendarLink(String),
    RequestLocation(PositionOptions),
    Lookup(LookupRequest),
    ShowTimes { rise: String, set: String },
    ShowNotice(Notice),
    ClearNotice,
    ResizeMap,
}

#[derive(Debug, Clone)]
pub struct SyncController {
    coordinate: Coordinate,
    timezone: &'static TimezoneEntry,
    local_zone: LocalZone,
    last_ticket: u64,
}

impl SyncController {
    pub fn new(local_zone: LocalZone) -> Self {
        Self::with_coordinate(local_zone, Coordinate::DEFAULT)
    }

    pub fn with_coordinate(local_zone: LocalZone, coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            timezone: timezone::resolve(None, DEFAULT_OFFSET_HOURS),
            local_zone,
            last_ticket: 0,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn timezone(&self) -> &'static TimezoneEntry {
        self.timezone
    }

    pub fn calendar_link(&self) -> String {
        times::calendar_link(&self.coordinate, self.timezone)
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Geolocated(result) => self.set_from_geolocation(result),
            Event::ManualInput { lat, lon } => self.set_from_manual_input(lat, lon),
            Event::MarkerDragged { lat, lon } => self.set_from_marker_drag(lat, lon),
            Event::TimezoneOffset(offset) => self.set_timezone(offset),
            Event::TimezoneId(id) => self.select_timezone(&id),
            Event::Refresh => self.refresh(),
            Event::Resize => vec![Effect::ResizeMap],
            Event::Lookup => vec![self.lookup_times()],
        }
    }

    /// Shows the progress notice and asks the shell for a location fix.
    pub fn refresh(&mut self) -> Vec<Effect> {
        vec![
            Effect::ShowNotice(Notice::Status(LOCATING_TEXT.to_string())),
            Effect::RequestLocation(PositionOptions::default()),
        ]
    }

    pub fn set_from_geolocation(
        &mut self,
        result: Result<Position, GeolocationError>,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        match result {
            Ok(position) => {
                // a fix outside the globe is treated as no fix at all
                match Coordinate::new(position.latitude, position.longitude) {
                    Ok(coordinate) => {
                        info!("Location found: {}", coordinate);
                        self.coordinate = coordinate;
                        effects.push(Effect::ShowCoordinate(coordinate));
                        self.resolve_timezone(&mut effects);
                        effects.push(Effect::MoveMarker {
                            to: coordinate,
                            pan: true,
                        });
                    }
                    Err(_) => {
                        warn!("Location provider returned {:?}", position);
                        self.location_failed(GeolocationError::PositionUnavailable, &mut effects);
                    }
                }
            }
            Err(err) => self.location_failed(err, &mut effects),
        }
        effects.push(Effect::SetCalendarLink(self.calendar_link()));
        effects.push(self.lookup_times());
        effects
    }

    fn location_failed(&mut self, err: GeolocationError, effects: &mut Vec<Effect>) {
        let reason = SyncError::from(err);
        warn!("Location unavailable ({:?}), keeping {}", err, self.coordinate);
        effects.push(Effect::ShowNotice(Notice::Alert(reason.to_string())));
        self.resolve_timezone(effects);
    }

    fn resolve_timezone(&mut self, effects: &mut Vec<Effect>) {
        self.timezone = self.local_zone.resolve();
        debug!("Resolved timezone {}", self.timezone.id);
        effects.push(Effect::SelectTimezone(self.timezone));
    }

    pub fn set_from_manual_input(&mut self, lat: f64, lon: f64) -> Vec<Effect> {
        match Coordinate::new(lat, lon) {
            Ok(coordinate) => {
                info!("Coordinates entered: {}", coordinate);
                self.coordinate = coordinate;
                vec![
                    Effect::ShowCoordinate(coordinate),
                    Effect::MoveMarker {
                        to: coordinate,
                        pan: true,
                    },
                    Effect::SetCalendarLink(self.calendar_link()),
                    self.lookup_times(),
                    Effect::ClearNotice,
                ]
            }
            Err(err) => {
                warn!("Rejected coordinates {}, {}", lat, lon);
                vec![Effect::ShowNotice(Notice::Alert(err.to_string()))]
            }
        }
    }

    /// No range check: the marker is kept on the globe the way the widget
    /// keeps it there.
    pub fn set_from_marker_drag(&mut self, lat: f64, lon: f64) -> Vec<Effect> {
        let Some(coordinate) = Coordinate::on_globe(lat, lon) else {
            warn!("Ignoring marker drop at {}, {}", lat, lon);
            return Vec::new();
        };
        info!("Marker dragged to {}", coordinate);
        self.coordinate = coordinate;
        vec![
            Effect::ShowCoordinate(coordinate),
            Effect::SetCalendarLink(self.calendar_link()),
            self.lookup_times(),
            Effect::ClearNotice,
        ]
    }

    pub fn set_timezone(&mut self, offset: f64) -> Vec<Effect> {
        match timezone::find_by_offset(offset) {
            Some(entry) => self.apply_timezone(entry),
            None => {
                let err = SyncError::UnknownTimezone(timezone::format_offset(offset));
                vec![Effect::ShowNotice(Notice::Alert(err.to_string()))]
            }
        }
    }

    pub fn select_timezone(&mut self, id: &str) -> Vec<Effect> {
        match timezone::find_by_id(id) {
            Some(entry) => self.apply_timezone(entry),
            None => {
                let err = SyncError::UnknownTimezone(id.to_string());
                vec![Effect::ShowNotice(Notice::Alert(err.to_string()))]
            }
        }
    }

    fn apply_timezone(&mut self, entry: &'static TimezoneEntry) -> Vec<Effect> {
        info!("Timezone selected: {}", entry.id);
        self.timezone = entry;
        vec![
            Effect::SelectTimezone(entry),
            Effect::SetCalendarLink(self.calendar_link()),
            self.lookup_times(),
        ]
    }

    /// Issues a new lookup for the current state. Only the newest ticket's
    /// outcome will be applied.
    pub fn lookup_times(&mut self) -> Effect {
        self.last_ticket += 1;
        let request = LookupRequest {
            ticket: LookupTicket(self.last_ticket),
            query: TimesQuery::new(&self.coordinate, self.timezone),
        };
        debug!("Issuing lookup {:?}", request);
        Effect::Lookup(request)
    }

    /// Applies the outcome of a lookup, or nothing if a newer one was issued.
    pub fn complete_lookup(
        &mut self,
        ticket: LookupTicket,
        outcome: Result<TimesResponse, AppError>,
    ) -> Vec<Effect> {
        if ticket != LookupTicket(self.last_ticket) {
            debug!("Discarding stale lookup {:?}", ticket);
            return Vec::new();
        }

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                warn!("Time lookup failed: {}", err);
                return vec![Effect::ShowNotice(Notice::Alert(
                    SyncError::LookupFailed.to_string(),
                ))];
            }
        };

        match TimeLookupResult::classify(&response) {
            Some(TimeLookupResult::Error) => vec![Effect::ShowNotice(Notice::Alert(
                SyncError::TimesUnavailable.to_string(),
            ))],
            Some(result) => match result.display_texts() {
                Some((rise, set)) => vec![
                    Effect::ShowTimes {
                        rise: rise.to_string(),
                        set: set.to_string(),
                    },
                    Effect::ClearNotice,
                ],
                None => Vec::new(),
            },
            None => {
                warn!("Unrecognised time response: {:?}", response);
                Vec::new()
            }
        }
    }
}
