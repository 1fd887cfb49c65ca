//! Runs controller effects against the map, the page and the network.

use std::collections::VecDeque;

use futures::stream::{self, StreamExt};
use tracing::{Instrument, debug, error, span, warn};

use crate::controller::{Effect, Event, LookupRequest, SyncController};
use crate::error::SyncError;
use crate::geo::{Coordinate, PositionOptions};
use crate::geo_location::Geolocator;
use crate::map::{MapOptions, MapWidget};
use crate::notice::Notice;
use crate::page::{FieldId, Page};
use crate::times::TimeSource;

/// Lookups allowed in flight at once
const MAX_IN_FLIGHT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapState {
    Uninitialized,
    Ready,
    Failed,
}

/// Work an effect leaves for the async part of the session.
enum Pending {
    Locate(PositionOptions),
    Lookup(LookupRequest),
}

/// The map widget plus the page: everything effects are drawn on.
#[derive(Debug)]
pub struct View<M> {
    map: M,
    page: Page,
    map_state: MapState,
}

impl<M: MapWidget> View<M> {
    pub fn new(map: M) -> Self {
        Self {
            map,
            page: Page::default(),
            map_state: MapState::Uninitialized,
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_state == MapState::Ready
    }

    /// Creates the map on first call only.
    fn init_map(&mut self, options: &MapOptions) {
        if self.map_state != MapState::Uninitialized {
            warn!("Map already initialised, ignoring");
            return;
        }
        match self.map.create(options) {
            Ok(()) => self.map_state = MapState::Ready,
            Err(e) => {
                error!("Failed to create map: {}", e);
                self.map_state = MapState::Failed;
                self.page
                    .show_notice(Notice::Alert(SyncError::MapUnavailable.to_string()));
            }
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Vec<Pending> {
        let mut pending = Vec::new();
        for effect in effects {
            match effect {
                Effect::ShowCoordinate(coordinate) => {
                    self.page.set_field(FieldId::Lat, coordinate.lat_text());
                    self.page.set_field(FieldId::Lon, coordinate.lon_text());
                }
                Effect::SelectTimezone(entry) => self.page.select_timezone(entry),
                Effect::MoveMarker { to, pan } => {
                    if self.is_map_ready() {
                        self.map.set_marker_position(to);
                        if pan {
                            self.map.pan_to(to);
                        }
                    }
                }
                Effect::SetCalendarLink(href) => self.page.set_calendar_href(href),
                Effect::RequestLocation(options) => pending.push(Pending::Locate(options)),
                Effect::Lookup(request) => pending.push(Pending::Lookup(request)),
                Effect::ShowTimes { rise, set } => {
                    self.page.set_field(FieldId::Rise, rise);
                    self.page.set_field(FieldId::Set, set);
                }
                Effect::ShowNotice(notice) => self.page.show_notice(notice),
                Effect::ClearNotice => self.page.clear_notice(),
                Effect::ResizeMap => {
                    if self.is_map_ready() {
                        self.map.resize();
                    }
                }
            }
        }
        pending
    }
}

/// One user's session: controller state, the view, and the two remote
/// collaborators.
pub struct Session<M, S, G> {
    controller: SyncController,
    view: View<M>,
    source: S,
    locator: G,
}

impl<M, S, G> Session<M, S, G>
where
    M: MapWidget,
    S: TimeSource,
    G: Geolocator,
{
    pub fn new(controller: SyncController, map: M, source: S, locator: G) -> Self {
        Self {
            controller,
            view: View::new(map),
            source,
            locator,
        }
    }

    pub fn controller(&self) -> &SyncController {
        &self.controller
    }

    pub fn view(&self) -> &View<M> {
        &self.view
    }

    pub fn page(&self) -> &Page {
        self.view.page()
    }

    /// Creates the map at the current coordinate, then asks for the location.
    pub async fn start(&mut self) {
        self.init_map();
        self.dispatch(Event::Refresh).await;
    }

    /// Call-once; later calls are logged and ignored.
    pub fn init_map(&mut self) {
        let options = MapOptions::centered_on(self.controller.coordinate());
        self.view.init_map(&options);
    }

    /// Drops the marker at a new spot the way a user drag would: the widget
    /// moves first, then the controller hears about it.
    pub async fn drag_marker(&mut self, lat: f64, lon: f64) {
        if let Some(dropped) = self.place_marker(lat, lon) {
            self.dispatch(dropped.into()).await;
        }
    }

    /// Moves the widget's marker only and returns where it landed, or `None`
    /// when the point cannot be shown. Callers must follow up with
    /// [`Event::MarkerDragged`].
    pub fn place_marker(&mut self, lat: f64, lon: f64) -> Option<Coordinate> {
        let Some(dropped) = Coordinate::on_globe(lat, lon) else {
            warn!("Marker cannot be dropped at {}, {}", lat, lon);
            return None;
        };
        if self.view.is_map_ready() {
            self.view.map.set_marker_position(dropped);
        }
        Some(dropped)
    }

    pub async fn dispatch(&mut self, event: Event) {
        self.dispatch_all(vec![event]).await;
    }

    /// Handles events in order. Lookups they issue run concurrently once all
    /// events are handled; only the newest one can update the page.
    pub async fn dispatch_all(&mut self, events: Vec<Event>) {
        let count = events.len();
        self.process(events)
            .instrument(span!(tracing::Level::INFO, "dispatch", events = count))
            .await;
    }

    async fn process(&mut self, events: Vec<Event>) {
        let mut queue: VecDeque<Event> = events.into();
        let mut lookups = Vec::new();

        while let Some(event) = queue.pop_front() {
            debug!("Handling {:?}", event);
            let effects = self.controller.handle(event);
            for pending in self.view.apply(effects) {
                match pending {
                    Pending::Locate(options) => {
                        let result = self.locator.current_position(&options).await;
                        queue.push_back(Event::Geolocated(result));
                    }
                    Pending::Lookup(request) => lookups.push(request),
                }
            }
        }

        self.run_lookups(lookups).await;
    }

    async fn run_lookups(&mut self, lookups: Vec<LookupRequest>) {
        if lookups.is_empty() {
            return;
        }

        let source = &self.source;
        let mut completions = stream::iter(lookups)
            .map(move |request| async move {
                let outcome = source.get_times(&request.query).await;
                (request.ticket, outcome)
            })
            .buffer_unordered(MAX_IN_FLIGHT);

        while let Some((ticket, outcome)) = completions.next().await {
            let effects = self.controller.complete_lookup(ticket, outcome);
            // completions never ask for more work
            let leftover = self.view.apply(effects);
            debug_assert!(leftover.is_empty());
        }
    }
}
