use tracing::{debug, info};

use crate::error::AppError;
use crate::geo::Coordinate;

pub const DEFAULT_ZOOM: u8 = 8;
pub const MARKER_TITLE: &str = "Move marker to your location.";

/// How the map and its marker are first shown.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: Coordinate,
    pub zoom: u8,
    pub marker_title: String,
    pub marker_draggable: bool,
}

impl MapOptions {
    pub fn centered_on(center: Coordinate) -> Self {
        Self {
            center,
            zoom: DEFAULT_ZOOM,
            marker_title: MARKER_TITLE.to_string(),
            marker_draggable: true,
        }
    }
}

/// The map rendering widget. Drag ends are reported back to the controller
/// by whoever drives the widget.
pub trait MapWidget {
    /// Creates the map and its draggable marker.
    fn create(&mut self, options: &MapOptions) -> Result<(), AppError>;

    fn set_marker_position(&mut self, position: Coordinate);

    fn pan_to(&mut self, center: Coordinate);

    /// Lets the widget re-layout after the host surface changed size.
    fn resize(&mut self);

    fn marker_position(&self) -> Option<Coordinate>;
}

/// Headless map for terminals: keeps the marker state and points at an
/// OpenStreetMap view of it.
#[derive(Debug, Default, Clone)]
pub struct TerminalMap {
    options: Option<MapOptions>,
    center: Option<Coordinate>,
    marker: Option<Coordinate>,
}

impl TerminalMap {
    pub fn center(&self) -> Option<Coordinate> {
        self.center
    }

    /// Browser link showing the marker at the current zoom.
    pub fn view_url(&self) -> Option<String> {
        let marker = self.marker?;
        let zoom = self.options.as_ref().map_or(DEFAULT_ZOOM, |o| o.zoom);
        Some(format!(
            "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={zoom}/{lat}/{lon}",
            lat = marker.lat_text(),
            lon = marker.lon_text(),
            zoom = zoom,
        ))
    }
}

impl MapWidget for TerminalMap {
    fn create(&mut self, options: &MapOptions) -> Result<(), AppError> {
        info!(
            "Creating map at {} (zoom {}, draggable marker: {})",
            options.center, options.zoom, options.marker_draggable
        );
        self.center = Some(options.center);
        self.marker = Some(options.center);
        self.options = Some(options.clone());
        Ok(())
    }

    fn set_marker_position(&mut self, position: Coordinate) {
        debug!("Marker moved to {}", position);
        self.marker = Some(position);
    }

    fn pan_to(&mut self, center: Coordinate) {
        debug!("Map panned to {}", center);
        self.center = Some(center);
    }

    fn resize(&mut self) {
        debug!("Map resize requested");
    }

    fn marker_position(&self) -> Option<Coordinate> {
        self.marker
    }
}
