use std::fmt;
use std::time::Duration;

use crate::error::SyncError;

/// A point on the globe in decimal degrees, rounded to 4 decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub const DEFAULT: Coordinate = Coordinate {
        latitude: -37.0,
        longitude: 144.0,
    };

    /// Builds a coordinate after checking both ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SyncError> {
        if !is_valid_latitude(latitude) || !is_valid_longitude(longitude) {
            return Err(SyncError::InvalidCoordinates);
        }
        Ok(Self::rounded(latitude, longitude))
    }

    /// Places a point the way the map widget does: latitude is clamped to
    /// the poles and longitude wraps around the antimeridian. Non-finite
    /// values have no place on the map.
    pub fn on_globe(latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        let longitude = if is_valid_longitude(longitude) {
            longitude
        } else {
            (longitude + 180.0).rem_euclid(360.0) - 180.0
        };
        Some(Self::rounded(latitude.clamp(-90.0, 90.0), longitude))
    }

    fn rounded(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: round4(latitude),
            longitude: round4(longitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude as shown in the input field and sent in queries.
    pub fn lat_text(&self) -> String {
        format!("{:.4}", self.latitude)
    }

    /// Longitude as shown in the input field and sent in queries.
    pub fn lon_text(&self) -> String {
        format!("{:.4}", self.longitude)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat_text(), self.lon_text())
    }
}

fn is_valid_latitude(value: f64) -> bool {
    value.is_finite() && (-90.0..=90.0).contains(&value)
}

fn is_valid_longitude(value: f64) -> bool {
    value.is_finite() && (-180.0..=180.0).contains(&value)
}

fn round4(value: f64) -> f64 {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // -0.0 would print as "-0.0000"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// A fix reported by a location provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Options handed to the location provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached fix the provider may return; zero disables the cache
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}

/// Why a location provider could not produce a fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
    /// A provider code outside the known set
    Other(u16),
}

impl GeolocationError {
    /// Maps the numeric codes used by location APIs (0 unknown, 1 denied,
    /// 2 unavailable, 3 timeout).
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            other => Self::Other(other),
        }
    }
}

impl From<GeolocationError> for SyncError {
    fn from(err: GeolocationError) -> Self {
        match err {
            GeolocationError::Unsupported => SyncError::GeolocationUnsupported,
            GeolocationError::PermissionDenied => SyncError::GeolocationDenied,
            GeolocationError::PositionUnavailable => SyncError::GeolocationUnavailable,
            GeolocationError::Timeout => SyncError::GeolocationTimeout,
            GeolocationError::Unknown => SyncError::GeolocationUnknown,
            GeolocationError::Other(_) => SyncError::GeolocationFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_four_decimals() {
        let c = Coordinate::new(-37.813_628, 144.963_058).unwrap();
        assert_eq!(c.latitude(), -37.8136);
        assert_eq!(c.longitude(), 144.9631);
        assert_eq!(c.lat_text(), "-37.8136");
        assert_eq!(c.lon_text(), "144.9631");
    }

    #[test]
    fn accepts_range_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert_eq!(
            Coordinate::new(90.0001, 0.0),
            Err(SyncError::InvalidCoordinates)
        );
        assert_eq!(
            Coordinate::new(0.0, -180.5),
            Err(SyncError::InvalidCoordinates)
        );
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn globe_clamps_latitude_and_wraps_longitude() {
        let c = Coordinate::on_globe(95.0, 200.0).unwrap();
        assert_eq!(c.lat_text(), "90.0000");
        assert_eq!(c.lon_text(), "-160.0000");
        let c = Coordinate::on_globe(-91.5, -190.0).unwrap();
        assert_eq!(c, Coordinate::new(-90.0, 170.0).unwrap());
        assert_eq!(
            Coordinate::on_globe(12.5, 180.0),
            Coordinate::new(12.5, 180.0).ok()
        );
    }

    #[test]
    fn globe_has_no_place_for_nan() {
        assert_eq!(Coordinate::on_globe(f64::NAN, f64::NAN), None);
        assert_eq!(Coordinate::on_globe(0.0, f64::INFINITY), None);
    }

    #[test]
    fn negative_zero_is_normalised() {
        let c = Coordinate::rounded(-0.00001, 0.0);
        assert_eq!(c.lat_text(), "0.0000");
    }

    #[test]
    fn default_matches_melbourne_area() {
        let c = Coordinate::default();
        assert_eq!(c.to_string(), "-37.0000, 144.0000");
    }

    #[test]
    fn error_codes_classify() {
        assert_eq!(
            GeolocationError::from_code(1),
            GeolocationError::PermissionDenied
        );
        assert_eq!(GeolocationError::from_code(3), GeolocationError::Timeout);
        assert_eq!(
            SyncError::from(GeolocationError::from_code(42)),
            SyncError::GeolocationFailed
        );
    }

    #[test]
    fn position_options_disable_cache() {
        let options = PositionOptions::default();
        assert!(options.enable_high_accuracy);
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.maximum_age, Duration::ZERO);
    }
}
