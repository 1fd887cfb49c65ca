use thiserror::Error;

/// Infrastructure errors raised while talking to the outside world
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when a required parameter is missing from a command or configuration
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// Error when user input cannot be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error when API request fails
    #[error("API request failed: {0}")]
    ApiRequestFailed(String),

    /// Error when parsing API response
    #[error("Failed to parse API response: {0}")]
    ResponseParseError(String),

    /// Error when the map widget cannot be created
    #[error("Map widget error: {0}")]
    MapError(String),

    /// Wrapper for reqwest errors
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Problems surfaced to the user through the notice slot.
///
/// The `Display` text of each variant is the exact message shown.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    #[error("Geolocation is not supported on this system. Using default location.")]
    GeolocationUnsupported,

    #[error(
        "Location access denied. Please enable location permissions or enter coordinates manually."
    )]
    GeolocationDenied,

    #[error("Location information is unavailable. Please enter coordinates manually.")]
    GeolocationUnavailable,

    #[error("Location request timed out. Using default location.")]
    GeolocationTimeout,

    #[error("An unknown error occurred while getting your location.")]
    GeolocationUnknown,

    #[error("Unable to get your location.")]
    GeolocationFailed,

    #[error("Invalid coordinates. Latitude: -90 to 90, Longitude: -180 to 180")]
    InvalidCoordinates,

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Unable to calculate moon times for this location.")]
    TimesUnavailable,

    #[error("Failed to get moon rise/set times. Please try again.")]
    LookupFailed,

    #[error("Failed to load map. Please refresh the page.")]
    MapUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            SyncError::InvalidCoordinates.to_string(),
            "Invalid coordinates. Latitude: -90 to 90, Longitude: -180 to 180"
        );
        assert_eq!(
            SyncError::UnknownTimezone("Mars/Olympus".into()).to_string(),
            "Unknown timezone: Mars/Olympus"
        );
    }

    #[test]
    fn parse_error_names_the_response() {
        let app = AppError::ResponseParseError("expected value".into());
        assert_eq!(
            app.to_string(),
            "Failed to parse API response: expected value"
        );
    }
}
