// Module containing the wire format of the time endpoint
mod response;

use std::future::Future;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::error::AppError;
use crate::geo::Coordinate;
use crate::timezone::TimezoneEntry;

pub use response::TimesResponse;

/// Default server hosting `gettimes` and `calendar`
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8484/";

pub const ALWAYS_ABOVE_TEXT: &str = "Always above horizon";
pub const ALWAYS_BELOW_TEXT: &str = "Always below horizon";

/// Marker the server puts in `Rise`/`Set` when it cannot compute times
const SERVER_ERROR_MARKER: &str = "error";

/// Query parameters of one time lookup, already formatted for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesQuery {
    pub lon: String,
    pub lat: String,
    pub zon: String,
}

impl TimesQuery {
    pub fn new(coordinate: &Coordinate, timezone: &TimezoneEntry) -> Self {
        Self {
            lon: coordinate.lon_text(),
            lat: coordinate.lat_text(),
            zon: timezone.offset_text(),
        }
    }

    /// Relative path of the lookup, e.g. `gettimes?lon=144.0000&lat=-37.0000&zon=10`.
    pub fn path(&self) -> String {
        format!("gettimes?lon={}&lat={}&zon={}", self.lon, self.lat, self.zon)
    }
}

/// Relative target of the calendar page for a coordinate and zone.
pub fn calendar_link(coordinate: &Coordinate, timezone: &TimezoneEntry) -> String {
    format!(
        "calendar?lat={}&lon={}&zon={}",
        coordinate.lat_text(),
        coordinate.lon_text(),
        timezone.offset_text()
    )
}

/// What a successful lookup means for the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeLookupResult {
    Times { rise: String, set: String },
    AlwaysAbove,
    AlwaysBelow,
    /// The server reported it could not compute times
    Error,
}

impl TimeLookupResult {
    /// Classifies a response body. Returns `None` for a body that matches none
    /// of the known shapes.
    pub fn classify(response: &TimesResponse) -> Option<Self> {
        let rise = response.rise.as_deref().unwrap_or_default();
        let set = response.set.as_deref().unwrap_or_default();

        if rise == SERVER_ERROR_MARKER || set == SERVER_ERROR_MARKER {
            Some(Self::Error)
        } else if response.always_above {
            Some(Self::AlwaysAbove)
        } else if response.always_below {
            Some(Self::AlwaysBelow)
        } else if !rise.is_empty() && !set.is_empty() {
            Some(Self::Times {
                rise: rise.to_string(),
                set: set.to_string(),
            })
        } else {
            None
        }
    }

    /// Texts for the rise and set fields, if this result updates them.
    pub fn display_texts(&self) -> Option<(&str, &str)> {
        match self {
            Self::Times { rise, set } => Some((rise.as_str(), set.as_str())),
            Self::AlwaysAbove => Some((ALWAYS_ABOVE_TEXT, ALWAYS_ABOVE_TEXT)),
            Self::AlwaysBelow => Some((ALWAYS_BELOW_TEXT, ALWAYS_BELOW_TEXT)),
            Self::Error => None,
        }
    }
}

/// Anything that can answer a time lookup.
pub trait TimeSource {
    fn get_times(
        &self,
        query: &TimesQuery,
    ) -> impl Future<Output = Result<TimesResponse, AppError>>;
}

/// Fetches rise and set times from the moon server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTimeSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTimeSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl TimeSource for HttpTimeSource {
    async fn get_times(&self, query: &TimesQuery) -> Result<TimesResponse, AppError> {
        info!(
            "Fetching moon times for lat={} lon={} zon={}",
            query.lat, query.lon, query.zon
        );

        let url = format!("{}{}", self.base_url, query.path());
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            let body = response.bytes().await?;
            let times_response: TimesResponse = serde_json::from_slice(&body).map_err(|e| {
                error!("Unreadable moon times body: {}", e);
                AppError::ResponseParseError(e.to_string())
            })?;
            debug!("Moon times fetched successfully: {:?}", times_response);
            Ok(times_response)
        } else {
            error!("Failed to fetch moon times: {}", response.status());
            Err(AppError::ApiRequestFailed(format!(
                "Failed to fetch moon times: {}",
                response.status()
            )))
        }
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timezone;

    fn parse(body: &str) -> TimesResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn query_uses_four_decimals_and_short_offset() {
        let coordinate = Coordinate::new(-37.81362, 144.96308).unwrap();
        let zone = timezone::find_by_id("Asia/Kolkata").unwrap();
        let query = TimesQuery::new(&coordinate, zone);
        assert_eq!(query.path(), "gettimes?lon=144.9631&lat=-37.8136&zon=5.5");
    }

    #[test]
    fn calendar_link_encodes_state() {
        let zone = timezone::find_by_id("Australia/Sydney").unwrap();
        assert_eq!(
            calendar_link(&Coordinate::DEFAULT, zone),
            "calendar?lat=-37.0000&lon=144.0000&zon=10"
        );
    }

    #[test]
    fn classifies_times() {
        let body = parse(r#"{"Rise":"6:15 AM","Set":"7:42 PM"}"#);
        assert_eq!(
            TimeLookupResult::classify(&body),
            Some(TimeLookupResult::Times {
                rise: "6:15 AM".into(),
                set: "7:42 PM".into()
            })
        );
    }

    #[test]
    fn classifies_always_flags() {
        let above = parse(r#"{"Rise":"","Set":"","AlwaysAbove":true,"AlwaysBelow":false}"#);
        assert_eq!(
            TimeLookupResult::classify(&above),
            Some(TimeLookupResult::AlwaysAbove)
        );
        let below = parse(r#"{"AlwaysBelow":true}"#);
        assert_eq!(
            TimeLookupResult::classify(&below),
            Some(TimeLookupResult::AlwaysBelow)
        );
        assert_eq!(
            TimeLookupResult::AlwaysBelow.display_texts(),
            Some((ALWAYS_BELOW_TEXT, ALWAYS_BELOW_TEXT))
        );
    }

    #[test]
    fn error_marker_beats_flags() {
        let body = parse(r#"{"Rise":"error","Set":"error","AlwaysAbove":true}"#);
        assert_eq!(
            TimeLookupResult::classify(&body),
            Some(TimeLookupResult::Error)
        );
        assert_eq!(TimeLookupResult::Error.display_texts(), None);
    }

    #[test]
    fn incomplete_body_is_unclassified() {
        assert_eq!(TimeLookupResult::classify(&parse(r#"{"Rise":"5:00 AM"}"#)), None);
        assert_eq!(TimeLookupResult::classify(&parse("{}")), None);
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        assert_eq!(normalize_base_url("http://moon.test"), "http://moon.test/");
        assert_eq!(normalize_base_url("http://moon.test/app/"), "http://moon.test/app/");
    }
}
