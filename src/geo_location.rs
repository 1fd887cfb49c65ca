// Module containing response data structures for IP geolocation
mod response;

use std::future::Future;

use reqwest::StatusCode;
use tracing::{debug, error, info, warn};

use crate::geo::{GeolocationError, Position, PositionOptions};

// API endpoint for the IPGeolocation lookup service
const GEO_LOCATION_ENDPOINT: &str = "https://api.ipgeolocation.io/ipgeo";

/// A provider of the user's current position.
pub trait Geolocator {
    fn current_position(
        &self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Position, GeolocationError>>;
}

/// Locates the machine from its public IP address using the IPGeolocation API.
///
/// IP lookups are never high-accuracy and are not cached, so only the
/// timeout in [`PositionOptions`] is honoured.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl IpGeolocator {
    pub fn new(client: reqwest::Client, api_key: Option<String>) -> Self {
        Self::with_endpoint(client, api_key, GEO_LOCATION_ENDPOINT)
    }

    pub fn with_endpoint(client: reqwest::Client, api_key: Option<String>, endpoint: &str) -> Self {
        Self {
            client,
            api_key,
            endpoint: endpoint.to_string(),
        }
    }
}

impl Geolocator for IpGeolocator {
    /// Fetches the current position for the public IP of this machine.
    ///
    /// # Returns
    /// * `Position` with the coordinates reported by the service
    /// * `Unsupported` when no API key is configured
    /// * `PermissionDenied` when the service rejects the key
    /// * `Timeout` when the request exceeds `options.timeout`
    /// * `PositionUnavailable` for other failures from the service
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Position, GeolocationError> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("No IP geolocation API key configured");
            return Err(GeolocationError::Unsupported);
        };

        info!("Fetching position from IP geolocation");

        // Construct the API URL with query parameters
        let url = format!("{}?apiKey={}&fields=latitude,longitude", self.endpoint, api_key);

        let response = self
            .client
            .get(&url)
            .timeout(options.timeout)
            .send()
            .await
            .map_err(classify_transport_error)?;

        match response.status() {
            status if status.is_success() => {
                let body: response::IpGeoResponse = response
                    .json()
                    .await
                    .map_err(|_| GeolocationError::PositionUnavailable)?;
                debug!("Position fetched successfully: {:?}", body);
                parse_position(&body)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                error!("IP geolocation rejected the API key: {}", response.status());
                Err(GeolocationError::PermissionDenied)
            }
            status => {
                error!("Failed to fetch position: {}", status);
                Err(GeolocationError::PositionUnavailable)
            }
        }
    }
}

fn classify_transport_error(err: reqwest::Error) -> GeolocationError {
    error!("IP geolocation request failed: {}", err);
    if err.is_timeout() {
        GeolocationError::Timeout
    } else {
        GeolocationError::Unknown
    }
}

fn parse_position(body: &response::IpGeoResponse) -> Result<Position, GeolocationError> {
    let latitude = body.latitude.trim().parse::<f64>();
    let longitude = body.longitude.trim().parse::<f64>();
    match (latitude, longitude) {
        (Ok(lat), Ok(lon)) => Ok(Position::new(lat, lon)),
        _ => {
            error!("Unparsable coordinates in response: {:?}", body);
            Err(GeolocationError::PositionUnavailable)
        }
    }
}

/// Reports a configured position, or `Unsupported` when none is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGeolocator {
    position: Option<Position>,
}

impl FixedGeolocator {
    pub fn new(position: Option<Position>) -> Self {
        Self { position }
    }
}

impl Geolocator for FixedGeolocator {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Position, GeolocationError> {
        self.position.ok_or(GeolocationError::Unsupported)
    }
}
