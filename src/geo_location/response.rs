/// Response structure for the IPGeolocation lookup API
/// Only the fields needed to place the marker are decoded
#[derive(serde::Deserialize, Debug)]
pub struct IpGeoResponse {
    /// Latitude in decimal degrees, sent as a string (e.g. "-37.81400")
    pub latitude: String,
    /// Longitude in decimal degrees, sent as a string
    pub longitude: String,
}
