use std::time::Duration;

use clap::Parser;

use crate::error::AppError;
use crate::geo::Position;
use crate::times::DEFAULT_SERVER_URL;

/// Command-line interface for moonsync
/// Keeps a map marker, coordinates and timezone in sync and shows moonrise/moonset
#[derive(Parser, Debug, Clone)]
#[command(
    name = "moonsync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Look up moonrise and moonset times for a location",
    long_about = None
)]
pub struct Config {
    /// Base URL of the server providing `gettimes` and `calendar`
    #[arg(long, env = "MOONSYNC_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// API key for IP based location lookups
    #[arg(long, env = "IP_GEOLOCATION_API_KEY", hide_env_values = true)]
    pub geolocation_api_key: Option<String>,

    /// Fixed latitude to report instead of locating by IP
    #[arg(long, env = "MOONSYNC_LAT", allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Fixed longitude to report instead of locating by IP
    #[arg(long, env = "MOONSYNC_LON", allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, env = "MOONSYNC_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Zone identifier to use instead of the TZ environment variable
    #[arg(long = "zone")]
    pub zone: Option<String>,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Position from `--lat`/`--lon`, if both were given.
    pub fn fixed_position(&self) -> Option<Position> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Position::new(lat, lon)),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.server_url.trim().is_empty() {
            return Err(AppError::MissingParameter("server URL".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidInput(
                "timeout must be at least one second".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_server() {
        let config = Config::try_parse_from(["moonsync"]).unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(config.timeout_secs));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn fixed_position_needs_both_axes() {
        let config =
            Config::try_parse_from(["moonsync", "--lat", "-37.8", "--lon", "144.9"]).unwrap();
        assert_eq!(config.fixed_position(), Some(Position::new(-37.8, 144.9)));

        assert!(Config::try_parse_from(["moonsync", "--lat", "10"]).is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = Config::try_parse_from([
            "moonsync",
            "--server-url",
            "http://moon.test",
            "--timeout-secs",
            "0",
        ])
        .unwrap();
        assert!(matches!(config.validate(), Err(AppError::InvalidInput(_))));
    }
}
