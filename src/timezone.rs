// Static zone table
mod table;

use std::env;
use std::fmt;

use chrono::{Local, Offset};
use tracing::debug;

pub use table::TIMEZONES;

/// Offsets closer than this are treated as the same zone offset
const OFFSET_TOLERANCE_HOURS: f64 = 0.1;

/// A selectable timezone: IANA identifier, display label and UTC offset in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimezoneEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub offset: f64,
}

impl TimezoneEntry {
    /// Offset as sent in queries and links: `10`, `-3.5`, `5.75`.
    pub fn offset_text(&self) -> String {
        format_offset(self.offset)
    }
}

impl fmt::Display for TimezoneEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Formats an offset in its shortest decimal form.
pub fn format_offset(offset: f64) -> String {
    // f64's Display already drops a trailing ".0"
    format!("{}", offset)
}

/// The zone the host environment runs in.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalZone {
    /// IANA identifier, when the environment exposes one
    pub id: Option<String>,
    /// Current UTC offset in hours
    pub offset_hours: f64,
}

impl LocalZone {
    pub fn new(id: Option<&str>, offset_hours: f64) -> Self {
        Self {
            id: id.map(str::to_string),
            offset_hours,
        }
    }

    /// Reads the zone identifier from `TZ`, falling back to the zone the
    /// system is configured with, and the offset from the system clock.
    pub fn detect() -> Self {
        let id = env::var("TZ")
            .ok()
            .and_then(|value| zone_id_from_tz(&value))
            .or_else(system_zone_id);
        let seconds = Local::now().offset().fix().local_minus_utc();
        let zone = Self {
            id,
            offset_hours: f64::from(seconds) / 3600.0,
        };
        debug!("Detected local zone: {:?}", zone);
        zone
    }

    /// Picks the table entry for this zone.
    pub fn resolve(&self) -> &'static TimezoneEntry {
        resolve(self.id.as_deref(), self.offset_hours)
    }
}

fn system_zone_id() -> Option<String> {
    iana_time_zone::get_timezone()
        .map_err(|e| debug!("System zone not available: {}", e))
        .ok()
}

/// `TZ` may hold a path-like zone name (`:Europe/Paris`) or a POSIX rule
/// (`AEST-10`); only the former names a zone.
fn zone_id_from_tz(value: &str) -> Option<String> {
    let value = value.trim().trim_start_matches(':');
    if value.is_empty() || !value.contains('/') {
        return None;
    }
    // "/usr/share/zoneinfo/Europe/Paris" style
    let id = value
        .split_once("zoneinfo/")
        .map(|(_, rest)| rest)
        .unwrap_or(value);
    Some(id.to_string())
}

/// Selects a table entry: exact identifier match first, then the first entry
/// with a matching offset, then the first entry.
pub fn resolve(zone_id: Option<&str>, offset_hours: f64) -> &'static TimezoneEntry {
    zone_id
        .and_then(find_by_id)
        .or_else(|| find_by_offset(offset_hours))
        .unwrap_or(&TIMEZONES[0])
}

pub fn find_by_id(id: &str) -> Option<&'static TimezoneEntry> {
    TIMEZONES.iter().find(|tz| tz.id == id)
}

pub fn find_by_offset(offset_hours: f64) -> Option<&'static TimezoneEntry> {
    TIMEZONES
        .iter()
        .find(|tz| (tz.offset - offset_hours).abs() < OFFSET_TOLERANCE_HOURS)
}
