//! Parsing of the interactive command line.

use crate::controller::Event;
use crate::error::{AppError, SyncError};

pub const HELP: &str = "\
Commands:
  <lat> <lon>        set coordinates (same as `set`)
  set <lat> <lon>    set coordinates
  drag <lat> <lon>   drop the map marker at a position
  tz <offset|zone>   select a timezone, e.g. `tz 5.5` or `tz Europe/Paris`
  zones              list selectable timezones
  refresh            locate again
  resize             re-layout the map
  show               print the current page
  help               this text
  exit               quit
Several commands can be joined with `;`.";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(Event),
    Drag { lat: f64, lon: f64 },
    Zones,
    Show,
    Help,
    Exit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, AppError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(AppError::MissingParameter("command".to_string())),
            ["exit" | "quit"] => Ok(Command::Exit),
            ["help" | "?"] => Ok(Command::Help),
            ["show"] => Ok(Command::Show),
            ["zones"] => Ok(Command::Zones),
            ["refresh"] => Ok(Command::Event(Event::Refresh)),
            ["resize"] => Ok(Command::Event(Event::Resize)),
            ["tz", zone] => Ok(Command::Event(match zone.parse::<f64>() {
                Ok(offset) => Event::TimezoneOffset(offset),
                Err(_) => Event::TimezoneId(zone.to_string()),
            })),
            ["drag", lat, lon] => {
                let (lat, lon) = parse_pair(lat, lon)?;
                Ok(Command::Drag { lat, lon })
            }
            ["set", lat, lon] | [lat, lon] => {
                let (lat, lon) = parse_pair(lat, lon)?;
                Ok(Command::Event(Event::ManualInput { lat, lon }))
            }
            _ => Err(AppError::InvalidInput(format!(
                "unknown command `{}`, try `help`",
                line.trim()
            ))),
        }
    }

    /// Splits a line on `;` and parses each part.
    pub fn parse_line(line: &str) -> Result<Vec<Self>, AppError> {
        line.split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Self::parse)
            .collect()
    }
}

fn parse_pair(lat: &str, lon: &str) -> Result<(f64, f64), AppError> {
    // strings that are not numbers are out of range by definition
    let invalid = || AppError::InvalidInput(SyncError::InvalidCoordinates.to_string());
    let number = |text: &str| {
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(invalid)
    };
    Ok((number(lat.trim_end_matches(','))?, number(lon)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_pair_is_manual_input() {
        assert_eq!(
            Command::parse("-37.81 144.96").unwrap(),
            Command::Event(Event::ManualInput {
                lat: -37.81,
                lon: 144.96
            })
        );
        assert_eq!(
            Command::parse("set 1, 2").unwrap(),
            Command::Event(Event::ManualInput { lat: 1.0, lon: 2.0 })
        );
    }

    #[test]
    fn tz_accepts_offset_or_id() {
        assert_eq!(
            Command::parse("tz 5.75").unwrap(),
            Command::Event(Event::TimezoneOffset(5.75))
        );
        assert_eq!(
            Command::parse("tz Asia/Tokyo").unwrap(),
            Command::Event(Event::TimezoneId("Asia/Tokyo".into()))
        );
    }

    #[test]
    fn non_numeric_coordinates_are_invalid() {
        let err = Command::parse("drag north east").unwrap_err();
        assert!(err.to_string().contains("Invalid coordinates"));
    }

    #[test]
    fn nan_and_infinity_are_not_coordinates() {
        for line in ["drag nan nan", "drag 1 inf", "set NaN 0", "-infinity 2"] {
            let err = Command::parse(line).unwrap_err();
            assert!(err.to_string().contains("Invalid coordinates"), "{}", line);
        }
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert!(matches!(
            Command::parse("dance"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(Command::parse("   ").is_err());
    }

    #[test]
    fn line_splits_on_semicolons() {
        let commands = Command::parse_line("drag 1 2; tz 9.5 ;").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Drag { lat: 1.0, lon: 2.0 },
                Command::Event(Event::TimezoneOffset(9.5)),
            ]
        );
    }
}
