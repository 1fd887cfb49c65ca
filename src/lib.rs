//! Keeps a map marker, coordinate fields, a timezone selection and a calendar
//! link in sync, and looks up moonrise/moonset times for the chosen place.

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod geo;
pub mod geo_location;
pub mod map;
pub mod notice;
pub mod page;
pub mod session;
pub mod timezone;
pub mod times;
