// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core data structures shared across the trip planning client: transport
//! modes, coordinates, and the typed plan response returned by the routing
//! backend.
//!
//! The backend speaks two different mode vocabularies. The serde
//! representation of [`TransportMode`] is the token used inside the JSON
//! constraint payload (`WALK`, `BIKE`, `PUBLIC_TRANSPORT`, `CAR`), while the
//! `mode` query parameter uses the classic OTP traverse-mode tokens exposed
//! through [`TransportMode::otp_token`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A transport mode the user can toggle on for a trip request.
///
/// # Examples
///
/// ```rust
/// use healthnav_planner::models::TransportMode;
///
/// let mode = TransportMode::Transit;
/// assert_eq!(mode.otp_token(), "TRANSIT");
/// assert_eq!(serde_json::to_string(&mode).unwrap(), "\"PUBLIC_TRANSPORT\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    /// Walking
    #[serde(rename = "WALK")]
    Walk,
    /// Cycling
    #[serde(rename = "BIKE")]
    Bicycle,
    /// Public transport (bus, tram, rail, ...)
    #[serde(rename = "PUBLIC_TRANSPORT")]
    Transit,
    /// Private car
    #[serde(rename = "CAR")]
    Car,
}

impl TransportMode {
    /// Token used in the `mode` query parameter of a routing request.
    ///
    /// Distinct from the serialized form used in constraint payloads.
    pub fn otp_token(&self) -> &'static str {
        match self {
            TransportMode::Walk => "WALK",
            TransportMode::Bicycle => "BICYCLE",
            TransportMode::Transit => "TRANSIT",
            TransportMode::Car => "CAR",
        }
    }

    /// Human-readable name for CLI output and logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            TransportMode::Walk => "walk",
            TransportMode::Bicycle => "bike",
            TransportMode::Transit => "public transport",
            TransportMode::Car => "car",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "walk" => Ok(TransportMode::Walk),
            "bike" | "bicycle" => Ok(TransportMode::Bicycle),
            "transit" | "public-transport" => Ok(TransportMode::Transit),
            "car" => Ok(TransportMode::Car),
            other => Err(format!(
                "unknown transport mode '{}' (expected walk, bike, transit or car)",
                other
            )),
        }
    }
}

/// A geographic coordinate (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `"<lat>,<lon>"` form used by the `fromPlace`/`toPlace` parameters.
    pub fn to_param(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

impl FromStr for Coordinate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("expected '<lat>,<lon>', got '{}'", s))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| format!("invalid latitude '{}'", lat))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| format!("invalid longitude '{}'", lon))?;
        Ok(Self { lat, lon })
    }
}

/// Mode attached to a single leg of a returned itinerary.
///
/// Transit legs come back as the concrete carrier (`TRAM`, `BUS`, ...)
/// rather than the generic `TRANSIT` token sent in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LegMode {
    Walk,
    Bicycle,
    Car,
    Tram,
    Subway,
    Rail,
    Bus,
    Transit,
}

/// A named point on a returned itinerary.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    /// Departure time at this place, if the leg timetable provides one
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub departure: Option<DateTime<Utc>>,
    /// Arrival time at this place, if the leg timetable provides one
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub arrival: Option<DateTime<Utc>>,
}

impl Place {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// One leg of an itinerary, covered by a single mode.
#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
    /// Distance covered by this leg in meters
    pub distance: f64,
    pub mode: LegMode,
    pub from_place: Place,
    pub to_place: Place,
    /// Encoded polyline geometry; decoding belongs to the map layer
    pub geometry: String,
    /// Duration in seconds
    pub duration: f64,
}

/// A complete journey option returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct Itinerary {
    /// Total duration in seconds
    pub duration: f64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
    /// Seconds spent walking
    pub walk_time: f64,
    /// Meters covered on foot
    pub walk_distance: f64,
    /// Seconds spent on public transport
    pub transit_time: f64,
    /// Seconds spent waiting for connections
    pub waiting_time: f64,
    /// Elevation gained in meters. The backend misspells this key.
    #[serde(default, rename = "evelation_gained")]
    pub elevation_gained: Option<f64>,
    /// Number of transfers between transit vehicles
    pub transfers: u32,
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// Total distance covered by legs of the given mode, in meters.
    pub fn distance_for(&self, mode: LegMode) -> f64 {
        self.legs
            .iter()
            .filter(|leg| leg.mode == mode)
            .map(|leg| leg.distance)
            .sum()
    }
}

/// Top-level plan response for one trip request.
#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    pub from_place: Place,
    pub to_place: Place,
    pub itineraries: Vec<Itinerary>,
}
