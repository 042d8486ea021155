// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Trip Request Assembly
//!
//! The single entry point turning a trip-planning intent into a complete
//! outbound request descriptor. Pure and single-shot: no retries, no
//! partial state, no I/O. The HTTP call itself lives in [`crate::client`].

use chrono::{DateTime, Local};

use crate::constraints::{compile, ConstraintQuery};
use crate::errors::PlannerError;
use crate::models::{Coordinate, TransportMode};
use crate::preferences::{active_modes, ModePreference, RangeConstraint};

/// Query parameter names understood by the routing backend.
pub mod params {
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const FROM: &str = "fromPlace";
    pub const TO: &str = "toPlace";
    pub const MODE: &str = "mode";
    pub const CONSTRAINT: &str = "constraint";
}

/// A fully assembled route planning request. Immutable once built.
#[derive(Debug, Clone)]
pub struct TripRequest {
    pub depart_at: DateTime<Local>,
    pub origin: Coordinate,
    pub destination: Coordinate,
    /// Active modes, de-duplicated, in preference order
    pub modes: Vec<TransportMode>,
    /// Compiled constraint tree; `None` means the parameter is omitted
    pub constraints: Option<ConstraintQuery>,
}

impl TripRequest {
    /// Departure date as `MM-dd-yyyy`.
    pub fn date_param(&self) -> String {
        self.depart_at.format("%m-%d-%Y").to_string()
    }

    /// Departure time as `hh:mma` (12-hour, AM/PM).
    pub fn time_param(&self) -> String {
        self.depart_at.format("%I:%M%p").to_string()
    }

    /// Comma-joined traverse-mode tokens, following `modes` order.
    pub fn mode_param(&self) -> String {
        self.modes
            .iter()
            .map(|mode| mode.otp_token())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// JSON-encoded constraint document, or `None` when no constraint
    /// qualified during compilation.
    pub fn constraint_param(&self) -> Result<Option<String>, PlannerError> {
        match &self.constraints {
            None => Ok(None),
            Some(query) => Ok(Some(serde_json::to_string(query)?)),
        }
    }

    /// All query pairs in the order the backend expects. The `constraint`
    /// pair is appended only when a tree was compiled.
    pub fn query_pairs(&self) -> Result<Vec<(&'static str, String)>, PlannerError> {
        let mut pairs = vec![
            (params::DATE, self.date_param()),
            (params::TIME, self.time_param()),
            (params::TO, self.destination.to_param()),
            (params::FROM, self.origin.to_param()),
            (params::MODE, self.mode_param()),
        ];
        if let Some(constraint) = self.constraint_param()? {
            pairs.push((params::CONSTRAINT, constraint));
        }
        Ok(pairs)
    }
}

/// Builds the outbound request for one planning invocation.
///
/// Fails with [`PlannerError::MissingLocation`] when either endpoint is
/// unresolved; no partial request is produced. Active modes come from the
/// mode preferences; the constraint tree is compiled over exactly those
/// modes.
pub fn build_trip_request(
    depart_at: DateTime<Local>,
    origin: Option<Coordinate>,
    destination: Option<Coordinate>,
    preferences: &[ModePreference],
    ranges: &[RangeConstraint],
) -> Result<TripRequest, PlannerError> {
    let (origin, destination) = match (origin, destination) {
        (Some(origin), Some(destination)) => (origin, destination),
        _ => return Err(PlannerError::MissingLocation),
    };

    let modes = active_modes(preferences);
    let constraints = compile(ranges, &modes);

    Ok(TripRequest {
        depart_at,
        origin,
        destination,
        modes,
        constraints,
    })
}
