// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Healthnav Planner
//!
//! Trip planning client for health-aware multimodal navigation on an
//! OpenTripPlanner-compatible backend.
//!
//! The crate turns user-facing routing preferences (which transport modes
//! are enabled, how far the user wants to walk or cycle) into a complete
//! outbound routing request: active mode list, distance constraint tree,
//! and the query parameters the backend expects. An async HTTP client
//! submits the request and decodes the returned itinerary plan.
//!
//! ## Architecture
//!
//! - **models**: transport modes, coordinates and the plan response
//! - **preferences**: mode toggles and per-mode distance ranges
//! - **tuning**: automatic range tuning around a preferred mode
//! - **constraints**: compilation of ranges into the wire constraint tree
//! - **trip**: request assembly and parameter rendering
//! - **config** / **client**: backend endpoint and HTTP transport
//!
//! All preference and constraint operations are pure transforms over
//! caller-owned snapshots; nothing in the core holds shared mutable state.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Local;
//! use healthnav_planner::models::Coordinate;
//! use healthnav_planner::preferences::{default_mode_preferences, ensure_range_constraints, active_modes};
//! use healthnav_planner::trip::build_trip_request;
//!
//! let preferences = default_mode_preferences();
//! let ranges = ensure_range_constraints(Vec::new(), &active_modes(&preferences));
//!
//! let request = build_trip_request(
//!     Local::now(),
//!     Some(Coordinate::new(48.137154, 11.576124)),
//!     Some(Coordinate::new(48.264957, 11.671208)),
//!     &preferences,
//!     &ranges,
//! )?;
//! assert_eq!(request.mode_param(), "WALK, BICYCLE, TRANSIT");
//! # Ok::<(), healthnav_planner::errors::PlannerError>(())
//! ```

/// Transport modes, coordinates and plan response models
pub mod models;

/// Mode toggles and distance range preferences
pub mod preferences;

/// Automatic range tuning around a preferred mode
pub mod tuning;

/// Constraint tree wire model and compiler
pub mod constraints;

/// Trip request assembly
pub mod trip;

/// Backend endpoint configuration
pub mod config;

/// Async HTTP client for the routing backend
pub mod client;

/// Error taxonomy
pub mod errors;
