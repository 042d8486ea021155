// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Navigation Preferences
//!
//! Value types for user-facing routing preferences: per-mode toggles and
//! per-mode distance range constraints, plus the pure transforms that
//! operate on them.
//!
//! The preference collections are owned by the caller (typically an
//! application state store). Every operation here takes a snapshot and
//! returns a new collection; publishing the result is the caller's job.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::TransportMode;

/// Comparison operator attached to a single distance bound.
///
/// The serialized form is the backend's condition operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundOperator {
    #[serde(rename = "MinimumValue")]
    Minimum,
    #[serde(rename = "MaximumValue")]
    Maximum,
    #[serde(rename = "ExactValue")]
    Exact,
}

/// A user-facing toggle enabling or disabling one transport mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModePreference {
    /// Stable in-memory identity; not persisted, regenerated on load.
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub mode: TransportMode,
    pub enabled: bool,
}

impl ModePreference {
    pub fn new(mode: TransportMode, enabled: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            enabled,
        }
    }
}

/// Onboarding defaults: walking, cycling and public transport on, car off.
pub fn default_mode_preferences() -> Vec<ModePreference> {
    vec![
        ModePreference::new(TransportMode::Walk, true),
        ModePreference::new(TransportMode::Bicycle, true),
        ModePreference::new(TransportMode::Transit, true),
        ModePreference::new(TransportMode::Car, false),
    ]
}

/// Modes currently toggled on, de-duplicated, first-seen order preserved.
pub fn active_modes(preferences: &[ModePreference]) -> Vec<TransportMode> {
    let mut modes = Vec::new();
    for preference in preferences.iter().filter(|p| p.enabled) {
        if !modes.contains(&preference.mode) {
            modes.push(preference.mode);
        }
    }
    modes
}

/// Flips the toggle for `mode`.
///
/// A mode with no matching preference is silently left alone: the
/// preference set is caller-managed and expected to be complete.
pub fn toggle_mode(
    mut preferences: Vec<ModePreference>,
    mode: TransportMode,
) -> Vec<ModePreference> {
    if let Some(preference) = preferences.iter_mut().find(|p| p.mode == mode) {
        preference.enabled = !preference.enabled;
    }
    preferences
}

/// One bound of a distance range, in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceBound {
    pub mode: TransportMode,
    /// Meters, non-negative
    pub value: f64,
    pub operator: BoundOperator,
}

/// Distance range restriction for a single transport mode.
///
/// Invariant: `0 <= lower_bound.value <= upper_bound.value <= max_value`.
/// The normalized range (`bound / max_value`) is what decides whether a
/// bound is "at the extreme" and therefore carries no constraint; see
/// [`crate::constraints::compile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConstraint {
    pub lower_bound: DistanceBound,
    pub upper_bound: DistanceBound,
    /// Largest representable distance for this mode (slider scale), meters
    pub max_value: f64,
    pub active: bool,
}

impl RangeConstraint {
    pub fn new(mode: TransportMode, lower: f64, upper: f64, max_value: f64) -> Self {
        Self {
            lower_bound: DistanceBound {
                mode,
                value: lower,
                operator: BoundOperator::Minimum,
            },
            upper_bound: DistanceBound {
                mode,
                value: upper,
                operator: BoundOperator::Maximum,
            },
            max_value,
            active: true,
        }
    }

    /// The mode this range restricts.
    pub fn mode(&self) -> TransportMode {
        self.lower_bound.mode
    }

    /// Bounds as fractions of `max_value`, each within `[0, 1]`.
    pub fn normalized_range(&self) -> (f64, f64) {
        (
            self.lower_bound.value / self.max_value,
            self.upper_bound.value / self.max_value,
        )
    }

    /// Sets both bounds from fractions of `max_value`, clamped to `[0, 1]`
    /// and kept ordered.
    pub fn set_normalized_range(&mut self, lower: f64, upper: f64) {
        let lower = lower.clamp(0.0, 1.0);
        let upper = upper.clamp(lower, 1.0);
        self.lower_bound.value = lower * self.max_value;
        self.upper_bound.value = upper * self.max_value;
    }
}

/// Factory defaults used the first time a range-capable mode is activated.
///
/// Only walking and cycling carry distance ranges; other modes have none.
pub fn default_range_constraint(mode: TransportMode) -> Option<RangeConstraint> {
    match mode {
        TransportMode::Walk => Some(RangeConstraint::new(mode, 1000.0, 2000.0, 10_000.0)),
        TransportMode::Bicycle => Some(RangeConstraint::new(mode, 1000.0, 10_000.0, 20_000.0)),
        _ => None,
    }
}

/// Lazily creates range constraints for every active range-capable mode
/// that does not have one yet. Existing constraints are never replaced or
/// removed, only supplemented. Keeps the walk-before-bicycle display order.
pub fn ensure_range_constraints(
    mut ranges: Vec<RangeConstraint>,
    active_modes: &[TransportMode],
) -> Vec<RangeConstraint> {
    for &mode in active_modes {
        if ranges.iter().any(|r| r.mode() == mode) {
            continue;
        }
        if let Some(range) = default_range_constraint(mode) {
            ranges.push(range);
        }
    }
    ranges.sort_by_key(|r| match r.mode() {
        TransportMode::Walk => 0,
        TransportMode::Bicycle => 1,
        _ => 2,
    });
    ranges
}

/// Activates or deactivates the range constraint for `mode`, if present.
///
/// Deactivation hard-suppresses the mode's leaves during compilation while
/// keeping the configured bounds for later reactivation.
pub fn set_range_active(
    mut ranges: Vec<RangeConstraint>,
    mode: TransportMode,
    active: bool,
) -> Vec<RangeConstraint> {
    if let Some(range) = ranges.iter_mut().find(|r| r.mode() == mode) {
        range.active = active;
    }
    ranges
}
