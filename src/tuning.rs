// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Automatic range tuning for the "calculate preferences for me" toggle.
//!
//! When the user opts into automatic tuning, bounds are recomputed for
//! exactly two behavioral classes: the preferred mode and the first other
//! mode. Turning the toggle off freezes whatever bounds are set and hands
//! control back to manual slider input; that session flag lives with the
//! caller, not here.

use crate::models::TransportMode;
use crate::preferences::RangeConstraint;

/// Target lower bound for the preferred mode, meters.
pub const PREFERRED_LOWER_METERS: f64 = 1000.0;
/// Target upper bound for the preferred mode, meters.
pub const PREFERRED_UPPER_METERS: f64 = 3000.0;
/// Target lower bound for the first non-preferred mode, meters.
pub const OTHER_LOWER_METERS: f64 = 0.0;
/// Target upper bound for the first non-preferred mode, meters.
pub const OTHER_UPPER_METERS: f64 = 10_000.0;

/// Recomputes range bounds around a single preferred mode.
///
/// The first range whose mode equals `preferred` gets 1000-3000 m; the
/// first range whose mode differs gets 0-10000 m. Only the first match in
/// each category is updated; any further ranges are left untouched. This
/// mirrors the narrow two-range design (walk and bicycle) and is kept
/// as-is pending product clarification.
///
/// Returns the input unchanged when no range matches `preferred`.
/// Idempotent for a fixed `preferred`.
pub fn apply_auto_constraints(
    mut ranges: Vec<RangeConstraint>,
    preferred: TransportMode,
) -> Vec<RangeConstraint> {
    let Some(index) = ranges.iter().position(|r| r.mode() == preferred) else {
        return ranges;
    };
    ranges[index].lower_bound.value = PREFERRED_LOWER_METERS;
    ranges[index].upper_bound.value = PREFERRED_UPPER_METERS;

    if let Some(other) = ranges.iter_mut().find(|r| r.mode() != preferred) {
        other.lower_bound.value = OTHER_LOWER_METERS;
        other.upper_bound.value = OTHER_UPPER_METERS;
    }
    ranges
}
