// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constraint Compilation
//!
//! Wire model for the routing backend's `constraint` payload and the
//! compiler that turns distance range preferences into it.
//!
//! The backend consumes a nested boolean-condition tree. This client only
//! ever produces a flat, single-level tree: one AND node aggregating every
//! qualifying leaf across all modes. A leaf qualifies when its bound has
//! been narrowed away from the slider extreme; the check runs on the
//! normalized fraction so "no constraint" detection stays independent of
//! each mode's absolute distance scale.

use serde::{Deserialize, Serialize};

use crate::models::TransportMode;
use crate::preferences::{BoundOperator, DistanceBound, RangeConstraint};

/// Top-level document carried in the `constraint` query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintQuery {
    pub constraints: Vec<ConstraintNode>,
}

/// One node of the constraint tree, tagged on the wire by `constraintType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "constraintType")]
pub enum ConstraintNode {
    /// Boolean aggregation of child constraints.
    #[serde(rename = "nested")]
    Nested {
        constraints: Vec<ConstraintNode>,
        #[serde(rename = "isOperatorAnd")]
        is_operator_and: bool,
    },
    /// A single hard bound check against one mode.
    #[serde(rename = "hard")]
    Hard {
        context: ConstraintContext,
        condition: ValueCondition,
    },
}

/// Scopes a leaf constraint to one transport mode.
///
/// The backend requires a context on every leaf. Location and time-interval
/// scoping exist in the backend schema but are unused by this client and go
/// out as explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintContext {
    pub transportation_mode: TransportMode,
    pub location: Option<LocationContext>,
    pub time_interval: Option<TimeIntervalContext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationContext {
    pub coordinates: ContextCoordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextCoordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Epoch-second interval a constraint applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeIntervalContext {
    pub start: f64,
    pub end: f64,
}

/// A single value comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueCondition {
    pub condition_type: ConditionType,
    pub value_type: ValueType,
    pub value: f64,
    pub operator: BoundOperator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionType {
    #[serde(rename = "value")]
    Value,
}

/// Quantity a condition compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    #[serde(rename = "DISTANCE")]
    Distance,
    #[serde(rename = "TRAVEL_TIME")]
    TravelTime,
    #[serde(rename = "LINE_CHANGES")]
    LineChanges,
    #[serde(rename = "MODE_OCCURRENCES")]
    ModeOccurrences,
}

fn distance_leaf(bound: &DistanceBound) -> ConstraintNode {
    ConstraintNode::Hard {
        context: ConstraintContext {
            transportation_mode: bound.mode,
            location: None,
            time_interval: None,
        },
        condition: ValueCondition {
            condition_type: ConditionType::Value,
            value_type: ValueType::Distance,
            value: bound.value,
            operator: bound.operator,
        },
    }
}

/// Compiles range preferences into the backend constraint document.
///
/// For each active range whose mode is listed in `active_modes`, the lower
/// bound becomes a leaf only when its normalized fraction is not 0 and the
/// upper bound only when its fraction is not 1. An inactive range
/// contributes nothing regardless of its bounds. All leaves land in one
/// AND-combined nested node, in range iteration order, so a given input
/// always produces the same payload.
///
/// Returns `None` when no leaf qualifies; the request layer then omits the
/// `constraint` parameter entirely.
pub fn compile(
    ranges: &[RangeConstraint],
    active_modes: &[TransportMode],
) -> Option<ConstraintQuery> {
    let mut leaves = Vec::new();
    for range in ranges {
        if !range.active || !active_modes.contains(&range.mode()) {
            continue;
        }
        let (lower, upper) = range.normalized_range();
        // Exact comparison on the normalized fraction: a bound parked at the
        // slider extreme means "no constraint".
        if lower != 0.0 {
            leaves.push(distance_leaf(&range.lower_bound));
        }
        if upper != 1.0 {
            leaves.push(distance_leaf(&range.upper_bound));
        }
    }

    if leaves.is_empty() {
        return None;
    }
    Some(ConstraintQuery {
        constraints: vec![ConstraintNode::Nested {
            constraints: leaves,
            is_operator_and: true,
        }],
    })
}
