//! Per-leg cost model: Euclidean distance and range-quantized jump counts.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::system::System;

/// Distances at or below this threshold are treated as the same location.
pub const COINCIDENT_EPSILON: f64 = 1e-6;

/// Maximum distance covered by a single jump, in light-years.
///
/// Construction rejects zero, negative and non-finite values, so any
/// `JumpRange` in hand is safe to divide by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JumpRange(f64);

impl JumpRange {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidRange { value })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for JumpRange {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for JumpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ly", self.0)
    }
}

/// Euclidean distance between two systems.
pub fn distance(a: &System, b: &System) -> f64 {
    a.position.distance_to(&b.position)
}

/// Number of jumps needed to cover the distance between two systems.
///
/// Coincident systems cost nothing; any other pair costs at least one jump.
pub fn jump_count(a: &System, b: &System, range: JumpRange) -> usize {
    jumps_for_distance(distance(a, b), range)
}

pub(crate) fn jumps_for_distance(distance: f64, range: JumpRange) -> usize {
    if distance <= COINCIDENT_EPSILON {
        return 0;
    }
    ((distance / range.get()).ceil() as usize).max(1)
}

/// Lexicographic route objective: total jumps first, total distance second.
///
/// Ordering uses [`f64::total_cmp`] for the distance so the type is `Ord`
/// and every comparison between candidate routes goes through one place.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct JumpCost {
    pub jumps: usize,
    pub distance: f64,
}

impl JumpCost {
    pub fn new(jumps: usize, distance: f64) -> Self {
        Self { jumps, distance }
    }

    /// Add one leg. Jump totals saturate at `usize::MAX` instead of
    /// overflowing when the range is tiny.
    pub fn add_leg(&mut self, jumps: usize, distance: f64) {
        self.jumps = self.jumps.saturating_add(jumps);
        self.distance += distance;
    }

    /// Whether `self` is strictly cheaper than `other`.
    pub fn improves_on(&self, other: &Self) -> bool {
        self < other
    }
}

impl PartialEq for JumpCost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for JumpCost {}

impl PartialOrd for JumpCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JumpCost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.jumps
            .cmp(&other.jumps)
            .then_with(|| self.distance.total_cmp(&other.distance))
    }
}
