//! Aggregate cost of an ordered route.
//!
//! [`evaluate_route`] is the one place that turns an ordering into jump and
//! distance totals. [`route_cost`] and the refiner's prefix-resuming helpers
//! walk the same legs in the same order, so they produce bit-identical totals
//! without allocating the per-leg breakdown.

use serde::Serialize;

use crate::cost::{distance, jumps_for_distance, JumpCost, JumpRange};
use crate::system::{System, SystemId};

/// One directed leg between two consecutive systems of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: SystemId,
    pub to: SystemId,
    pub jumps: usize,
    pub distance: f64,
}

/// Totals and per-leg breakdown for a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteCost {
    pub total_jumps: usize,
    pub total_distance: f64,
    pub legs: Vec<RouteLeg>,
}

impl RouteCost {
    /// The lexicographic objective for this route.
    pub fn cost(&self) -> JumpCost {
        JumpCost::new(self.total_jumps, self.total_distance)
    }

    /// Jumps per leg, in route order.
    pub fn leg_jumps(&self) -> Vec<usize> {
        self.legs.iter().map(|leg| leg.jumps).collect()
    }

    /// Distance per leg, in route order.
    pub fn leg_distances(&self) -> Vec<f64> {
        self.legs.iter().map(|leg| leg.distance).collect()
    }
}

fn leg_pairs(
    route: &[SystemId],
    close_loop: bool,
) -> impl Iterator<Item = (SystemId, SystemId)> + '_ {
    let closing = match (close_loop, route.first(), route.last()) {
        (true, Some(&first), Some(&last)) if route.len() >= 2 => Some((last, first)),
        _ => None,
    };
    route
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .chain(closing)
}

fn measure(systems: &[System], from: SystemId, to: SystemId, range: JumpRange) -> (usize, f64) {
    let d = distance(&systems[from], &systems[to]);
    (jumps_for_distance(d, range), d)
}

/// Evaluate every leg of `route`, optionally closing it back to its first
/// system.
///
/// Routes shorter than two systems cost nothing and have no legs.
///
/// # Panics
///
/// Panics if `route` contains an id that is not an index into `systems`.
pub fn evaluate_route(
    systems: &[System],
    route: &[SystemId],
    range: JumpRange,
    close_loop: bool,
) -> RouteCost {
    let mut cost = RouteCost::default();
    for (from, to) in leg_pairs(route, close_loop) {
        let (jumps, distance) = measure(systems, from, to, range);
        cost.total_jumps = cost.total_jumps.saturating_add(jumps);
        cost.total_distance += distance;
        cost.legs.push(RouteLeg {
            from,
            to,
            jumps,
            distance,
        });
    }
    cost
}

/// Totals of [`evaluate_route`] without the per-leg breakdown.
pub fn route_cost(
    systems: &[System],
    route: &[SystemId],
    range: JumpRange,
    close_loop: bool,
) -> JumpCost {
    accumulate_from(systems, route, range, close_loop, 0, JumpCost::default())
}

/// Continue summing `route`'s legs after its first `skip` legs, starting
/// from `init`.
///
/// With `init` taken from [`prefix_costs`] of a route sharing those first
/// legs, the result is bit-identical to [`route_cost`] because the additions
/// happen in the same order.
pub(crate) fn accumulate_from(
    systems: &[System],
    route: &[SystemId],
    range: JumpRange,
    close_loop: bool,
    skip: usize,
    init: JumpCost,
) -> JumpCost {
    let mut total = init;
    for (from, to) in leg_pairs(route, close_loop).skip(skip) {
        let (jumps, distance) = measure(systems, from, to, range);
        total.add_leg(jumps, distance);
    }
    total
}

/// Running totals over the open legs of `route`: entry `m` holds the cost
/// of the first `m` legs.
pub(crate) fn prefix_costs(
    systems: &[System],
    route: &[SystemId],
    range: JumpRange,
) -> Vec<JumpCost> {
    let mut prefix = Vec::with_capacity(route.len().max(1));
    let mut total = JumpCost::default();
    prefix.push(total);
    for (from, to) in leg_pairs(route, false) {
        let (jumps, distance) = measure(systems, from, to, range);
        total.add_leg(jumps, distance);
        prefix.push(total);
    }
    prefix
}
