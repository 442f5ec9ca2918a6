//! 2-opt local search over a constructed route.
//!
//! A move reverses `route[i..=k]`. Candidates are scanned with `i` ascending
//! then `k` ascending; the first strictly cheaper candidate (see
//! [`JumpCost`]) is applied and the scan restarts from the new route. The
//! search ends when a full scan finds nothing to improve, which leaves the
//! route 2-optimal for the allowed moves.

use tracing::{debug, warn};

use crate::cost::{JumpCost, JumpRange};
use crate::route_cost::{accumulate_from, evaluate_route, prefix_costs, route_cost, RouteCost};
use crate::system::{System, SystemId};

/// Result of a refinement run.
#[derive(Debug, Clone, PartialEq)]
pub struct RefinedRoute {
    pub route: Vec<SystemId>,
    pub cost: RouteCost,
    /// Number of improving moves that were applied.
    pub improvements: usize,
}

/// First-improvement 2-opt refiner.
#[derive(Debug, Clone, Copy)]
pub struct TwoOptRefiner {
    range: JumpRange,
    close_loop: bool,
    pin_last: bool,
    max_passes: Option<usize>,
}

impl TwoOptRefiner {
    pub fn new(range: JumpRange) -> Self {
        Self {
            range,
            close_loop: false,
            pin_last: false,
            max_passes: None,
        }
    }

    /// Treat the route as a cycle: the leg back to the first system counts,
    /// and moves touching either boundary (`i == 1` or `k == n - 1`) are
    /// skipped.
    pub fn close_loop(mut self, close_loop: bool) -> Self {
        self.close_loop = close_loop;
        self
    }

    /// Keep the last system in place by skipping moves with `k == n - 1`.
    pub fn pin_last(mut self, pin_last: bool) -> Self {
        self.pin_last = pin_last;
        self
    }

    /// Stop after this many applied moves even if more would help.
    pub fn max_passes(mut self, max_passes: Option<usize>) -> Self {
        self.max_passes = max_passes;
        self
    }

    fn allows(&self, i: usize, k: usize, n: usize) -> bool {
        if self.close_loop && (i == 1 || k == n - 1) {
            return false;
        }
        !(self.pin_last && k == n - 1)
    }

    /// Refine `route` until no allowed reversal lowers its cost.
    ///
    /// # Panics
    ///
    /// Panics if `route` contains an id that is not an index into `systems`.
    pub fn refine(&self, systems: &[System], route: Vec<SystemId>) -> RefinedRoute {
        let mut best = route;
        let mut best_cost = route_cost(systems, &best, self.range, self.close_loop);
        let mut scratch = Vec::with_capacity(best.len());
        let mut improvements = 0usize;

        loop {
            if self.max_passes.is_some_and(|limit| improvements >= limit) {
                warn!(
                    improvements,
                    "2-opt pass limit reached; route may not be locally optimal"
                );
                break;
            }

            let Some(cost) = self.first_improvement(systems, &best, best_cost, &mut scratch)
            else {
                break;
            };

            std::mem::swap(&mut best, &mut scratch);
            best_cost = cost;
            improvements += 1;
            debug!(
                improvements,
                jumps = cost.jumps,
                distance = cost.distance,
                "applied 2-opt move"
            );
        }

        let cost = evaluate_route(systems, &best, self.range, self.close_loop);
        RefinedRoute {
            route: best,
            cost,
            improvements,
        }
    }

    /// Scan for the first improving move. On success `scratch` holds the
    /// improved route and its cost is returned.
    fn first_improvement(
        &self,
        systems: &[System],
        route: &[SystemId],
        current: JumpCost,
        scratch: &mut Vec<SystemId>,
    ) -> Option<JumpCost> {
        let n = route.len();
        if n < 4 {
            return None;
        }

        // Legs before index i are untouched by a reversal starting at i.
        let prefix = prefix_costs(systems, route, self.range);

        for i in 1..n - 2 {
            for k in (i + 1)..n {
                if !self.allows(i, k, n) {
                    continue;
                }

                reverse_into(route, i, k, scratch);
                let candidate = accumulate_from(
                    systems,
                    scratch,
                    self.range,
                    self.close_loop,
                    i - 1,
                    prefix[i - 1],
                );
                if candidate.improves_on(&current) {
                    return Some(candidate);
                }
            }
        }

        None
    }
}

/// Write `route` with `route[i..=k]` reversed into `out`.
fn reverse_into(route: &[SystemId], i: usize, k: usize, out: &mut Vec<SystemId>) {
    out.clear();
    out.extend_from_slice(&route[..i]);
    out.extend(route[i..=k].iter().rev());
    out.extend_from_slice(&route[k + 1..]);
}

/// Refine `route` with default options (open route, free end).
pub fn refine_route(
    systems: &[System],
    route: Vec<SystemId>,
    range: JumpRange,
    close_loop: bool,
) -> RefinedRoute {
    TwoOptRefiner::new(range)
        .close_loop(close_loop)
        .refine(systems, route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{line_systems, range, scattered_systems};

    #[test]
    fn reverse_into_flips_inclusive_segment() {
        let mut out = Vec::new();
        reverse_into(&[0, 1, 2, 3, 4], 1, 3, &mut out);
        assert_eq!(out, vec![0, 3, 2, 1, 4]);
        reverse_into(&[0, 1, 2, 3, 4], 2, 4, &mut out);
        assert_eq!(out, vec![0, 1, 4, 3, 2]);
    }

    #[test]
    fn short_routes_are_returned_untouched() {
        let systems = line_systems(&[0.0, 10.0, 20.0]);
        let refined = refine_route(&systems, vec![0, 2, 1], range(15.0), false);
        assert_eq!(refined.route, vec![0, 2, 1]);
        assert_eq!(refined.improvements, 0);
        assert_eq!(refined.cost.total_jumps, 3);
    }

    #[test]
    fn already_optimal_line_is_kept() {
        let systems = line_systems(&[0.0, 10.0, 20.0, 30.0, 40.0]);
        let refined = refine_route(&systems, vec![0, 1, 2, 3, 4], range(15.0), false);
        assert_eq!(refined.route, vec![0, 1, 2, 3, 4]);
        assert_eq!(refined.cost.total_jumps, 4);
        assert_eq!(refined.cost.total_distance, 40.0);
    }

    #[test]
    fn untangles_a_crossed_line() {
        let systems = line_systems(&[0.0, 10.0, 20.0, 30.0, 40.0]);
        let refined = refine_route(&systems, vec![0, 3, 2, 1, 4], range(15.0), false);
        assert_eq!(refined.route, vec![0, 1, 2, 3, 4]);
        assert_eq!(refined.improvements, 1);
    }

    #[test]
    fn distance_breaks_jump_ties() {
        // Every leg is one jump with a huge range, so only distance can improve.
        let systems = line_systems(&[0.0, 30.0, 10.0, 20.0, 40.0]);
        let refined = refine_route(&systems, vec![0, 1, 2, 3, 4], range(1_000.0), false);
        assert_eq!(refined.cost.total_jumps, 4);
        assert_eq!(refined.route, vec![0, 2, 3, 1, 4]);
        assert_eq!(refined.cost.total_distance, 40.0);
        assert_eq!(refined.improvements, 2);
    }

    #[test]
    fn pinned_last_system_never_moves() {
        // The only improving move reverses the tail, which a pinned end forbids.
        let systems = line_systems(&[0.0, 40.0, 30.0, 20.0, 10.0]);

        let free = refine_route(&systems, vec![0, 1, 2, 3, 4], range(15.0), false);
        assert_eq!(free.route, vec![0, 4, 3, 2, 1]);
        assert_eq!(free.cost.total_jumps, 4);

        let pinned = TwoOptRefiner::new(range(15.0))
            .pin_last(true)
            .refine(&systems, vec![0, 1, 2, 3, 4]);
        assert_eq!(pinned.route, vec![0, 1, 2, 3, 4]);
        assert_eq!(pinned.improvements, 0);
    }

    #[test]
    fn closed_loop_keeps_start_and_boundaries() {
        let systems = scattered_systems(12, 7, 100.0);
        let route: Vec<SystemId> = (0..systems.len()).collect();
        let refined = refine_route(&systems, route.clone(), range(20.0), true);

        assert_eq!(refined.route[0], 0);
        assert_eq!(refined.route[1], route[1]);
        assert_eq!(refined.route.last(), route.last());
        assert_eq!(refined.cost.legs.len(), systems.len());
    }

    #[test]
    fn pass_limit_caps_applied_moves() {
        let systems = scattered_systems(30, 3, 200.0);
        let route: Vec<SystemId> = (0..systems.len()).collect();
        let unlimited = refine_route(&systems, route.clone(), range(25.0), false);
        assert!(unlimited.improvements > 1, "fixture should need several moves");

        let capped = TwoOptRefiner::new(range(25.0))
            .max_passes(Some(1))
            .refine(&systems, route);
        assert_eq!(capped.improvements, 1);
    }

    #[test]
    fn refinement_never_increases_cost() {
        for seed in 0..5 {
            let systems = scattered_systems(25, seed, 150.0);
            let route: Vec<SystemId> = (0..systems.len()).collect();
            let before = route_cost(&systems, &route, range(30.0), false);
            let refined = refine_route(&systems, route, range(30.0), false);
            assert!(refined.cost.cost() <= before);
        }
    }
}
