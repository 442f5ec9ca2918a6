//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and one implementation per
//! [`RouteAlgorithm`]. The strategy pattern allows adding new heuristics
//! without modifying the `plan_route` orchestrator.

use crate::cost::JumpRange;
use crate::greedy::build_greedy_route;
use crate::system::{System, SystemId};
use crate::two_opt::TwoOptRefiner;

use super::{RouteAlgorithm, RouteRequest};

/// Everything a strategy needs to order the systems of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanContext {
    pub range: JumpRange,
    pub start: SystemId,
    /// System that must end an open route.
    pub fixed_end: Option<SystemId>,
    /// Cost the route as a cycle back to `start`.
    pub close_loop: bool,
    pub max_passes: Option<usize>,
}

impl PlanContext {
    /// Greedy construction over every system except the fixed end, which is
    /// appended last.
    fn construct(&self, systems: &[System]) -> Vec<SystemId> {
        let pool: Vec<SystemId> = (0..systems.len())
            .filter(|&id| Some(id) != self.fixed_end)
            .collect();
        build_greedy_route(systems, &pool, self.start, self.fixed_end, self.range)
    }
}

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Produce an open visiting order starting at `context.start` (and ending
    /// at `context.fixed_end` when one is set).
    fn order(&self, systems: &[System], context: &PlanContext) -> Vec<SystemId>;

    /// Whether this planner runs local search after construction.
    fn refines(&self) -> bool {
        false
    }
}

/// Nearest-neighbour construction without refinement.
#[derive(Debug, Clone, Default)]
pub struct NearestNeighborPlanner;

impl RoutePlanner for NearestNeighborPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::NearestNeighbor
    }

    fn order(&self, systems: &[System], context: &PlanContext) -> Vec<SystemId> {
        context.construct(systems)
    }
}

/// Nearest-neighbour construction followed by 2-opt refinement.
#[derive(Debug, Clone, Default)]
pub struct TwoOptPlanner;

impl RoutePlanner for TwoOptPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::TwoOpt
    }

    fn order(&self, systems: &[System], context: &PlanContext) -> Vec<SystemId> {
        let initial = context.construct(systems);
        TwoOptRefiner::new(context.range)
            .close_loop(context.close_loop)
            .pin_last(context.fixed_end.is_some())
            .max_passes(context.max_passes)
            .refine(systems, initial)
            .route
    }

    fn refines(&self) -> bool {
        true
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::NearestNeighbor => Box::new(NearestNeighborPlanner),
        RouteAlgorithm::TwoOpt => Box::new(TwoOptPlanner),
    }
}
