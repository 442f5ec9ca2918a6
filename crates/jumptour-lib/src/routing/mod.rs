//! Route planning module.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported planning strategies
//! - [`RouteRequest`] - Parameters for one planning run
//! - [`RoutePlan`] - Planned route with its cost breakdown
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Each strategy is a [`RoutePlanner`] implementation. [`plan_route`] owns
//! the parts every strategy shares: validating the request, choosing the
//! start and the optional fixed end, and closing the loop.
//!
//! # Example
//!
//! ```
//! use jumptour_lib::{plan_route, RouteRequest, System};
//!
//! let systems = vec![
//!     System::new("A", 0.0, 0.0, 0.0),
//!     System::new("B", 10.0, 0.0, 0.0),
//!     System::new("C", 20.0, 0.0, 0.0),
//! ];
//! let plan = plan_route(&systems, &RouteRequest::new(15.0)).unwrap();
//! assert_eq!(plan.steps, vec![0, 1, 2]);
//! assert_eq!(plan.total_jumps(), 2);
//! ```

mod planner;

pub use planner::{select_planner, NearestNeighborPlanner, PlanContext, RoutePlanner, TwoOptPlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::cost::{JumpCost, JumpRange};
use crate::error::Result;
use crate::route_cost::{evaluate_route, RouteCost};
use crate::system::{System, SystemId};

/// Supported planning strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Nearest-neighbour construction only.
    NearestNeighbor,
    /// Nearest-neighbour construction followed by 2-opt refinement.
    #[default]
    TwoOpt,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::NearestNeighbor => "nearest-neighbor",
            RouteAlgorithm::TwoOpt => "two-opt",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "nearest-neighbor" | "nearest-neighbour" | "nn" => Ok(RouteAlgorithm::NearestNeighbor),
            "two-opt" | "2-opt" | "2opt" => Ok(RouteAlgorithm::TwoOpt),
            other => Err(format!("unknown route algorithm '{other}'")),
        }
    }
}

/// Parameters for one planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    /// Maximum distance of a single jump, in light-years.
    pub max_jump: f64,
    /// Return to the starting system at the end of the route.
    pub loop_back: bool,
    /// Finish at the last system of the input. Ignored when looping.
    pub final_is_last: bool,
    pub algorithm: RouteAlgorithm,
    /// Optional cap on applied refinement moves.
    pub max_passes: Option<usize>,
}

impl RouteRequest {
    /// Open route ending at the last input system, refined with 2-opt.
    pub fn new(max_jump: f64) -> Self {
        Self {
            max_jump,
            loop_back: false,
            final_is_last: true,
            algorithm: RouteAlgorithm::default(),
            max_passes: None,
        }
    }

    /// Whether the last input system must end the route.
    pub fn has_fixed_end(&self) -> bool {
        !self.loop_back && self.final_is_last
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub max_jump: JumpRange,
    /// Visiting order. A closed loop repeats the start id at the end.
    pub steps: Vec<SystemId>,
    pub closed: bool,
    pub cost: RouteCost,
}

impl RoutePlan {
    pub fn total_jumps(&self) -> usize {
        self.cost.total_jumps
    }

    pub fn total_distance(&self) -> f64 {
        self.cost.total_distance
    }

    pub fn objective(&self) -> JumpCost {
        self.cost.cost()
    }

    pub fn leg_jumps(&self) -> Vec<usize> {
        self.cost.leg_jumps()
    }

    pub fn leg_distances(&self) -> Vec<f64> {
        self.cost.leg_distances()
    }

    /// Number of distinct systems on the route.
    pub fn systems_visited(&self) -> usize {
        if self.closed {
            self.steps.len().saturating_sub(1)
        } else {
            self.steps.len()
        }
    }
}

/// Compute a route through every system using the requested strategy.
///
/// This is the main entry point for route planning. It:
/// 1. Validates the jump range
/// 2. Picks the first system as the start and, when requested, the last
///    system as the fixed end
/// 3. Runs the selected planner strategy
/// 4. Closes the loop when `loop_back` is set
///
/// Fewer than two systems is not an error: the input order comes back with
/// zero cost.
pub fn plan_route(systems: &[System], request: &RouteRequest) -> Result<RoutePlan> {
    let range = JumpRange::new(request.max_jump)?;

    if systems.len() < 2 {
        return Ok(RoutePlan {
            algorithm: request.algorithm,
            max_jump: range,
            steps: (0..systems.len()).collect(),
            closed: false,
            cost: RouteCost::default(),
        });
    }

    let context = PlanContext {
        range,
        start: 0,
        fixed_end: request.has_fixed_end().then_some(systems.len() - 1),
        close_loop: request.loop_back,
        max_passes: request.max_passes,
    };

    let planner = select_planner(request);
    let mut steps = planner.order(systems, &context);

    let mut closed = false;
    if request.loop_back && steps.first() != steps.last() {
        steps.push(context.start);
        closed = true;
    }

    // A closed route already repeats its start, so its legs are the open legs.
    let cost = evaluate_route(systems, &steps, range, false);

    debug!(
        algorithm = %request.algorithm,
        systems = systems.len(),
        jumps = cost.total_jumps,
        distance = cost.total_distance,
        closed,
        "planned route"
    );

    Ok(RoutePlan {
        algorithm: request.algorithm,
        max_jump: range,
        steps,
        closed,
        cost,
    })
}
