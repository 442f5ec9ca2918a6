//! Jump-tour planning library entry points.
//!
//! This crate loads star systems from coordinate files, measures legs in
//! whole jumps for a given jump range, and orders every system into a short
//! tour: nearest-neighbour construction followed by 2-opt refinement.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod greedy;
pub mod output;
pub mod route_cost;
pub mod routing;
pub mod system;
pub mod two_opt;

#[cfg(test)]
mod test_helpers;

pub use config::{
    default_config_path, load_config, resolve_config_path, save_config, PlannerConfig,
    CONFIG_ENV_VAR,
};
pub use cost::{distance, jump_count, JumpCost, JumpRange, COINCIDENT_EPSILON};
pub use dataset::{load_systems, load_systems_from_reader};
pub use error::{Error, Result};
pub use greedy::build_greedy_route;
pub use output::{write_route_csv, RouteRenderMode, RouteStep, RouteSummary, StepRole};
pub use route_cost::{evaluate_route, route_cost, RouteCost, RouteLeg};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
pub use system::{System, SystemId, SystemPosition};
pub use two_opt::{refine_route, RefinedRoute, TwoOptRefiner};
