//! Nearest-neighbour route construction keyed on jump count.

use std::collections::BTreeSet;

use tracing::debug;

use crate::cost::{jump_count, JumpRange};
use crate::system::{System, SystemId};

/// Build an initial route by repeatedly hopping to the unvisited system that
/// takes the fewest jumps to reach.
///
/// Jump counts are coarse, so ties are common; they resolve to the lowest
/// [`SystemId`], which keeps runs reproducible. When `fixed_end` is given it
/// is moved to (or appended at) the end of the route regardless of where the
/// greedy walk would have placed it. A `fixed_end` equal to `start` is
/// ignored.
pub fn build_greedy_route(
    systems: &[System],
    pool: &[SystemId],
    start: SystemId,
    fixed_end: Option<SystemId>,
    range: JumpRange,
) -> Vec<SystemId> {
    let mut unvisited: BTreeSet<SystemId> =
        pool.iter().copied().filter(|&id| id != start).collect();
    let mut route = Vec::with_capacity(unvisited.len() + 2);
    route.push(start);

    let mut current = start;
    while let Some(next) = unvisited
        .iter()
        .copied()
        .min_by_key(|&candidate| jump_count(&systems[current], &systems[candidate], range))
    {
        unvisited.remove(&next);
        route.push(next);
        current = next;
    }

    if let Some(end) = fixed_end.filter(|&end| end != start) {
        if route.last() != Some(&end) {
            route.retain(|&id| id != end);
            route.push(end);
        }
    }

    debug!(
        systems = route.len(),
        fixed_end = ?fixed_end,
        "constructed nearest-neighbour route"
    );
    route
}
