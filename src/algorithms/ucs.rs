use crate::algorithms::common::{reconstruct_path, SearchAlgorithm, SearchResult, TraversalState};
use crate::algorithms::frontier::{CostEntry, Frontier, PriorityFrontier};
use crate::environment::{Environment, Position};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Every move costs the same, diagonal or not.
const STEP_COST: u32 = 1;

/// Uniform-cost search over a `(cost, insertion order)` min-heap.
///
/// Cheaper rediscoveries push a fresh entry instead of updating the old
/// one; superseded entries are skipped when they surface.
#[derive(Debug, Default)]
pub struct UniformCostSearch;

impl UniformCostSearch {
    pub fn new() -> Self {
        UniformCostSearch
    }
}

impl SearchAlgorithm for UniformCostSearch {
    fn name(&self) -> &'static str {
        "UCS"
    }

    fn search(&mut self, env: &mut dyn Environment) -> SearchResult {
        let start = env.start();
        let target = env.target();

        let mut state = TraversalState::with_root(start);
        let mut frontier = PriorityFrontier::new();
        let mut cost_map: FxHashMap<Position, u32> = FxHashMap::default();
        let mut counter: u64 = 0;

        cost_map.insert(start, 0);
        frontier.push(CostEntry::new(0, counter, start));
        counter += 1;

        let mut path = None;
        while !frontier.is_empty() {
            if state.check_dynamic_obstacles(env).is_some() {
                frontier.purge_blocked(&mut |pos| env.is_blocked(pos));
            }
            if frontier.is_empty() {
                break;
            }
            state.record_frontier(&frontier);

            let Some(CostEntry { cost, position: current, .. }) = frontier.pop() else {
                break;
            };

            let best = cost_map.get(&current).copied().unwrap_or(u32::MAX);
            if cost > best {
                continue;
            }
            state.explored.insert(current);

            if current == target {
                path = Some(reconstruct_path(&state.parents, current));
                break;
            }

            let new_cost = cost + STEP_COST;
            for neighbor in env.neighbors(current) {
                let improves = cost_map.get(&neighbor).map_or(true, |&known| new_cost < known);
                if improves {
                    cost_map.insert(neighbor, new_cost);
                    state.parents.insert(neighbor, Some(current));
                    frontier.push(CostEntry::new(new_cost, counter, neighbor));
                    counter += 1;
                }
            }
        }

        debug!(found = path.is_some(), explored = state.explored.len(), "ucs finished");
        state.into_result(path)
    }
}
