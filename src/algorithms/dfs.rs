use crate::algorithms::common::{reconstruct_path, SearchAlgorithm, SearchResult, TraversalState};
use crate::algorithms::frontier::{Frontier, LifoFrontier};
use crate::environment::{Environment, Position};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Depth-first search over a LIFO frontier. No shortest-path guarantee.
#[derive(Debug, Default)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    pub fn new() -> Self {
        DepthFirstSearch
    }
}

impl SearchAlgorithm for DepthFirstSearch {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(&mut self, env: &mut dyn Environment) -> SearchResult {
        let start = env.start();
        let target = env.target();

        let mut state = TraversalState::with_root(start);
        let mut frontier: LifoFrontier<Position> = LifoFrontier::new();
        let mut pending = FxHashSet::default();
        frontier.push(start);
        pending.insert(start);

        let mut path = None;
        while !frontier.is_empty() {
            state.reconcile(env, &mut frontier, &mut pending);
            if frontier.is_empty() {
                break;
            }
            state.record_frontier(&frontier);

            let Some(current) = frontier.pop() else {
                break;
            };
            pending.remove(&current);
            state.explored.insert(current);

            if current == target {
                path = Some(reconstruct_path(&state.parents, current));
                break;
            }

            // Reversed so the first-listed neighbor ends on top of the stack.
            for neighbor in env.neighbors(current).into_iter().rev() {
                if !state.explored.contains(&neighbor) && pending.insert(neighbor) {
                    state.parents.insert(neighbor, Some(current));
                    frontier.push(neighbor);
                }
            }
        }

        debug!(found = path.is_some(), explored = state.explored.len(), "dfs finished");
        state.into_result(path)
    }
}
