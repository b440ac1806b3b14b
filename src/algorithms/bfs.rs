use crate::algorithms::common::{reconstruct_path, SearchAlgorithm, SearchResult, TraversalState};
use crate::algorithms::frontier::{FifoFrontier, Frontier};
use crate::environment::{Environment, Position};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Breadth-first search over a FIFO frontier.
///
/// On a grid that does not change mid-run the path has the fewest possible
/// moves. Nodes are committed to the explored set when popped, not when
/// queued, so an obstacle landing on a queued node just drops it from the
/// frontier.
#[derive(Debug, Default)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    pub fn new() -> Self {
        BreadthFirstSearch
    }
}

impl SearchAlgorithm for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&mut self, env: &mut dyn Environment) -> SearchResult {
        let start = env.start();
        let target = env.target();

        let mut state = TraversalState::with_root(start);
        let mut frontier: FifoFrontier<Position> = FifoFrontier::new();
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

            for neighbor in env.neighbors(current) {
                if !state.explored.contains(&neighbor) && pending.insert(neighbor) {
                    state.parents.insert(neighbor, Some(current));
                    frontier.push(neighbor);
                }
            }
        }

        debug!(found = path.is_some(), explored = state.explored.len(), "bfs finished");
        state.into_result(path)
    }
}
