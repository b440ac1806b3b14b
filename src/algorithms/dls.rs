use crate::algorithms::common::{reconstruct_path, SearchAlgorithm, SearchResult, TraversalState};
use crate::algorithms::frontier::{DepthEntry, DepthStack, Frontier};
use crate::environment::Environment;
use crate::statistics::AlgorithmStats;
use rustc_hash::FxHashSet;
use tracing::debug;

pub const DEFAULT_DEPTH_LIMIT: usize = 10;

/// Depth-first search that stops expanding at `depth_limit` moves.
///
/// A target beyond the limit is reported as not found; the limit is never
/// extended behind the caller's back.
#[derive(Debug)]
pub struct DepthLimitedSearch {
    depth_limit: usize,
}

impl DepthLimitedSearch {
    pub fn new(depth_limit: usize) -> Self {
        DepthLimitedSearch { depth_limit }
    }

    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }
}

impl Default for DepthLimitedSearch {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH_LIMIT)
    }
}

impl SearchAlgorithm for DepthLimitedSearch {
    fn name(&self) -> &'static str {
        "DLS"
    }

    fn search(&mut self, env: &mut dyn Environment) -> SearchResult {
        let start = env.start();
        let target = env.target();

        let mut state = TraversalState::with_root(start);
        let mut frontier = DepthStack::new();
        let mut pending = FxHashSet::default();
        frontier.push(DepthEntry { position: start, depth: 0 });
        pending.insert(start);

        let mut path = None;
        while !frontier.is_empty() {
            state.reconcile(env, &mut frontier, &mut pending);
            if frontier.is_empty() {
                break;
            }
            state.record_frontier(&frontier);

            let Some(DepthEntry { position: current, depth }) = frontier.pop() else {
                break;
            };
            pending.remove(&current);
            state.explored.insert(current);

            // Target check comes before the limit check, so a target sitting
            // exactly at the limit is still found.
            if current == target {
                path = Some(reconstruct_path(&state.parents, current));
                break;
            }
            if depth >= self.depth_limit {
                continue;
            }

            for neighbor in env.neighbors(current).into_iter().rev() {
                if !state.explored.contains(&neighbor) && pending.insert(neighbor) {
                    state.parents.insert(neighbor, Some(current));
                    frontier.push(DepthEntry { position: neighbor, depth: depth + 1 });
                }
            }
        }

        debug!(
            found = path.is_some(),
            explored = state.explored.len(),
            limit = self.depth_limit,
            "dls finished"
        );
        state.into_result(path)
    }

    fn usage_stats(&self) -> AlgorithmStats {
        AlgorithmStats::DepthLimited { depth_limit: self.depth_limit }
    }
}
