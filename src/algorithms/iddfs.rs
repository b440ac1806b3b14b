use crate::algorithms::common::{reconstruct_path, SearchAlgorithm, SearchResult, TraversalState};
use crate::environment::{Environment, Position};
use crate::statistics::AlgorithmStats;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

/// Node visits between two obstacle checks within one iteration. A cell
/// re-entered with more remaining depth counts again, so this is per visit
/// rather than per distinct node explored.
const OBSTACLE_CHECK_INTERVAL: usize = 10;

/// Iterative-deepening depth-first search.
///
/// Runs a recursive depth-limited pass with limits `1..=2 * max(width,
/// height)`, starting every pass with empty explored and parent maps. The
/// reported explored set is the union over all passes.
#[derive(Debug, Default)]
pub struct IterativeDeepeningDfs {
    iterations: usize,
}

impl IterativeDeepeningDfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Depth limit of the last pass of the most recent search.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// State of one depth-limited pass.
struct DeepeningPass<'a> {
    env: &'a mut dyn Environment,
    state: &'a mut TraversalState,
    target: Position,
    /// Largest remaining depth each position has been entered with.
    best_remaining: FxHashMap<Position, usize>,
    /// Positions on the current recursion path.
    branch: Vec<Position>,
    visits: usize,
}

impl DeepeningPass<'_> {
    fn visit(&mut self, current: Position, remaining: usize) -> Option<Vec<Position>> {
        // No explicit frontier to prune here; spawning only feeds the log
        // and later passes route around the new obstacle.
        if self.visits % OBSTACLE_CHECK_INTERVAL == 0 {
            self.state.check_dynamic_obstacles(&mut *self.env);
        }
        self.visits += 1;

        self.state.explored.insert(current);
        self.best_remaining.insert(current, remaining);
        self.branch.push(current);
        self.state.frontier_history.push(self.branch.iter().copied().collect());

        let found = self.expand(current, remaining);
        self.branch.pop();
        found
    }

    fn expand(&mut self, current: Position, remaining: usize) -> Option<Vec<Position>> {
        if current == self.target {
            return Some(reconstruct_path(&self.state.parents, current));
        }
        if remaining == 0 {
            return None;
        }

        let next_remaining = remaining - 1;
        for neighbor in self.env.neighbors(current) {
            // Re-enter a position only with more depth to spare than last
            // time. Ancestors on the branch always hold more, so the parent
            // chain cannot loop.
            let worth_entering = self
                .best_remaining
                .get(&neighbor)
                .map_or(true, |&seen| next_remaining > seen);
            if !worth_entering {
                continue;
            }

            self.state.parents.insert(neighbor, Some(current));
            if let Some(path) = self.visit(neighbor, next_remaining) {
                return Some(path);
            }
        }
        None
    }
}

impl SearchAlgorithm for IterativeDeepeningDfs {
    fn name(&self) -> &'static str {
        "IDDFS"
    }

    fn search(&mut self, env: &mut dyn Environment) -> SearchResult {
        let start = env.start();
        let target = env.target();
        let max_limit = 2 * env.width().max(env.height()).max(0) as usize;

        let mut state = TraversalState::new();
        let mut all_explored: FxHashSet<Position> = FxHashSet::default();
        let mut path = None;
        self.iterations = 0;

        for limit in 1..=max_limit {
            state.explored.clear();
            state.parents.clear();
            state.parents.insert(start, None);

            let mut pass = DeepeningPass {
                env: &mut *env,
                state: &mut state,
                target,
                best_remaining: FxHashMap::default(),
                branch: Vec::new(),
                visits: 0,
            };
            let found = pass.visit(start, limit);
            let visits = pass.visits;

            self.iterations = limit;
            all_explored.extend(state.explored.iter().copied());
            trace!(limit, visits, explored = state.explored.len(), "iddfs pass complete");

            if found.is_some() {
                path = found;
                break;
            }
        }

        state.explored = all_explored;
        debug!(
            found = path.is_some(),
            explored = state.explored.len(),
            iterations = self.iterations,
            "iddfs finished"
        );
        state.into_result(path)
    }

    fn usage_stats(&self) -> AlgorithmStats {
        AlgorithmStats::Deepening { iterations: self.iterations }
    }
}
