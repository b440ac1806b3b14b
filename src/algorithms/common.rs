use crate::algorithms::frontier::Frontier;
use crate::environment::{Environment, Position};
use crate::statistics::AlgorithmStats;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

pub type ParentMap = FxHashMap<Position, Option<Position>>;

pub trait SearchAlgorithm {
    fn name(&self) -> &'static str;

    /// Runs one complete search against `env`. Each call starts from fresh
    /// bookkeeping; only the environment carries over between calls.
    fn search(&mut self, env: &mut dyn Environment) -> SearchResult;

    /// Algorithm-specific details about the last run.
    fn usage_stats(&self) -> AlgorithmStats {
        AlgorithmStats::Basic
    }
}

/// Outcome of one search run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// Start to target, empty when nothing was found.
    pub path: Vec<Position>,
    pub explored: FxHashSet<Position>,
    /// One snapshot per expansion step, taken after obstacle
    /// reconciliation and before the pop.
    pub frontier_history: Vec<FxHashSet<Position>>,
    pub total_nodes_explored: usize,
    pub found: bool,
    /// Obstacles spawned during the run, in spawn order.
    pub dynamic_obstacles_encountered: Vec<Position>,
}

impl SearchResult {
    /// Number of moves along the path.
    pub fn path_cost(&self) -> Option<usize> {
        if self.found {
            Some(self.path.len().saturating_sub(1))
        } else {
            None
        }
    }

    pub fn peak_frontier(&self) -> usize {
        self.frontier_history.iter().map(FxHashSet::len).max().unwrap_or(0)
    }
}

/// Per-run bookkeeping shared by every engine.
#[derive(Debug, Default)]
pub struct TraversalState {
    pub explored: FxHashSet<Position>,
    pub parents: ParentMap,
    pub frontier_history: Vec<FxHashSet<Position>>,
    pub obstacles: Vec<Position>,
}

impl TraversalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the parent map with a root.
    pub fn with_root(root: Position) -> Self {
        let mut state = Self::new();
        state.parents.insert(root, None);
        state
    }

    /// Asks the environment for at most one new obstacle and logs it.
    pub fn check_dynamic_obstacles(&mut self, env: &mut dyn Environment) -> Option<Position> {
        let spawned = env.spawn_obstacle()?;
        debug!(x = spawned.x, y = spawned.y, "obstacle appeared mid-search");
        self.obstacles.push(spawned);
        Some(spawned)
    }

    /// Runs one reconciliation step against a single frontier: spawn, then
    /// purge now-blocked entries from `frontier` and `pending`.
    pub fn reconcile<F: Frontier>(
        &mut self,
        env: &mut dyn Environment,
        frontier: &mut F,
        pending: &mut FxHashSet<Position>,
    ) {
        if self.check_dynamic_obstacles(env).is_some() {
            purge_frontier(&*env, frontier, pending);
        }
    }

    pub fn record_frontier<F: Frontier>(&mut self, frontier: &F) {
        self.frontier_history.push(frontier.snapshot());
    }

    pub fn into_result(self, path: Option<Vec<Position>>) -> SearchResult {
        let found = path.is_some();
        SearchResult {
            path: path.unwrap_or_default(),
            total_nodes_explored: self.explored.len(),
            explored: self.explored,
            frontier_history: self.frontier_history,
            found,
            dynamic_obstacles_encountered: self.obstacles,
        }
    }
}

/// Removes every frontier entry the environment now reports as blocked.
pub fn purge_frontier<F: Frontier>(
    env: &dyn Environment,
    frontier: &mut F,
    pending: &mut FxHashSet<Position>,
) {
    let removed = frontier.purge_blocked(&mut |pos| env.is_blocked(pos));
    for pos in &removed {
        pending.remove(pos);
    }
    if !removed.is_empty() {
        debug!(count = removed.len(), "purged blocked frontier entries");
    }
}

/// Walks `parents` from `node` back to its root and returns root-first order.
pub fn reconstruct_path(parents: &ParentMap, node: Position) -> Vec<Position> {
    let mut path = vec![node];
    let mut current = node;
    while let Some(&Some(parent)) = parents.get(&current) {
        path.push(parent);
        current = parent;
        // Parent chains are acyclic by construction; this only stops a
        // corrupted map from looping forever.
        if path.len() > parents.len() + 1 {
            break;
        }
    }
    path.reverse();
    path
}
