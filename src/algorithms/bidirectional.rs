use crate::algorithms::common::{
    purge_frontier, reconstruct_path, ParentMap, SearchAlgorithm, SearchResult, TraversalState,
};
use crate::algorithms::frontier::{FifoFrontier, Frontier};
use crate::environment::{Environment, Position};
use crate::statistics::AlgorithmStats;
use rustc_hash::FxHashSet;
use tracing::debug;

/// One direction of a bidirectional search.
#[derive(Debug)]
struct Wavefront {
    frontier: FifoFrontier<Position>,
    pending: FxHashSet<Position>,
    explored: FxHashSet<Position>,
    parents: ParentMap,
}

impl Wavefront {
    fn rooted_at(root: Position) -> Self {
        let mut wave = Wavefront {
            frontier: FifoFrontier::new(),
            pending: FxHashSet::default(),
            explored: FxHashSet::default(),
            parents: ParentMap::default(),
        };
        wave.frontier.push(root);
        wave.pending.insert(root);
        wave.parents.insert(root, None);
        wave
    }

    /// Pops and expands one node. Returns the meeting point if this
    /// expansion touches a node the `other` direction already explored.
    fn step(
        &mut self,
        env: &dyn Environment,
        other: &Wavefront,
        combined: &mut FxHashSet<Position>,
    ) -> Option<Position> {
        let current = self.frontier.pop()?;
        self.pending.remove(&current);
        self.explored.insert(current);
        combined.insert(current);

        // A node still pending here may have been explored from the other
        // side since it was queued.
        if other.explored.contains(&current) {
            return Some(current);
        }

        for neighbor in env.neighbors(current) {
            if other.explored.contains(&neighbor) {
                self.parents.insert(neighbor, Some(current));
                return Some(neighbor);
            }
            if !self.explored.contains(&neighbor) && self.pending.insert(neighbor) {
                self.parents.insert(neighbor, Some(current));
                self.frontier.push(neighbor);
            }
        }
        None
    }
}

/// Two breadth-first waves, one from the start and one from the target,
/// that stop as soon as they touch.
#[derive(Debug, Default)]
pub struct BidirectionalSearch {
    meeting_point: Option<Position>,
}

impl BidirectionalSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the two waves met in the most recent search.
    pub fn meeting_point(&self) -> Option<Position> {
        self.meeting_point
    }
}

/// Start to meeting point from the forward map, then meeting point's
/// backward parent out to the target.
fn join_paths(forward: &ParentMap, backward: &ParentMap, meeting: Position) -> Vec<Position> {
    let mut path = reconstruct_path(forward, meeting);
    let mut next = backward.get(&meeting).copied().flatten();
    while let Some(pos) = next {
        path.push(pos);
        next = backward.get(&pos).copied().flatten();
        if path.len() > forward.len() + backward.len() {
            break;
        }
    }
    path
}

impl SearchAlgorithm for BidirectionalSearch {
    fn name(&self) -> &'static str {
        "Bidirectional"
    }

    fn search(&mut self, env: &mut dyn Environment) -> SearchResult {
        let start = env.start();
        let target = env.target();
        self.meeting_point = None;

        let mut state = TraversalState::new();
        if start == target {
            state.explored.insert(start);
            self.meeting_point = Some(start);
            return state.into_result(Some(vec![start]));
        }

        let mut forward = Wavefront::rooted_at(start);
        let mut backward = Wavefront::rooted_at(target);
        let mut meeting = None;

        while !(forward.frontier.is_empty() && backward.frontier.is_empty()) {
            if state.check_dynamic_obstacles(env).is_some() {
                purge_frontier(&*env, &mut forward.frontier, &mut forward.pending);
                purge_frontier(&*env, &mut backward.frontier, &mut backward.pending);
            }
            if forward.frontier.is_empty() && backward.frontier.is_empty() {
                break;
            }

            let mut snapshot = forward.frontier.snapshot();
            snapshot.extend(backward.frontier.snapshot());
            state.frontier_history.push(snapshot);

            meeting = forward.step(&*env, &backward, &mut state.explored);
            if meeting.is_some() {
                break;
            }
            meeting = backward.step(&*env, &forward, &mut state.explored);
            if meeting.is_some() {
                break;
            }
        }

        self.meeting_point = meeting;
        let path = meeting.map(|m| join_paths(&forward.parents, &backward.parents, m));
        debug!(
            found = path.is_some(),
            explored = state.explored.len(),
            meeting = ?meeting,
            "bidirectional finished"
        );
        state.into_result(path)
    }

    fn usage_stats(&self) -> AlgorithmStats {
        AlgorithmStats::Bidirectional { meeting_point: self.meeting_point }
    }
}
