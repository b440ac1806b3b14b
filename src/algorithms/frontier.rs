//! Frontier disciplines shared by the search engines.
//!
//! Every discipline stores entries that carry a [`Position`]; the obstacle
//! reconciliation step only ever looks at that position, so composite
//! entries (cost-tagged, depth-tagged) expose it through [`FrontierEntry`].

use crate::environment::Position;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Anything that can sit in a frontier.
pub trait FrontierEntry {
    fn position(&self) -> Position;
}

impl FrontierEntry for Position {
    fn position(&self) -> Position {
        *self
    }
}

/// A position paired with the number of steps taken to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthEntry {
    pub position: Position,
    pub depth: usize,
}

impl FrontierEntry for DepthEntry {
    fn position(&self) -> Position {
        self.position
    }
}

/// A priority-queue entry ordered by `(cost, order)`, lowest first.
///
/// `order` is an insertion counter, so among equal costs the entry pushed
/// first pops first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostEntry {
    pub cost: u32,
    pub order: u64,
    pub position: Position,
}

impl CostEntry {
    pub fn new(cost: u32, order: u64, position: Position) -> Self {
        CostEntry { cost, order, position }
    }
}

impl FrontierEntry for CostEntry {
    fn position(&self) -> Position {
        self.position
    }
}

impl PartialOrd for CostEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparison to make BinaryHeap a min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Common interface over queue, stack and heap frontiers.
pub trait Frontier {
    type Entry: FrontierEntry;

    fn push(&mut self, entry: Self::Entry);

    fn pop(&mut self) -> Option<Self::Entry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positions currently pending, for the frontier history.
    fn snapshot(&self) -> FxHashSet<Position>;

    /// Drops every entry whose position satisfies `blocked`, keeping the
    /// discipline of the survivors intact. Returns the removed positions.
    fn purge_blocked(&mut self, blocked: &mut dyn FnMut(Position) -> bool) -> Vec<Position>;
}

/// First in, first out.
#[derive(Debug, Clone)]
pub struct FifoFrontier<T> {
    entries: VecDeque<T>,
}

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        FifoFrontier { entries: VecDeque::new() }
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FrontierEntry> Frontier for FifoFrontier<T> {
    type Entry = T;

    fn push(&mut self, entry: T) {
        self.entries.push_back(entry);
    }

    fn pop(&mut self) -> Option<T> {
        self.entries.pop_front()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn snapshot(&self) -> FxHashSet<Position> {
        self.entries.iter().map(FrontierEntry::position).collect()
    }

    fn purge_blocked(&mut self, blocked: &mut dyn FnMut(Position) -> bool) -> Vec<Position> {
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            let pos = entry.position();
            if blocked(pos) {
                removed.push(pos);
                false
            } else {
                true
            }
        });
        removed
    }
}

/// Last in, first out.
#[derive(Debug, Clone)]
pub struct LifoFrontier<T> {
    entries: Vec<T>,
}

impl<T> LifoFrontier<T> {
    pub fn new() -> Self {
        LifoFrontier { entries: Vec::new() }
    }
}

impl<T> Default for LifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FrontierEntry> Frontier for LifoFrontier<T> {
    type Entry = T;

    fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    fn pop(&mut self) -> Option<T> {
        self.entries.pop()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn snapshot(&self) -> FxHashSet<Position> {
        self.entries.iter().map(FrontierEntry::position).collect()
    }

    fn purge_blocked(&mut self, blocked: &mut dyn FnMut(Position) -> bool) -> Vec<Position> {
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            let pos = entry.position();
            if blocked(pos) {
                removed.push(pos);
                false
            } else {
                true
            }
        });
        removed
    }
}

/// Stack of `(position, depth)` pairs used by depth-limited search.
pub type DepthStack = LifoFrontier<DepthEntry>;

/// Min-heap on `(cost, order)`.
#[derive(Debug, Clone, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<CostEntry>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        PriorityFrontier { heap: BinaryHeap::new() }
    }
}

impl Frontier for PriorityFrontier {
    type Entry = CostEntry;

    fn push(&mut self, entry: CostEntry) {
        self.heap.push(entry);
    }

    fn pop(&mut self) -> Option<CostEntry> {
        self.heap.pop()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn snapshot(&self) -> FxHashSet<Position> {
        self.heap.iter().map(|entry| entry.position).collect()
    }

    fn purge_blocked(&mut self, blocked: &mut dyn FnMut(Position) -> bool) -> Vec<Position> {
        let mut removed = Vec::new();
        // BinaryHeap::retain rebuilds the heap invariant afterwards.
        self.heap.retain(|entry| {
            if blocked(entry.position) {
                removed.push(entry.position);
                false
            } else {
                true
            }
        });
        removed
    }
}
