pub mod bfs;
pub mod bidirectional;
pub mod common;
pub mod dfs;
pub mod dls;
pub mod frontier;
pub mod iddfs;
pub mod ucs;

use crate::error::RunError;
use common::SearchAlgorithm;
use std::fmt;
use std::str::FromStr;

pub use bfs::BreadthFirstSearch;
pub use bidirectional::BidirectionalSearch;
pub use dfs::DepthFirstSearch;
pub use dls::DepthLimitedSearch;
pub use iddfs::IterativeDeepeningDfs;
pub use ucs::UniformCostSearch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Ucs,
    Dls,
    Iddfs,
    Bidirectional,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Bfs,
        AlgorithmKind::Dfs,
        AlgorithmKind::Ucs,
        AlgorithmKind::Dls,
        AlgorithmKind::Iddfs,
        AlgorithmKind::Bidirectional,
    ];

    /// Builds a fresh engine. `depth_limit` only matters for DLS.
    pub fn build(self, depth_limit: usize) -> Box<dyn SearchAlgorithm> {
        match self {
            AlgorithmKind::Bfs => Box::new(BreadthFirstSearch::new()),
            AlgorithmKind::Dfs => Box::new(DepthFirstSearch::new()),
            AlgorithmKind::Ucs => Box::new(UniformCostSearch::new()),
            AlgorithmKind::Dls => Box::new(DepthLimitedSearch::new(depth_limit)),
            AlgorithmKind::Iddfs => Box::new(IterativeDeepeningDfs::new()),
            AlgorithmKind::Bidirectional => Box::new(BidirectionalSearch::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "bfs",
            AlgorithmKind::Dfs => "dfs",
            AlgorithmKind::Ucs => "ucs",
            AlgorithmKind::Dls => "dls",
            AlgorithmKind::Iddfs => "iddfs",
            AlgorithmKind::Bidirectional => "bidirectional",
        }
    }

    /// Parses a `--algorithm` value; `all` expands to every engine.
    pub fn parse_selection(name: &str) -> Result<Vec<AlgorithmKind>, RunError> {
        if name.eq_ignore_ascii_case("all") {
            Ok(Self::ALL.to_vec())
        } else {
            name.parse().map(|kind| vec![kind])
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(AlgorithmKind::Bfs),
            "dfs" => Ok(AlgorithmKind::Dfs),
            "ucs" => Ok(AlgorithmKind::Ucs),
            "dls" => Ok(AlgorithmKind::Dls),
            "iddfs" => Ok(AlgorithmKind::Iddfs),
            "bidirectional" | "bidi" => Ok(AlgorithmKind::Bidirectional),
            _ => Err(RunError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
