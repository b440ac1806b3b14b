use crate::environment::Position;

/// Configuration errors raised while building a [`crate::Grid`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("start position {pos:?} is outside the {width}x{height} grid")]
    StartOutOfBounds {
        pos: Position,
        width: i32,
        height: i32,
    },

    #[error("target position {pos:?} is outside the {width}x{height} grid")]
    TargetOutOfBounds {
        pos: Position,
        width: i32,
        height: i32,
    },

    #[error("spawn probability must be within [0, 1], got {0}")]
    InvalidSpawnProbability(f64),
}

/// Errors surfaced by the comparison runner.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("unknown algorithm '{0}', expected bfs, dfs, ucs, dls, iddfs, bidirectional or all")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}
