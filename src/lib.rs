pub mod algorithms;
pub mod config;
pub mod environment;
pub mod error;
pub mod grid;
pub mod simulation;
pub mod statistics;

pub use algorithms::common::{SearchAlgorithm, SearchResult};
pub use environment::{Environment, Position};
pub use error::{GridError, RunError};
pub use grid::Grid;
