use crate::algorithms::common::SearchResult;
use crate::environment::Position;
use std::fmt;
use std::time::Duration;

/// Extra per-algorithm details, beyond what every [`SearchResult`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmStats {
    Basic,
    DepthLimited { depth_limit: usize },
    Deepening { iterations: usize },
    Bidirectional { meeting_point: Option<Position> },
}

impl fmt::Display for AlgorithmStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmStats::Basic => write!(f, "-"),
            AlgorithmStats::DepthLimited { depth_limit } => write!(f, "limit {}", depth_limit),
            AlgorithmStats::Deepening { iterations } => write!(f, "{} passes", iterations),
            AlgorithmStats::Bidirectional { meeting_point: Some(pos) } => {
                write!(f, "met at ({},{})", pos.x, pos.y)
            }
            AlgorithmStats::Bidirectional { meeting_point: None } => write!(f, "no meeting"),
        }
    }
}

/// Summary of one algorithm run, as printed by the comparison runner.
#[derive(Debug, Clone)]
pub struct RunStatistics {
    pub algorithm: String,
    pub found: bool,
    pub path_length: usize,
    pub nodes_explored: usize,
    pub frontier_steps: usize,
    pub peak_frontier: usize,
    pub obstacles_spawned: usize,
    pub optimal_path_length: Option<usize>,
    pub route_efficiency: f64,
    pub elapsed: Duration,
    pub details: AlgorithmStats,
}

impl RunStatistics {
    pub fn from_result(
        algorithm: &str,
        result: &SearchResult,
        optimal_path_length: Option<usize>,
        elapsed: Duration,
        details: AlgorithmStats,
    ) -> Self {
        let mut stats = RunStatistics {
            algorithm: algorithm.to_string(),
            found: result.found,
            path_length: result.path_cost().unwrap_or(0),
            nodes_explored: result.total_nodes_explored,
            frontier_steps: result.frontier_history.len(),
            peak_frontier: result.peak_frontier(),
            obstacles_spawned: result.dynamic_obstacles_encountered.len(),
            optimal_path_length,
            route_efficiency: 0.0,
            elapsed,
            details,
        };
        stats.calculate_efficiency();
        stats
    }

    /// Path moves relative to the static optimum; 1.0 means optimal.
    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match self.optimal_path_length {
            Some(optimal) if self.found && optimal > 0 => self.path_length as f64 / optimal as f64,
            Some(0) if self.found => 1.0,
            _ => 0.0,
        };
    }

    pub fn header() -> String {
        format!(
            "{:<15} {:<7} {:<7} {:<9} {:<10} {:<10} {:<10} {:<11} {:<12} {:<18}",
            "Algorithm", "Found", "Moves", "Explored", "Steps", "Peak", "Obstacles", "Efficiency", "Time", "Details"
        )
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let found = if self.found { "yes" } else { "no" };
        let moves = if self.found { self.path_length.to_string() } else { "N/A".to_string() };
        let efficiency = if self.found {
            format!("{:.3}", self.route_efficiency)
        } else {
            "-".to_string()
        };
        write!(
            f,
            "{:<15} {:<7} {:<7} {:<9} {:<10} {:<10} {:<10} {:<11} {:<12} {:<18}",
            self.algorithm,
            found,
            moves,
            self.nodes_explored,
            self.frontier_steps,
            self.peak_frontier,
            self.obstacles_spawned,
            efficiency,
            format!("{:.2?}", self.elapsed),
            self.details.to_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found_result(moves: usize) -> SearchResult {
        SearchResult {
            path: (0..=moves as i32).map(|x| Position::new(x, 0)).collect(),
            found: true,
            ..SearchResult::default()
        }
    }

    #[test]
    fn efficiency_is_moves_over_optimum() {
        let stats = RunStatistics::from_result(
            "DFS",
            &found_result(6),
            Some(4),
            Duration::ZERO,
            AlgorithmStats::Basic,
        );
        assert_eq!(stats.path_length, 6);
        assert!((stats.route_efficiency - 1.5).abs() < 1e-9);
    }

    #[test]
    fn efficiency_is_zero_when_not_found() {
        let stats = RunStatistics::from_result(
            "DLS",
            &SearchResult::default(),
            Some(4),
            Duration::ZERO,
            AlgorithmStats::DepthLimited { depth_limit: 2 },
        );
        assert!(!stats.found);
        assert_eq!(stats.route_efficiency, 0.0);
    }

    #[test]
    fn details_render_compactly() {
        let met = AlgorithmStats::Bidirectional { meeting_point: Some(Position::new(2, 1)) };
        assert_eq!(met.to_string(), "met at (2,1)");
        assert_eq!(AlgorithmStats::Deepening { iterations: 7 }.to_string(), "7 passes");
    }
}
