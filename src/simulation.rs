use crate::algorithms::common::SearchResult;
use crate::algorithms::AlgorithmKind;
use crate::config::Config;
use crate::environment::{Environment, Position};
use crate::error::{GridError, RunError};
use crate::grid::Grid;
use crate::statistics::RunStatistics;
use pathfinding::prelude::bfs;
use std::time::Instant;
use tracing::info;

/// A seeded grid shared by every algorithm in one comparison.
#[derive(Debug, Clone)]
pub struct EnvironmentSetup {
    pub seed: u64,
    pub grid: Grid,
    pub walls_placed: usize,
}

impl EnvironmentSetup {
    /// Lays out walls from `config` using `seed`, so the same seed always
    /// yields the same grid and the same obstacle spawn sequence.
    pub fn generate(config: &Config, seed: u64) -> Result<Self, GridError> {
        let start = Position::new(config.start_x, config.start_y);
        let target = Position::new(config.target_x, config.target_y);

        let mut grid = Grid::new(config.width, config.height, start, target)?
            .with_spawn_probability(config.spawn_probability)?
            .with_seed(seed);
        let walls_placed = grid.add_walls_randomly(config.num_walls);

        info!(seed, walls = walls_placed, "generated environment");
        Ok(EnvironmentSetup { seed, grid, walls_placed })
    }

    /// A fresh copy for one run; the spawn generator restarts from the
    /// same state for every copy.
    pub fn create_grid(&self) -> Grid {
        self.grid.clone()
    }
}

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub kind: AlgorithmKind,
    pub statistics: RunStatistics,
    pub result: SearchResult,
    /// The grid as the run left it, dynamic obstacles included.
    pub final_grid: Grid,
}

pub struct Simulation {
    config: Config,
    environment: EnvironmentSetup,
    algorithms: Vec<AlgorithmKind>,
    optimal_path_length: Option<usize>,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, RunError> {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let algorithms = AlgorithmKind::parse_selection(&config.algorithm)?;
        let environment = EnvironmentSetup::generate(&config, seed)?;
        let optimal_path_length = Self::calculate_optimal_path_length(&environment.grid);

        Ok(Simulation {
            config,
            environment,
            algorithms,
            optimal_path_length,
        })
    }

    pub fn environment(&self) -> &EnvironmentSetup {
        &self.environment
    }

    pub fn optimal_path_length(&self) -> Option<usize> {
        self.optimal_path_length
    }

    /// Runs every selected algorithm on its own copy of the environment.
    pub fn run_all_algorithms(&self) -> Vec<AlgorithmResult> {
        let mut results = Vec::with_capacity(self.algorithms.len());

        for (i, &kind) in self.algorithms.iter().enumerate() {
            if !self.config.quiet {
                println!("Running algorithm {} of {}: {}", i + 1, self.algorithms.len(), kind);
            }
            results.push(self.run_algorithm(kind));
        }
        results
    }

    pub fn run_algorithm(&self, kind: AlgorithmKind) -> AlgorithmResult {
        let mut grid = self.environment.create_grid();
        let mut algorithm = kind.build(self.config.depth_limit);

        let started = Instant::now();
        let result = algorithm.search(&mut grid);
        let elapsed = started.elapsed();

        let statistics = RunStatistics::from_result(
            algorithm.name(),
            &result,
            self.optimal_path_length,
            elapsed,
            algorithm.usage_stats(),
        );
        info!(
            algorithm = algorithm.name(),
            found = result.found,
            explored = result.total_nodes_explored,
            "run complete"
        );

        AlgorithmResult {
            kind,
            statistics,
            result,
            final_grid: grid,
        }
    }

    pub fn print_header(&self) {
        let grid = &self.environment.grid;
        println!("Environment seed: {} (for reproducibility)", self.environment.seed);
        println!(
            "Grid {}x{}, Walls: {}, Spawn probability: {}",
            grid.width(),
            grid.height(),
            self.environment.walls_placed,
            grid.spawn_probability()
        );
        println!("Start: {:?}, Target: {:?}", grid.start(), grid.target());
        match self.optimal_path_length {
            Some(len) => println!("Optimal path on the static grid: {} moves", len),
            None => println!("No path exists on the static grid"),
        }
        println!();
    }

    pub fn print_comparison_results(&self, results: &[AlgorithmResult]) {
        println!("\n=== ALGORITHM COMPARISON RESULTS ===");
        println!();
        println!("{}", RunStatistics::header());
        println!("{}", "-".repeat(125));
        for result in results {
            println!("{}", result.statistics);
        }
        println!();

        if self.config.show_grid {
            for result in results {
                println!("--- {} ---", result.statistics.algorithm);
                print!("{}", result.final_grid.render(&result.result.path, &result.result.explored));
                println!();
            }
        }

        let successful: Vec<&AlgorithmResult> = results.iter().filter(|r| r.statistics.found).collect();
        if successful.is_empty() {
            println!("No algorithm reached the target.");
            return;
        }

        println!("=== PERFORMANCE ANALYSIS ===");
        if let Some(shortest) = successful.iter().min_by_key(|r| r.statistics.path_length) {
            println!(
                "Shortest path: {} ({} moves)",
                shortest.statistics.algorithm, shortest.statistics.path_length
            );
        }
        if let Some(leanest) = successful.iter().min_by_key(|r| r.statistics.nodes_explored) {
            println!(
                "Fewest nodes explored: {} ({})",
                leanest.statistics.algorithm, leanest.statistics.nodes_explored
            );
        }
        if let Some(fastest) = successful.iter().min_by_key(|r| r.statistics.elapsed) {
            println!(
                "Fastest: {} ({:.2?})",
                fastest.statistics.algorithm, fastest.statistics.elapsed
            );
        }
    }

    /// Shortest path length on the grid as it stands, ignoring spawning.
    pub fn calculate_optimal_path_length(grid: &Grid) -> Option<usize> {
        let target = grid.target();
        bfs(&grid.start(), |p| grid.neighbors(*p), |p| *p == target)
            .map(|path| path.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(algorithm: &str) -> Config {
        Config {
            width: 8,
            height: 8,
            start_x: 0,
            start_y: 0,
            target_x: 7,
            target_y: 7,
            num_walls: 0,
            spawn_probability: 0.0,
            algorithm: algorithm.to_string(),
            depth_limit: 20,
            seed: Some(3),
            quiet: true,
            ..Config::default()
        }
    }

    #[test]
    fn optimal_length_on_open_grid_is_diagonal() {
        let sim = Simulation::new(small_config("all")).unwrap();
        assert_eq!(sim.optimal_path_length(), Some(7));
    }

    #[test]
    fn runs_every_selected_algorithm() {
        let sim = Simulation::new(small_config("all")).unwrap();
        let results = sim.run_all_algorithms();
        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|r| r.statistics.found));

        let bfs = results.iter().find(|r| r.kind == AlgorithmKind::Bfs).unwrap();
        assert_eq!(bfs.statistics.path_length, 7);
        assert!((bfs.statistics.route_efficiency - 1.0).abs() < 1e-9);
    }

    #[test]
    fn environment_keeps_the_configured_seed() {
        let mut config = small_config("bfs");
        config.num_walls = 5;
        let sim = Simulation::new(config).unwrap();
        let setup = sim.environment();
        assert_eq!(setup.seed, 3);
        assert_eq!(setup.walls_placed, setup.grid.walls().len());
        assert!(setup.walls_placed <= 5);
    }

    #[test]
    fn unknown_algorithm_is_an_error() {
        let err = Simulation::new(small_config("a_star")).err().unwrap();
        assert!(matches!(err, RunError::UnknownAlgorithm(_)));
    }

    #[test]
    fn out_of_bounds_start_is_an_error() {
        let mut config = small_config("bfs");
        config.start_x = -1;
        let err = Simulation::new(config).err().unwrap();
        assert!(matches!(err, RunError::Grid(GridError::StartOutOfBounds { .. })));
    }

    #[test]
    fn same_seed_reproduces_runs() {
        let mut config = small_config("dfs");
        config.num_walls = 10;
        config.spawn_probability = 0.2;

        let a = Simulation::new(config.clone()).unwrap().run_algorithm(AlgorithmKind::Dfs);
        let b = Simulation::new(config).unwrap().run_algorithm(AlgorithmKind::Dfs);
        assert_eq!(a.result.path, b.result.path);
        assert_eq!(a.result.dynamic_obstacles_encountered, b.result.dynamic_obstacles_encountered);
    }
}
