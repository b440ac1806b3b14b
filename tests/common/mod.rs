#![allow(dead_code)]

use dynamic_search::algorithms::AlgorithmKind;
use dynamic_search::environment::{Environment, Position};
use dynamic_search::grid::Grid;
use dynamic_search::SearchResult;
use pathfinding::prelude::bfs;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

pub fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

pub fn open_grid(width: i32, height: i32, start: Position, target: Position) -> Grid {
    Grid::new(width, height, start, target).unwrap()
}

pub fn walled_grid(size: i32, walls: &[(i32, i32)]) -> Grid {
    let mut grid = open_grid(size, size, p(0, 0), p(size - 1, size - 1));
    for &(x, y) in walls {
        assert!(grid.add_wall(p(x, y)));
    }
    grid
}

pub fn random_grid(size: i32, walls: usize, seed: u64) -> Grid {
    let mut grid = open_grid(size, size, p(0, 0), p(size - 1, size - 1)).with_seed(seed);
    grid.add_walls_randomly(walls);
    grid
}

/// Brute-force shortest path length, in moves.
pub fn oracle_moves(grid: &Grid) -> Option<usize> {
    let target = grid.target();
    bfs(&grid.start(), |pos| grid.neighbors(*pos), |pos| *pos == target).map(|path| path.len() - 1)
}

pub fn run(kind: AlgorithmKind, env: &mut dyn Environment, depth_limit: usize) -> SearchResult {
    kind.build(depth_limit).search(env)
}

/// Endpoints match and every move goes to one of the eight neighbors.
pub fn assert_well_formed(result: &SearchResult, start: Position, target: Position) {
    assert!(result.found);
    assert!(!result.explored.is_empty());
    assert_eq!(result.path.first(), Some(&start));
    assert_eq!(result.path.last(), Some(&target));
    for pair in result.path.windows(2) {
        assert!(pair[0].is_adjacent(&pair[1]), "{:?} -> {:?} is not a single move", pair[0], pair[1]);
    }
}

/// Environment whose obstacle spawns follow a fixed script, one entry per
/// spawn call.
pub struct ScriptedEnv {
    pub width: i32,
    pub height: i32,
    pub start: Position,
    pub target: Position,
    pub walls: FxHashSet<Position>,
    pub obstacles: FxHashSet<Position>,
    pub script: VecDeque<Option<Position>>,
    pub spawn_calls: usize,
}

impl ScriptedEnv {
    pub fn open(size: i32, script: Vec<Option<Position>>) -> Self {
        ScriptedEnv {
            width: size,
            height: size,
            start: p(0, 0),
            target: p(size - 1, size - 1),
            walls: FxHashSet::default(),
            obstacles: FxHashSet::default(),
            script: script.into(),
            spawn_calls: 0,
        }
    }
}

impl Environment for ScriptedEnv {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn start(&self) -> Position {
        self.start
    }

    fn target(&self) -> Position {
        self.target
    }

    fn is_blocked(&self, pos: Position) -> bool {
        !self.in_bounds(pos) || self.walls.contains(&pos) || self.obstacles.contains(&pos)
    }

    fn spawn_obstacle(&mut self) -> Option<Position> {
        self.spawn_calls += 1;
        let pos = self.script.pop_front().flatten()?;
        self.obstacles.insert(pos);
        Some(pos)
    }
}
