use crate::environment::{Environment, Position};
use crate::error::GridError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::debug;

const DEFAULT_SEED: u64 = 0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Wall,
    Obstacle,
}

/// Rectangular grid with static walls and probabilistically spawned
/// dynamic obstacles.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    start: Position,
    target: Position,
    walls: FxHashSet<Position>,
    dynamic_obstacles: FxHashSet<Position>,
    spawn_probability: f64,
    rng: StdRng,
}

impl Grid {
    /// Builds an empty grid. Dynamic spawning is off until
    /// [`Grid::with_spawn_probability`] is called.
    pub fn new(width: i32, height: i32, start: Position, target: Position) -> Result<Self, GridError> {
        let grid = Grid {
            width,
            height,
            start,
            target,
            walls: FxHashSet::default(),
            dynamic_obstacles: FxHashSet::default(),
            spawn_probability: 0.0,
            rng: StdRng::seed_from_u64(DEFAULT_SEED),
        };

        if !grid.in_bounds(start) {
            return Err(GridError::StartOutOfBounds { pos: start, width, height });
        }
        if !grid.in_bounds(target) {
            return Err(GridError::TargetOutOfBounds { pos: target, width, height });
        }
        Ok(grid)
    }

    pub fn with_spawn_probability(mut self, probability: f64) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidSpawnProbability(probability));
        }
        self.spawn_probability = probability;
        Ok(self)
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn spawn_probability(&self) -> f64 {
        self.spawn_probability
    }

    pub fn walls(&self) -> &FxHashSet<Position> {
        &self.walls
    }

    pub fn dynamic_obstacles(&self) -> &FxHashSet<Position> {
        &self.dynamic_obstacles
    }

    pub fn cell(&self, pos: Position) -> Cell {
        if self.walls.contains(&pos) {
            Cell::Wall
        } else if self.dynamic_obstacles.contains(&pos) {
            Cell::Obstacle
        } else {
            Cell::Empty
        }
    }

    /// Places a static wall. Returns `false` for out-of-bounds cells, the
    /// start, the target, or a cell that is already a wall.
    pub fn add_wall(&mut self, pos: Position) -> bool {
        if !self.in_bounds(pos) || pos == self.start || pos == self.target {
            return false;
        }
        self.walls.insert(pos)
    }

    /// Scatters up to `count` walls, giving up after `count * 10` draws.
    /// Returns the number actually placed.
    pub fn add_walls_randomly(&mut self, count: usize) -> usize {
        let mut placed = 0;
        let mut attempts = 0;
        let max_attempts = count * 10;

        while placed < count && attempts < max_attempts {
            let pos = Position::new(
                self.rng.gen_range(0..self.width),
                self.rng.gen_range(0..self.height),
            );
            if self.add_wall(pos) {
                placed += 1;
            }
            attempts += 1;
        }
        placed
    }

    /// With probability `spawn_probability`, blocks one free cell chosen
    /// uniformly at random.
    pub fn spawn_dynamic_obstacle(&mut self) -> Option<Position> {
        if self.spawn_probability <= 0.0 || self.rng.gen::<f64>() >= self.spawn_probability {
            return None;
        }

        let free: Vec<Position> = (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| Position::new(x, y)))
            .filter(|pos| {
                *pos != self.start
                    && *pos != self.target
                    && !self.walls.contains(pos)
                    && !self.dynamic_obstacles.contains(pos)
            })
            .collect();

        let pos = *free.choose(&mut self.rng)?;
        self.dynamic_obstacles.insert(pos);
        debug!(x = pos.x, y = pos.y, "dynamic obstacle spawned");
        Some(pos)
    }

    pub fn clear_dynamic_obstacles(&mut self) {
        self.dynamic_obstacles.clear();
    }

    /// Text picture of the grid with an optional path and explored overlay.
    pub fn render(&self, path: &[Position], explored: &FxHashSet<Position>) -> String {
        let on_path: FxHashSet<Position> = path.iter().copied().collect();
        let mut out = String::new();
        out.push_str("Legend: S=Start, T=Target, #=Wall, O=Obstacle, *=Path, +=Explored, .=Empty\n");

        out.push_str("   ");
        for x in 0..self.width {
            out.push_str(&format!("{:2}", x % 10));
        }
        out.push('\n');

        for y in 0..self.height {
            out.push_str(&format!("{:2} ", y));
            for x in 0..self.width {
                let pos = Position::new(x, y);
                let glyph = if pos == self.start {
                    'S'
                } else if pos == self.target {
                    'T'
                } else {
                    match self.cell(pos) {
                        Cell::Wall => '#',
                        Cell::Obstacle => 'O',
                        Cell::Empty if on_path.contains(&pos) => '*',
                        Cell::Empty if explored.contains(&pos) => '+',
                        Cell::Empty => '.',
                    }
                };
                out.push(' ');
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

impl Environment for Grid {
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
        !self.in_bounds(pos) || self.walls.contains(&pos) || self.dynamic_obstacles.contains(&pos)
    }

    fn spawn_obstacle(&mut self) -> Option<Position> {
        self.spawn_dynamic_obstacle()
    }
}
