/// A grid coordinate. `y` grows downward, so North is `y - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True when `other` is one of the eight cells around `self`.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx.max(dy) == 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

/// Neighbor priority order: N, E, S, SE, W, NW, NE, SW.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (1, 1),
    (-1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// The world a search runs in.
///
/// Blocked state may change between two calls (that is what
/// [`Environment::spawn_obstacle`] does), so callers must re-query
/// rather than cache it across expansion steps.
pub trait Environment {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn start(&self) -> Position;

    fn target(&self) -> Position;

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width() && pos.y >= 0 && pos.y < self.height()
    }

    /// Walls, dynamic obstacles and out-of-bounds cells are all blocked.
    fn is_blocked(&self, pos: Position) -> bool;

    /// In-bounds, unblocked neighbors in [`NEIGHBOR_OFFSETS`] order.
    fn neighbors(&self, pos: Position) -> Vec<Position> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|&next| self.in_bounds(next) && !self.is_blocked(next))
            .collect()
    }

    /// Attempt to spawn one dynamic obstacle. Never lands on the start,
    /// the target, a wall or an existing obstacle.
    fn spawn_obstacle(&mut self) -> Option<Position>;
}
