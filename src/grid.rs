use log::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Direction of the step from `from` to an adjacent `to`, counting cells
    /// across the wrap seam of a `side` x `side` torus as adjacent.
    pub fn toward(from: Pos, to: Pos, side: u16) -> Option<Direction> {
        let side = side as i32;
        let dx = to.x as i32 - from.x as i32;
        let dy = to.y as i32 - from.y as i32;
        let unit = |d: i32| match d {
            1 => 1,
            -1 => -1,
            d if d == side - 1 => -1,
            d if d == -(side - 1) => 1,
            _ => 0,
        };

        match (dx, dy) {
            (0, 0) => None,
            (dx, 0) => match unit(dx) {
                1 => Some(Direction::East),
                -1 => Some(Direction::West),
                _ => None,
            },
            (0, dy) => match unit(dy) {
                1 => Some(Direction::South),
                -1 => Some(Direction::North),
                _ => None,
            },
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => PosDelta { x: 0, y: -1 },
            Direction::South => PosDelta { x: 0, y: 1 },
            Direction::East => PosDelta { x: 1, y: 0 },
            Direction::West => PosDelta { x: -1, y: 0 },
        }
    }
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Pos { x, y }
    }

    /// Moves by `delta` on a torus: leaving one edge re-enters at the opposite one.
    pub fn wrapped_add(&self, delta: PosDelta, side: u16) -> Pos {
        let new_x = (self.x as i32 + delta.x).rem_euclid(side as i32) as u16;
        let new_y = (self.y as i32 + delta.y).rem_euclid(side as i32) as u16;
        Pos { x: new_x, y: new_y }
    }
}

/// Which cells of the square grid are covered by the snake.
#[derive(Clone, Debug)]
pub struct OccupancyMap {
    side: u16,
    cells: Vec<bool>,
    occupied: usize,
}

impl OccupancyMap {
    pub fn new(side: u16) -> Self {
        let side_len = side as usize;
        OccupancyMap {
            side,
            cells: vec![false; side_len * side_len],
            occupied: 0,
        }
    }

    pub fn side(&self) -> u16 {
        self.side
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.side && pos.y < self.side
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.side as usize + pos.x as usize)
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.index(pos).map_or(false, |i| self.cells[i])
    }

    pub fn set(&mut self, pos: Pos, value: bool) {
        let Some(i) = self.index(pos) else {
            warn!("Ignoring write to {:?} outside a {}x{} grid", pos, self.side, self.side);
            return;
        };

        match (self.cells[i], value) {
            (false, true) => self.occupied += 1,
            (true, false) => self.occupied -= 1,
            _ => {}
        }
        self.cells[i] = value;
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.occupied = 0;
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    pub fn free_count(&self) -> usize {
        self.cells.len() - self.occupied
    }
}
