use std::collections::VecDeque;

use crate::grid::{Direction, OccupancyMap, Pos};
use crate::turns::can_change_direction;

/// Starting body, head first.
pub const INITIAL_BODY: [Pos; 3] = [Pos::new(3, 1), Pos::new(2, 1), Pos::new(1, 1)];
pub const INITIAL_VELOCITY: Direction = Direction::East;

/// Ordered body cells, head at the front, along with the occupancy map that
/// mirrors them. Every mutation goes through methods that update both.
#[derive(Clone, Debug)]
pub struct Snake {
    segments: VecDeque<Pos>,
    occupancy: OccupancyMap,
    velocity: Direction,
    should_grow: bool,
}

impl Snake {
    pub fn new(side: u16) -> Self {
        let mut snake = Snake {
            segments: VecDeque::with_capacity(side as usize * side as usize),
            occupancy: OccupancyMap::new(side),
            velocity: INITIAL_VELOCITY,
            should_grow: false,
        };
        snake.reset();
        snake
    }

    /// Back to the starting layout on an empty grid.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.occupancy.clear();
        for pos in INITIAL_BODY {
            self.push_tail(pos);
        }
        self.velocity = INITIAL_VELOCITY;
        self.should_grow = false;
    }

    pub fn head(&self) -> Pos {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = Pos> + '_ {
        self.segments.iter().copied()
    }

    /// The segments on either side of segment `i`: (toward the head, toward the tail).
    pub fn neighbors(&self, i: usize) -> (Option<Pos>, Option<Pos>) {
        if i >= self.segments.len() {
            return (None, None);
        }
        let before = i.checked_sub(1).and_then(|j| self.segments.get(j).copied());
        let after = self.segments.get(i + 1).copied();
        (before, after)
    }

    pub fn velocity(&self) -> Direction {
        self.velocity
    }

    /// Returns whether the turn was taken.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if can_change_direction(self.velocity, dir) {
            self.velocity = dir;
            true
        } else {
            false
        }
    }

    pub fn should_grow(&self) -> bool {
        self.should_grow
    }

    pub fn set_should_grow(&mut self, grow: bool) {
        self.should_grow = grow;
    }

    pub fn occupancy(&self) -> &OccupancyMap {
        &self.occupancy
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.occupancy.is_occupied(pos)
    }

    pub fn push_head(&mut self, pos: Pos) {
        self.segments.push_front(pos);
        self.occupancy.set(pos, true);
    }

    /// Puts a segment back behind the tail tip.
    pub fn push_tail(&mut self, pos: Pos) {
        self.segments.push_back(pos);
        self.occupancy.set(pos, true);
    }

    /// Removes the tail tip and frees its cell. The head is never removed.
    pub fn pop_tail(&mut self) -> Option<Pos> {
        if self.segments.len() < 2 {
            return None;
        }
        let tip = self.segments.pop_back()?;
        self.occupancy.set(tip, false);
        Some(tip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let snake = Snake::new(15);

        let body: Vec<Pos> = snake.segments().collect();
        assert_eq!(body, INITIAL_BODY.to_vec());
        assert_eq!(snake.head(), Pos::new(3, 1));
        assert_eq!(snake.segments().last(), Some(Pos::new(1, 1)));
        assert_eq!(snake.velocity(), Direction::East);
        assert!(!snake.should_grow());
        assert_eq!(snake.occupancy().occupied_count(), 3);
        for pos in INITIAL_BODY {
            assert!(snake.is_occupied(pos));
        }
    }

    #[test]
    fn test_neighbors() {
        let snake = Snake::new(15);

        assert_eq!(snake.neighbors(0), (None, Some(Pos::new(2, 1))));
        assert_eq!(
            snake.neighbors(1),
            (Some(Pos::new(3, 1)), Some(Pos::new(1, 1)))
        );
        assert_eq!(snake.neighbors(2), (Some(Pos::new(2, 1)), None));
        assert_eq!(snake.neighbors(3), (None, None));
        assert_eq!(snake.neighbors(usize::MAX), (None, None));
    }

    #[test]
    fn test_push_and_pop_track_occupancy() {
        let mut snake = Snake::new(15);

        snake.push_head(Pos::new(4, 1));
        assert!(snake.is_occupied(Pos::new(4, 1)));
        assert_eq!(snake.len(), 4);

        assert_eq!(snake.pop_tail(), Some(Pos::new(1, 1)));
        assert!(!snake.is_occupied(Pos::new(1, 1)));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.occupancy().occupied_count(), snake.len());

        snake.push_tail(Pos::new(1, 1));
        assert_eq!(snake.segments().last(), Some(Pos::new(1, 1)));
        assert_eq!(snake.occupancy().occupied_count(), 4);
    }

    #[test]
    fn test_head_is_never_popped() {
        let mut snake = Snake::new(15);
        assert!(snake.pop_tail().is_some());
        assert!(snake.pop_tail().is_some());
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.head(), Pos::new(3, 1));
        assert!(snake.is_occupied(Pos::new(3, 1)));
    }

    #[test]
    fn test_turn() {
        let mut snake = Snake::new(15);

        // Can't reverse direction
        assert!(!snake.turn(Direction::West));
        assert_eq!(snake.velocity(), Direction::East);

        assert!(snake.turn(Direction::North));
        assert_eq!(snake.velocity(), Direction::North);

        assert!(snake.turn(Direction::North));
        assert!(!snake.turn(Direction::South));
        assert_eq!(snake.velocity(), Direction::North);
    }

    #[test]
    fn test_reset() {
        let mut snake = Snake::new(15);
        snake.push_head(Pos::new(4, 1));
        snake.push_head(Pos::new(4, 2));
        snake.turn(Direction::South);
        snake.set_should_grow(true);

        snake.reset();
        assert_eq!(snake.segments().collect::<Vec<_>>(), INITIAL_BODY.to_vec());
        assert_eq!(snake.velocity(), Direction::East);
        assert!(!snake.should_grow());
        assert_eq!(snake.occupancy().occupied_count(), 3);
        assert!(!snake.is_occupied(Pos::new(4, 2)));
    }
}
