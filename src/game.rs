use log::{debug, info, warn};
use rand::Rng;

use crate::config::{CollisionPolicy, Config, MAX_SIDE, MIN_SIDE};
use crate::food::random_free_cell;
use crate::grid::{Direction, Pos};
use crate::snake::Snake;
use crate::turns::TurnQueue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The snake filled the board
    Won,
    /// The snake ran into itself under [`CollisionPolicy::Halt`]
    Lost,
}

/// What a single call to [`Game::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or over, nothing moved
    Skipped,
    Moved,
    Ate,
    Restarted,
    Lost,
    Won,
}

/// Read-only view handed to the renderer once per frame.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub food: Pos,
    pub side: u16,
    pub status: Status,
    pub outcome: Option<Outcome>,
    pub cells_left: usize,
}

pub struct Game<R> {
    side: u16,
    on_collision: CollisionPolicy,
    rng: R,
    snake: Snake,
    turns: TurnQueue,
    food: Pos,
    paused: bool,
    is_over: bool,
    outcome: Option<Outcome>,
    cells_left: usize,
}

impl<R: Rng> Game<R> {
    pub fn new(config: &Config, rng: R) -> Self {
        let side = config.grid_side();
        if side != config.side {
            warn!(
                "Grid side {} is outside {}..={}, using {}",
                config.side, MIN_SIDE, MAX_SIDE, side
            );
        }

        let mut game = Game {
            side,
            on_collision: config.on_collision,
            rng,
            snake: Snake::new(side),
            turns: TurnQueue::new(),
            food: Pos::new(0, 0),
            paused: false,
            is_over: false,
            outcome: None,
            cells_left: 0,
        };
        game.restart();
        game
    }

    /// Puts the game back to its starting layout from any state.
    pub fn restart(&mut self) {
        self.is_over = false;
        self.paused = false;
        self.outcome = None;
        self.turns.clear();
        self.snake.reset();
        self.cells_left = self.side as usize * self.side as usize - self.snake.len();
        self.place_food();
        debug!("Game restarted, food at {:?}", self.food);
    }

    pub fn request_restart(&mut self) {
        info!("Restart requested");
        self.restart();
    }

    pub fn toggle_pause(&mut self) {
        if self.is_over {
            return;
        }
        self.paused = !self.paused;
        debug!("Paused: {}", self.paused);
    }

    pub fn queue_turn(&mut self, dir: Direction) {
        if self.paused || self.is_over {
            return;
        }
        if !self.turns.push(dir) {
            debug!("Turn queue full, dropping {:?}", dir);
        }
    }

    pub fn force_grow(&mut self) {
        self.snake.set_should_grow(true);
    }

    pub fn status(&self) -> Status {
        if self.is_over {
            Status::GameOver
        } else if self.paused {
            Status::Paused
        } else {
            Status::Running
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            food: self.food,
            side: self.side,
            status: self.status(),
            outcome: self.outcome,
            cells_left: self.cells_left,
        }
    }

    /// Advances the snake by one cell.
    ///
    /// At most one queued turn is applied per tick. A pending growth is
    /// consumed before moving: the tail stays put and `cells_left` drops by
    /// one, and if that leaves no free cells the game is won without moving.
    /// Otherwise the tail tip is vacated first, so the head may follow it into
    /// the same cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused || self.is_over {
            return TickOutcome::Skipped;
        }

        self.resolve_turn();

        let growing = self.snake.should_grow();
        let vacated = if growing {
            self.snake.set_should_grow(false);
            self.cells_left = self.cells_left.saturating_sub(1);
            if self.cells_left == 0 {
                info!("Board filled at length {}", self.snake.len());
                self.finish(Outcome::Won);
                return TickOutcome::Won;
            }
            None
        } else {
            self.snake.pop_tail()
        };

        let new_head = self
            .snake
            .head()
            .wrapped_add(self.snake.velocity().into(), self.side);

        if self.snake.is_occupied(new_head) {
            return self.collide(new_head, vacated, growing);
        }

        self.snake.push_head(new_head);
        debug_assert_eq!(self.snake.len(), self.snake.occupancy().occupied_count());

        if new_head == self.food {
            self.snake.set_should_grow(true);
            if !self.place_food() {
                return TickOutcome::Won;
            }
            return TickOutcome::Ate;
        }

        TickOutcome::Moved
    }

    fn resolve_turn(&mut self) {
        if let Some(dir) = self.turns.pop() {
            if !self.snake.turn(dir) {
                debug!("Ignoring reversal to {:?}", dir);
            }
        }
    }

    fn collide(&mut self, at: Pos, vacated: Option<Pos>, growing: bool) -> TickOutcome {
        match self.on_collision {
            CollisionPolicy::Restart => {
                info!(
                    "Snake ran into itself at {:?} with length {}, restarting",
                    at,
                    self.snake.len()
                );
                self.restart();
                TickOutcome::Restarted
            }
            CollisionPolicy::Halt => {
                // Leave the board as it was before the fatal move
                if let Some(tip) = vacated {
                    self.snake.push_tail(tip);
                }
                if growing {
                    self.snake.set_should_grow(true);
                    self.cells_left += 1;
                }
                info!(
                    "Snake ran into itself at {:?} with length {}",
                    at,
                    self.snake.len()
                );
                self.finish(Outcome::Lost);
                TickOutcome::Lost
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.paused = true;
        self.is_over = true;
        self.outcome = Some(outcome);
    }

    /// Returns `false` when the board had no room left, which ends the game as a win.
    fn place_food(&mut self) -> bool {
        match random_free_cell(self.snake.occupancy(), &mut self.rng) {
            Some(pos) => {
                self.food = pos;
                true
            }
            None => {
                warn!("No free cell left for food");
                self.finish(Outcome::Won);
                false
            }
        }
    }
}
