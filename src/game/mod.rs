//! Snake game state machine.
//!
//! `GameState` is a plain value: the driver owns it, feeds it direction
//! requests between ticks and calls [`GameState::step`] once per tick with an
//! RNG for food placement. Nothing in here knows about timers or the DOM.
//!
//! Phases: `Ready|Paused --start--> Running --pause--> Paused`, and
//! `Running --collision--> GameOver`. Reset is a fresh [`GameState::initialize`].

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::{Action, GameError};

pub mod collision;
pub mod food;
mod grid;
mod snake;

pub use collision::{Collision, collides, collision};
pub use food::place_food;
pub use grid::{Cell, Direction, Grid};
pub use snake::Snake;

pub const INITIAL_SNAKE_LEN: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    Ready,
    Running,
    Paused,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Ready => "ready",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "over",
        })
    }
}

/// Result of a tick that did not end the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    pub score: u32,
    pub ate: bool,
    /// The tick interval shrank; the driver must re-arm its timer.
    pub interval_changed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Continued(Advance),
    /// The move was rejected; the board still shows the last valid frame.
    Collided(Collision),
    /// The snake covers every cell and no food can be placed.
    Cleared,
}

impl StepOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, StepOutcome::Continued(_))
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Cell,
    direction: Direction,
    pending: Direction,
    score: u32,
    interval_ms: u32,
    phase: Phase,
}

impl GameState {
    /// Fresh game: three cells heading right from the left-centre, score 0,
    /// base speed, food placed off the snake.
    pub fn initialize<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let grid = config.grid();
        if grid.width < INITIAL_SNAKE_LEN as i32 || grid.height < 1 || grid.area() <= INITIAL_SNAKE_LEN {
            return Err(GameError::GridTooSmall {
                width: grid.width,
                height: grid.height,
            });
        }
        let head = Cell::new((grid.width / 4).max(INITIAL_SNAKE_LEN as i32 - 1), grid.height / 2);
        let snake = Snake::straight(head, INITIAL_SNAKE_LEN, Direction::Right);
        let food = place_food(rng, grid, &snake).ok_or(GameError::GridTooSmall {
            width: grid.width,
            height: grid.height,
        })?;
        Ok(Self::assemble(config, snake, food, Direction::Right))
    }

    /// A Ready game from an explicit board, for scripted setups.
    ///
    /// Segments and food must lie on the grid; overlaps are not checked.
    pub fn with_layout(
        config: GameConfig,
        cells: impl IntoIterator<Item = Cell>,
        food: Cell,
        direction: Direction,
    ) -> Result<Self, GameError> {
        let grid = config.grid();
        let snake = Snake::from_cells(cells).ok_or(GameError::InvalidLayout("empty snake"))?;
        if !snake.iter().all(|&c| grid.contains(c)) {
            return Err(GameError::InvalidLayout("snake outside the grid"));
        }
        if !grid.contains(food) {
            return Err(GameError::InvalidLayout("food outside the grid"));
        }
        Ok(Self::assemble(config, snake, food, direction))
    }

    fn assemble(config: GameConfig, snake: Snake, food: Cell, direction: Direction) -> Self {
        Self {
            config,
            grid: config.grid(),
            snake,
            food,
            direction,
            pending: direction,
            score: 0,
            interval_ms: config.base_interval_ms,
            phase: Phase::Ready,
        }
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Ready | Phase::Paused => {
                self.phase = Phase::Running;
                Ok(())
            }
            phase => Err(GameError::InvalidTransition {
                phase,
                action: Action::Start,
            }),
        }
    }

    pub fn pause(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                Ok(())
            }
            phase => Err(GameError::InvalidTransition {
                phase,
                action: Action::Pause,
            }),
        }
    }

    /// Queue a turn for the next step. A reversal into the neck is ignored and
    /// reported as `false`; same or perpendicular requests always replace the
    /// pending direction.
    pub fn apply_direction(&mut self, requested: Direction) -> bool {
        if requested == self.direction.opposite() {
            return false;
        }
        self.pending = requested;
        true
    }

    /// Advance one tick.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<StepOutcome, GameError> {
        if self.phase != Phase::Running {
            return Err(GameError::InvalidTransition {
                phase: self.phase,
                action: Action::Step,
            });
        }

        self.direction = self.pending;
        let head = self.snake.head().offset(self.direction);

        if let Some(hit) = collision(head, &self.snake, self.grid) {
            self.phase = Phase::GameOver;
            return Ok(StepOutcome::Collided(hit));
        }

        self.snake.push_head(head);

        let ate = head == self.food;
        let mut interval_changed = false;
        if ate {
            self.score += self.config.food_reward;
            if let Some(next) = self.config.next_interval(self.interval_ms) {
                interval_changed = next != self.interval_ms;
                self.interval_ms = next;
            }
            match place_food(rng, self.grid, &self.snake) {
                Some(cell) => self.food = cell,
                None => {
                    self.phase = Phase::GameOver;
                    return Ok(StepOutcome::Cleared);
                }
            }
        } else {
            self.snake.pop_tail();
        }

        Ok(StepOutcome::Continued(Advance {
            score: self.score,
            ate,
            interval_changed,
        }))
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
