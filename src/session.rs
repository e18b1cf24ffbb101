//! Game driver: owns the current game, the RNG, the high score and the tick
//! timer, and turns player commands into state transitions.
//!
//! The timer itself lives behind [`Ticker`]; the browser uses `setInterval`,
//! tests use a recorder. The session keeps exactly one schedule alive while the
//! game is running and none otherwise.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Direction, GameState, Phase, StepOutcome};
use crate::input::Command;
use crate::storage::{HighScore, HighScoreStore};

/// Periodic timer the session drives.
pub trait Ticker {
    /// Schedule a tick every `interval_ms`, replacing any previous schedule.
    fn arm(&mut self, interval_ms: u32);
    /// Stop ticking. No tick scheduled before this call may run afterwards.
    fn cancel(&mut self);
    fn is_armed(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub outcome: StepOutcome,
    pub new_high_score: bool,
}

pub struct Session<S, T> {
    config: GameConfig,
    state: Option<GameState>,
    high_score: HighScore<S>,
    ticker: T,
    rng: SmallRng,
}

impl<S: HighScoreStore, T: Ticker> Session<S, T> {
    pub fn new(config: GameConfig, store: S, ticker: T) -> Self {
        Self::with_rng(config, store, ticker, SmallRng::from_entropy())
    }

    /// Deterministic food placement, for tests and replays of a seed.
    pub fn with_seed(config: GameConfig, store: S, ticker: T, seed: u64) -> Self {
        Self::with_rng(config, store, ticker, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, store: S, ticker: T, rng: SmallRng) -> Self {
        let high_score = HighScore::load(store);
        debug!("loaded high score {}", high_score.best());
        Self {
            config,
            state: None,
            high_score,
            ticker,
            rng,
        }
    }

    /// Start over with a fresh Ready game. Any running timer is cancelled.
    pub fn initialize(&mut self) -> Result<&GameState, GameError> {
        self.ticker.cancel();
        let state = GameState::initialize(self.config, &mut self.rng)?;
        Ok(&*self.state.insert(state))
    }

    /// Replace the current game with a prepared one (see [`GameState::with_layout`]).
    pub fn load(&mut self, state: GameState) {
        self.ticker.cancel();
        self.state = Some(state);
    }

    pub fn reset(&mut self) -> Result<&GameState, GameError> {
        self.initialize()
    }

    /// Begin or resume play, creating a game first if there is none.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state.is_none() {
            self.initialize()?;
        }
        let state = self.state.as_mut().ok_or(GameError::Uninitialized)?;
        state.start()?;
        info!("game running at {}ms per tick", state.interval_ms());
        self.ticker.arm(state.interval_ms());
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), GameError> {
        let state = self.state.as_mut().ok_or(GameError::Uninitialized)?;
        state.pause()?;
        self.ticker.cancel();
        Ok(())
    }

    /// Start/pause button: pauses a running game, starts a fresh one after a
    /// game over, otherwise starts or resumes.
    pub fn toggle(&mut self) -> Result<(), GameError> {
        match self.phase() {
            Some(Phase::Running) => self.pause(),
            Some(Phase::GameOver) => {
                self.reset()?;
                self.start()
            }
            _ => self.start(),
        }
    }

    /// Queue a turn. Ignored unless the game is running.
    pub fn turn(&mut self, direction: Direction) -> bool {
        match self.state.as_mut() {
            Some(state) if state.is_running() => state.apply_direction(direction),
            _ => false,
        }
    }

    /// Dispatch a keyboard/button command. Rejected transitions are logged
    /// and dropped; they are normal when a key is mashed.
    pub fn handle(&mut self, command: Command) {
        let result = match command {
            Command::Turn(dir) => {
                self.turn(dir);
                Ok(())
            }
            Command::Toggle => self.toggle(),
            Command::Reset => self.reset().map(|_| ()),
        };
        if let Err(err) = result {
            debug!("ignoring {command:?}: {err}");
        }
    }

    /// One timer tick: step the game, track the high score and keep the timer
    /// in line with the game's speed.
    pub fn tick(&mut self) -> Result<TickReport, GameError> {
        let state = self.state.as_mut().ok_or(GameError::Uninitialized)?;
        let outcome = state.step(&mut self.rng)?;
        let score = state.score();
        let interval = state.interval_ms();

        let new_high_score = self.high_score.observe(score);
        if new_high_score {
            debug!("new high score {score}");
        }

        match outcome {
            StepOutcome::Continued(adv) if adv.interval_changed => {
                self.ticker.cancel();
                self.ticker.arm(interval);
            }
            StepOutcome::Continued(_) => {}
            StepOutcome::Collided(hit) => {
                self.ticker.cancel();
                info!("game over ({hit:?}) with score {score}");
            }
            StepOutcome::Cleared => {
                self.ticker.cancel();
                info!("board cleared with score {score}");
            }
        }

        Ok(TickReport {
            outcome,
            new_high_score,
        })
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.state.as_ref().map(GameState::phase)
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn store(&self) -> &S {
        self.high_score.store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct Recorder {
        armed: Option<u32>,
        log: Vec<String>,
    }

    impl Ticker for Recorder {
        fn arm(&mut self, interval_ms: u32) {
            self.armed = Some(interval_ms);
            self.log.push(format!("arm {interval_ms}"));
        }
        fn cancel(&mut self) {
            if self.armed.take().is_some() {
                self.log.push("cancel".into());
            }
        }
        fn is_armed(&self) -> bool {
            self.armed.is_some()
        }
    }

    fn session() -> Session<MemoryStore, Recorder> {
        Session::with_seed(
            GameConfig::default(),
            MemoryStore::default(),
            Recorder::default(),
            11,
        )
    }

    #[test]
    fn tick_before_initialize_is_an_error() {
        let mut s = session();
        assert_eq!(s.tick(), Err(GameError::Uninitialized));
        assert!(s.pause().is_err());
    }

    #[test]
    fn start_initializes_and_arms() {
        let mut s = session();
        s.start().unwrap();
        assert_eq!(s.phase(), Some(Phase::Running));
        assert_eq!(s.ticker().armed, Some(150));
    }

    #[test]
    fn pause_resume_cancel_and_rearm() {
        let mut s = session();
        s.start().unwrap();
        s.toggle().unwrap();
        assert_eq!(s.phase(), Some(Phase::Paused));
        assert!(!s.ticker().is_armed());
        assert!(s.tick().is_err());
        s.toggle().unwrap();
        assert_eq!(s.ticker().log, vec!["arm 150", "cancel", "arm 150"]);
    }

    #[test]
    fn turns_ignored_unless_running() {
        let mut s = session();
        s.initialize().unwrap();
        assert!(!s.turn(Direction::Up));
        s.start().unwrap();
        assert!(s.turn(Direction::Up));
        // reversal is measured against the committed direction
        assert!(!s.turn(Direction::Left));
        assert_eq!(s.state().unwrap().pending_direction(), Direction::Up);
    }

    #[test]
    fn reset_stops_the_timer() {
        let mut s = session();
        s.start().unwrap();
        s.tick().unwrap();
        s.handle(Command::Reset);
        assert_eq!(s.phase(), Some(Phase::Ready));
        assert!(!s.ticker().is_armed());
        assert_eq!(s.state().unwrap().score(), 0);
    }
}
