use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::game::Phase;

/// Game actions that are only legal in some phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    Pause,
    Step,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::Start => "start",
            Action::Pause => "pause",
            Action::Step => "step",
        })
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("no game has been initialized")]
    Uninitialized,
    #[error("cannot {action} while the game is {phase}")]
    InvalidTransition { phase: Phase, action: Action },
    #[error("a {width}x{height} grid cannot hold the starting snake and food")]
    GridTooSmall { width: i32, height: i32 },
    #[error("invalid board layout: {0}")]
    InvalidLayout(&'static str),
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
