// Keyboard mapping. Keys follow `KeyboardEvent.key` names.

use crate::game::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// Start, pause or resume; same as the start button.
    Toggle,
    Reset,
}

impl Command {
    /// `None` for keys the game does not use.
    pub fn from_key(key: &str) -> Option<Self> {
        let cmd = match key {
            "ArrowUp" | "w" | "W" => Command::Turn(Direction::Up),
            "ArrowDown" | "s" | "S" => Command::Turn(Direction::Down),
            "ArrowLeft" | "a" | "A" => Command::Turn(Direction::Left),
            "ArrowRight" | "d" | "D" => Command::Turn(Direction::Right),
            " " | "Spacebar" => Command::Toggle,
            "r" | "R" => Command::Reset,
            _ => return None,
        };
        Some(cmd)
    }
}
