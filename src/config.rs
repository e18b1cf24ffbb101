//! Tunable game constants.
//!
//! Defaults reproduce the classic browser game: a 400x400 canvas cut into
//! 20px cells, a 150ms tick that speeds up by 5ms per food down to 50ms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Side of one grid cell in canvas pixels.
    pub cell_px: u32,
    pub base_interval_ms: u32,
    pub min_interval_ms: u32,
    pub interval_step_ms: u32,
    pub food_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            cell_px: 20,
            base_interval_ms: 150,
            min_interval_ms: 50,
            interval_step_ms: 5,
            food_reward: 10,
        }
    }
}

impl GameConfig {
    /// Default constants with the grid sized to fit a canvas of the given pixel size.
    pub fn for_canvas(width_px: u32, height_px: u32) -> Self {
        Self::default().fit_canvas(width_px, height_px)
    }

    /// Re-derive the grid from canvas pixels using this config's cell size.
    pub fn fit_canvas(mut self, width_px: u32, height_px: u32) -> Self {
        let cell = self.cell_px.max(1);
        self.cell_px = cell;
        self.grid_width = (width_px / cell) as i32;
        self.grid_height = (height_px / cell) as i32;
        self
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    /// Interval after one food is eaten, or `None` when already at the floor.
    pub fn next_interval(&self, current_ms: u32) -> Option<u32> {
        if current_ms > self.min_interval_ms {
            Some(
                current_ms
                    .saturating_sub(self.interval_step_ms)
                    .max(self.min_interval_ms),
            )
        } else {
            None
        }
    }

    /// Parse a (possibly partial) JSON object; missing keys keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas_is_twenty_by_twenty() {
        let cfg = GameConfig::for_canvas(400, 400);
        assert_eq!(cfg.grid(), Grid::new(20, 20));
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn canvas_fit_truncates_partial_cells() {
        let cfg = GameConfig::for_canvas(410, 250);
        assert_eq!((cfg.grid_width, cfg.grid_height), (20, 12));
    }

    #[test]
    fn interval_ramp_stops_at_floor() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.next_interval(150), Some(145));
        assert_eq!(cfg.next_interval(55), Some(50));
        assert_eq!(cfg.next_interval(50), None);
        assert_eq!(cfg.next_interval(52), Some(50));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(r#"{"cell_px": 10, "food_reward": 25}"#).unwrap();
        assert_eq!(cfg.cell_px, 10);
        assert_eq!(cfg.food_reward, 25);
        assert_eq!(cfg.base_interval_ms, 150);
    }
}
