use rand::Rng;
use rand::seq::IteratorRandom;

use super::grid::{Cell, Grid};
use super::snake::Snake;

// Rejection samples to try before switching to a sweep of free cells.
const SAMPLES_PER_CELL: usize = 2;

/// Pick a uniformly random cell not covered by `snake`.
///
/// Samples the whole grid and retries on occupied cells. Once the board is so
/// full that sampling keeps missing, chooses among the remaining free cells
/// directly. Returns `None` only when the snake fills the grid.
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    if grid.area() == 0 {
        return None;
    }
    for _ in 0..grid.area() * SAMPLES_PER_CELL {
        let cell = Cell::new(
            rng.gen_range(0..grid.width),
            rng.gen_range(0..grid.height),
        );
        if !snake.contains(cell) {
            return Some(cell);
        }
    }
    grid.cells().filter(|c| !snake.contains(*c)).choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Direction;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn never_on_the_snake() {
        let mut rng = SmallRng::seed_from_u64(7);
        let grid = Grid::new(6, 1);
        let snake = Snake::straight(Cell::new(4, 0), 5, Direction::Right);
        for _ in 0..200 {
            // only (5,0) is free
            assert_eq!(place_food(&mut rng, grid, &snake), Some(Cell::new(5, 0)));
        }
    }

    #[test]
    fn full_board_has_no_food() {
        let mut rng = SmallRng::seed_from_u64(1);
        let grid = Grid::new(3, 1);
        let snake = Snake::straight(Cell::new(2, 0), 3, Direction::Right);
        assert_eq!(place_food(&mut rng, grid, &snake), None);
    }

    #[test]
    fn stays_inside_the_grid() {
        let mut rng = SmallRng::seed_from_u64(99);
        let grid = Grid::new(20, 15);
        let snake = Snake::straight(Cell::new(5, 7), 3, Direction::Right);
        for _ in 0..500 {
            let food = place_food(&mut rng, grid, &snake).unwrap();
            assert!(grid.contains(food));
            assert!(!snake.contains(food));
        }
    }
}
