//! Collision predicate evaluated before the snake moves.
//!
//! The tail is excluded from the self check: without growth it vacates its
//! cell on the same tick, so the head may follow it in.

use super::grid::{Cell, Grid};
use super::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBody,
}

/// What, if anything, `head` would hit on `grid` given the body before the move.
pub fn collision(head: Cell, snake: &Snake, grid: Grid) -> Option<Collision> {
    if !grid.contains(head) {
        return Some(Collision::Wall);
    }
    if snake.without_tail().any(|&seg| seg == head) {
        return Some(Collision::SelfBody);
    }
    None
}

pub fn collides(head: Cell, snake: &Snake, grid: Grid) -> bool {
    collision(head, snake, grid).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(cells: &[(i32, i32)]) -> Snake {
        Snake::from_cells(cells.iter().map(|&c| Cell::from(c))).unwrap()
    }

    #[test]
    fn walls_on_every_side() {
        let grid = Grid::new(20, 20);
        let s = snake(&[(0, 0)]);
        assert_eq!(collision(Cell::new(-1, 5), &s, grid), Some(Collision::Wall));
        assert_eq!(collision(Cell::new(20, 5), &s, grid), Some(Collision::Wall));
        assert_eq!(collision(Cell::new(5, -1), &s, grid), Some(Collision::Wall));
        assert_eq!(collision(Cell::new(5, 20), &s, grid), Some(Collision::Wall));
        assert!(!collides(Cell::new(19, 19), &s, grid));
    }

    #[test]
    fn body_hit_but_tail_is_free() {
        let grid = Grid::new(10, 10);
        // A closed square: head (5,5) -> (5,6) -> (4,6) -> (4,5) tail
        let s = snake(&[(5, 5), (5, 6), (4, 6), (4, 5)]);
        assert!(!collides(Cell::new(4, 5), &s, grid));
        assert_eq!(
            collision(Cell::new(4, 6), &s, grid),
            Some(Collision::SelfBody)
        );
    }

    #[test]
    fn same_inputs_same_answer() {
        let grid = Grid::new(8, 8);
        let s = snake(&[(3, 3), (2, 3), (1, 3)]);
        let head = Cell::new(2, 3);
        assert_eq!(collision(head, &s, grid), collision(head, &s, grid));
    }
}
