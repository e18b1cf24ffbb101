use std::collections::VecDeque;

use super::grid::{Cell, Direction};

/// Snake body, head first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A straight snake of `len` cells with its head at `head`, facing `dir`.
    pub fn straight(head: Cell, len: usize, dir: Direction) -> Self {
        let back = dir.opposite();
        let mut body = VecDeque::with_capacity(len);
        let mut cell = head;
        for _ in 0..len {
            body.push_back(cell);
            cell = cell.offset(back);
        }
        Self { body }
    }

    /// Build from explicit cells (head first). `None` when `cells` is empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        (!body.is_empty()).then_some(Self { body })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Every segment except the tail.
    pub fn without_tail(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter().take(self.body.len() - 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn cells(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        // never shrink below one segment
        if self.body.len() > 1 { self.body.pop_back() } else { None }
    }
}
