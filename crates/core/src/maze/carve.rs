//! Randomized depth-first carving over an explicit index stack.

use rand_chacha::rand_core::Rng;

use crate::types::{CellPos, Direction};

use super::grid::MazeGrid;

impl MazeGrid {
    /// Carve the grid into a perfect maze: connected, acyclic, exactly one
    /// open route between any two cells. Expects the reset state.
    pub fn generate(&mut self, rng: &mut impl Rng) {
        let mut walk = Backtracker::new(self);
        while walk.step(self, rng) {}
    }
}

/// Depth-first walk state. The stack holds cell indices into the grid's
/// fixed array, one entry per carve, so its depth always equals the path
/// length back to the start cell.
pub(crate) struct Backtracker {
    stack: Vec<usize>,
    current: usize,
}

impl Backtracker {
    pub(crate) fn new(grid: &mut MazeGrid) -> Self {
        let start = 0;
        grid.cells[start].visited = true;
        Self { stack: Vec::new(), current: start }
    }

    /// One carve-or-backtrack step. Returns false once every reachable cell
    /// has been visited and the walk has unwound to the start.
    pub(crate) fn step(&mut self, grid: &mut MazeGrid, rng: &mut impl Rng) -> bool {
        let choices = unvisited_neighbours(grid, self.current);
        if !choices.is_empty() {
            let (direction, next) = choices[rng.next_u64() as usize % choices.len()];
            open_wall(grid, self.current, direction, next);
            grid.cells[next].visited = true;
            self.stack.push(self.current);
            self.current = next;
            return true;
        }

        match self.stack.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }
}

fn unvisited_neighbours(grid: &MazeGrid, index: usize) -> Vec<(Direction, usize)> {
    let pos = grid.position_of(index);
    let mut choices = Vec::with_capacity(4);
    for direction in Direction::ALL {
        let (dx, dy) = direction.offset();
        let neighbour = CellPos { x: pos.x + dx, y: pos.y + dy };
        if !grid.in_bounds(neighbour) {
            continue;
        }
        let neighbour_index = grid.index_of(neighbour);
        if !grid.cells[neighbour_index].visited {
            choices.push((direction, neighbour_index));
        }
    }
    choices
}

/// Opening is symmetric: the shared wall disappears from both sides.
fn open_wall(grid: &mut MazeGrid, from: usize, direction: Direction, to: usize) {
    grid.cells[from].walls[direction.index()] = false;
    grid.cells[to].walls[direction.opposite().index()] = false;
}
