//! Wall-maze domain split into storage/query and carving submodules.

mod carve;
mod grid;

pub use grid::{CELL_SIZE, Cell, MazeGrid, WALL_HEIGHT, WALL_THICKNESS};
