//! Wall tests against the grid and the per-axis slide shared by every mover.

use crate::maze::{CELL_SIZE, MazeGrid};
use crate::types::{CellPos, Direction, Vec3};

/// Outcome of a per-axis slide attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slide {
    pub position: Vec3,
    pub blocked_x: bool,
    pub blocked_z: bool,
}

impl Slide {
    pub fn fully_blocked(&self) -> bool {
        self.blocked_x && self.blocked_z
    }
}

/// Whether an actor of the given radius may occupy `position`. A position
/// whose cell index falls outside the grid is always blocked, which is what
/// keeps actors inside the maze without explicit border geometry.
pub fn is_blocked(grid: &MazeGrid, position: Vec3, radius: f32) -> bool {
    let cell_x = ((position.x + CELL_SIZE * 0.5) / CELL_SIZE).floor() as i32;
    let cell_y = ((position.z + CELL_SIZE * 0.5) / CELL_SIZE).floor() as i32;

    let Some(cell) = grid.cell(CellPos { x: cell_x, y: cell_y }) else {
        return true;
    };

    // Offset within the cell, in [0, CELL_SIZE) on each axis.
    let local_x = position.x - (cell_x as f32 * CELL_SIZE - CELL_SIZE * 0.5);
    let local_z = position.z - (cell_y as f32 * CELL_SIZE - CELL_SIZE * 0.5);

    (cell.wall(Direction::North) && local_z > CELL_SIZE - radius)
        || (cell.wall(Direction::East) && local_x > CELL_SIZE - radius)
        || (cell.wall(Direction::South) && local_z < radius)
        || (cell.wall(Direction::West) && local_x < radius)
}

/// Resolve a horizontal displacement one axis at a time. Each axis candidate
/// is built from the original position and committed independently, so
/// diagonal input slides along a wall instead of freezing against it.
pub fn slide(grid: &MazeGrid, from: Vec3, delta: Vec3, radius: f32) -> Slide {
    let x_candidate = Vec3 { x: from.x + delta.x, ..from };
    let z_candidate = Vec3 { z: from.z + delta.z, ..from };
    let blocked_x = is_blocked(grid, x_candidate, radius);
    let blocked_z = is_blocked(grid, z_candidate, radius);

    let mut position = from;
    if !blocked_x {
        position.x = x_candidate.x;
    }
    if !blocked_z {
        position.z = z_candidate.z;
    }
    Slide { position, blocked_x, blocked_z }
}
