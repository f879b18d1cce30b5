//! Player orientation and collision-checked walking.

use crate::collision;
use crate::maze::MazeGrid;
use crate::types::{ACTOR_RADIUS, Vec3};

pub const PLAYER_SPEED: f32 = 3.0;
/// Pitch clamp applied where look input lands, keeping the view short of
/// straight up or down.
pub const PITCH_LIMIT: f32 = 1.5;

/// Yaw/pitch orientation with the basis vectors derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Heading {
    pub yaw: f32,
    pub pitch: f32,
}

impl Heading {
    pub fn apply_look(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw -= delta_x;
        self.pitch = (self.pitch - delta_y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }

    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }
}

/// One frame's movement intent, already resolved from whatever device
/// produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub position: Vec3,
    pub heading: Heading,
}

impl Player {
    pub fn new(position: Vec3) -> Self {
        Self { position, heading: Heading::default() }
    }

    /// Horizontal walking through the shared per-axis slide; diagonal input
    /// into a wall keeps the unblocked component.
    pub fn walk(&mut self, grid: &MazeGrid, intent: MoveIntent, dt: f32) {
        let flat_forward = self.heading.forward().horizontal().normalized();
        let right = self.heading.right();

        let mut displacement = Vec3::ZERO;
        if intent.forward {
            displacement = displacement + flat_forward.scaled(PLAYER_SPEED * dt);
        }
        if intent.back {
            displacement = displacement - flat_forward.scaled(PLAYER_SPEED * dt);
        }
        if intent.right {
            displacement = displacement + right.scaled(PLAYER_SPEED * dt);
        }
        if intent.left {
            displacement = displacement - right.scaled(PLAYER_SPEED * dt);
        }

        self.position = collision::slide(grid, self.position, displacement, ACTOR_RADIUS).position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Vec3, expected: Vec3) {
        assert!(
            actual.distance_to(expected) < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn level_heading_looks_along_positive_z() {
        let heading = Heading::default();
        assert_close(heading.forward(), Vec3::new(0.0, 0.0, 1.0));
        assert_close(heading.right(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn quarter_turn_swings_the_basis_vectors() {
        let heading = Heading { yaw: std::f32::consts::FRAC_PI_2, pitch: 0.0 };
        assert_close(heading.forward(), Vec3::new(1.0, 0.0, 0.0));
        assert_close(heading.right(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn pitch_saturates_at_the_clamp() {
        let mut heading = Heading::default();
        heading.apply_look(0.0, -10.0);
        assert_eq!(heading.pitch, PITCH_LIMIT);
        heading.apply_look(0.0, 25.0);
        assert_eq!(heading.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn looking_up_does_not_slow_walking() {
        let grid = MazeGrid::new(1, 1);
        let mut level = Player::new(Vec3::ZERO);
        let mut tilted = Player::new(Vec3::ZERO);
        tilted.heading.pitch = 1.0;

        let intent = MoveIntent { forward: true, ..MoveIntent::default() };
        level.walk(&grid, intent, 0.05);
        tilted.walk(&grid, intent, 0.05);

        assert_close(level.position, tilted.position);
    }

    #[test]
    fn walking_into_a_sealed_cell_wall_stops_the_player() {
        let grid = MazeGrid::new(1, 1);
        let mut player = Player::new(Vec3::ZERO);
        player.walk(&grid, MoveIntent { forward: true, ..MoveIntent::default() }, 1.0);
        assert_eq!(player.position, Vec3::ZERO);
    }

    #[test]
    fn walking_moves_at_player_speed_when_clear() {
        let mut grid = MazeGrid::new(1, 3);
        for cell in &mut grid.cells {
            cell.walls = [false; 4];
        }
        let mut player = Player::new(Vec3::ZERO);
        player.walk(&grid, MoveIntent { forward: true, ..MoveIntent::default() }, 0.1);
        assert_close(player.position, Vec3::new(0.0, 0.0, PLAYER_SPEED * 0.1));
    }
}
