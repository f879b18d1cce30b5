//! Keyboard and mouse collection for one rendered frame.

use maze_core::{MoveIntent, TickInput};
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed, mouse_position};

/// Radians of yaw/pitch per pixel of mouse travel.
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.003;

/// Remembers the cursor between frames so each frame sees a pixel delta even
/// while the cursor is grabbed.
#[derive(Default)]
pub struct MouseTracker {
    last: Option<(f32, f32)>,
}

impl MouseTracker {
    /// Delta since the previous sample. The first sample after a reset is a
    /// zero delta, so re-grabbing the cursor never produces a view jump.
    pub fn delta(&mut self, current: (f32, f32)) -> (f32, f32) {
        let delta = match self.last {
            Some((x, y)) => (current.0 - x, current.1 - y),
            None => (0.0, 0.0),
        };
        self.last = Some(current);
        delta
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

pub fn capture_tick_input(mouse: &mut MouseTracker, sensitivity: f32) -> TickInput {
    let movement = MoveIntent {
        forward: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        back: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
    };
    let (delta_x, delta_y) = mouse.delta(mouse_position());

    TickInput {
        movement,
        look_dx: delta_x * sensitivity,
        look_dy: delta_y * sensitivity,
        regenerate: is_key_pressed(KeyCode::R),
    }
}
