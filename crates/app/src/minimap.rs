//! Fixed-size 2D projection of the maze, drawn into the bottom-right corner.

use maze_core::{CELL_SIZE, Direction, MazeGrid, Simulation};
use macroquad::prelude::{
    BLACK, Color, DARKGRAY, RED, WHITE, YELLOW, draw_circle, draw_line, draw_rectangle,
    draw_text,
};

pub const MINIMAP_SIZE: f32 = 150.0;
pub const MINIMAP_MARGIN: f32 = 10.0;

const WALL_LINE_PX: f32 = 2.0;
const NPC_DOT_PX: f32 = 3.0;
const PLAYER_DOT_PX: f32 = 4.0;

/// Pixel frame of the minimap for the current screen size. World +x maps to
/// the right and world +z down the screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapFrame {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_px: f32,
}

impl MinimapFrame {
    pub fn for_screen(
        screen_width: f32,
        screen_height: f32,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            origin_x: screen_width - MINIMAP_SIZE - MINIMAP_MARGIN,
            origin_y: screen_height - MINIMAP_SIZE - MINIMAP_MARGIN,
            cell_px: MINIMAP_SIZE / grid_width.max(grid_height) as f32,
        }
    }

    /// Map a horizontal world position onto the minimap. The half-cell shift
    /// keeps cell centers in the middle of their painted squares.
    pub fn project(&self, world_x: f32, world_z: f32) -> (f32, f32) {
        (
            self.origin_x + (world_x / CELL_SIZE + 0.5) * self.cell_px,
            self.origin_y + (world_z / CELL_SIZE + 0.5) * self.cell_px,
        )
    }
}

pub fn draw_minimap(sim: &Simulation, screen_width: f32, screen_height: f32) {
    let frame = MinimapFrame::for_screen(
        screen_width,
        screen_height,
        sim.grid().width(),
        sim.grid().height(),
    );

    draw_rectangle(
        frame.origin_x - 5.0,
        frame.origin_y - 5.0,
        MINIMAP_SIZE + 10.0,
        MINIMAP_SIZE + 10.0,
        Color { a: 0.7, ..BLACK },
    );

    draw_cells_and_walls(sim.grid(), frame);

    for (index, npc) in sim.npcs().iter().enumerate() {
        let (x, y) = frame.project(npc.position.x, npc.position.z);
        draw_circle(x, y, NPC_DOT_PX, crate::scene::npc_body_color(index));
    }

    let player = sim.player();
    let (player_x, player_y) = frame.project(player.position.x, player.position.z);
    draw_circle(player_x, player_y, PLAYER_DOT_PX, RED);

    // Yaw tick showing which way the player faces.
    let tick_length = frame.cell_px * 0.6;
    draw_line(
        player_x,
        player_y,
        player_x + player.heading.yaw.sin() * tick_length,
        player_y + player.heading.yaw.cos() * tick_length,
        WALL_LINE_PX,
        YELLOW,
    );

    draw_text("MAP", frame.origin_x + 5.0, frame.origin_y - 8.0, 15.0, WHITE);
}

fn draw_cells_and_walls(grid: &MazeGrid, frame: MinimapFrame) {
    for x in 0..grid.width() as i32 {
        for y in 0..grid.height() as i32 {
            let Some(cell) = grid.cell(maze_core::CellPos { x, y }) else {
                continue;
            };
            let px = frame.origin_x + x as f32 * frame.cell_px;
            let py = frame.origin_y + y as f32 * frame.cell_px;

            draw_rectangle(px, py, frame.cell_px, frame.cell_px, Color { a: 0.3, ..DARKGRAY });

            if cell.wall(Direction::North) {
                draw_line(
                    px,
                    py + frame.cell_px,
                    px + frame.cell_px,
                    py + frame.cell_px,
                    WALL_LINE_PX,
                    WHITE,
                );
            }
            if cell.wall(Direction::East) {
                draw_line(
                    px + frame.cell_px,
                    py,
                    px + frame.cell_px,
                    py + frame.cell_px,
                    WALL_LINE_PX,
                    WHITE,
                );
            }
            if y == 0 && cell.wall(Direction::South) {
                draw_line(px, py, px + frame.cell_px, py, WALL_LINE_PX, WHITE);
            }
            if x == 0 && cell.wall(Direction::West) {
                draw_line(px, py, px, py + frame.cell_px, WALL_LINE_PX, WHITE);
            }
        }
    }
}
