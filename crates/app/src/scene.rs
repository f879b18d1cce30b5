//! First-person scene: wall geometry, floor, roaming entities, camera.

use maze_core::{
    ACTOR_RADIUS, CELL_SIZE, Direction, MazeGrid, NpcState, Player, Simulation, Vec3, WALL_HEIGHT,
    WALL_THICKNESS,
};
use macroquad::prelude::{
    BLACK, BLUE, Camera3D, Color, DARKGRAY, DARKGREEN, GOLD, GRAY, LIME, ORANGE, PINK, PURPLE,
    RED, YELLOW, draw_cube, draw_cube_wires, draw_plane, draw_sphere, draw_sphere_wires,
    set_camera, set_default_camera, vec2, vec3,
};

/// Eye offset above the player's position.
pub const CAMERA_HEIGHT: f32 = 0.4;

const NPC_BODY_RADIUS: f32 = ACTOR_RADIUS * 1.5;
const INDICATOR_RADIUS: f32 = 0.1;
const INDICATOR_HEIGHT: f32 = 0.5;

const NPC_PALETTE: [Color; 5] = [ORANGE, PURPLE, LIME, GOLD, PINK];

/// One wall cube, in world coordinates. `rotated` walls run along z, the
/// rest along x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallSegment {
    pub center: Vec3,
    pub rotated: bool,
}

impl WallSegment {
    pub fn size(&self) -> Vec3 {
        if self.rotated {
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, CELL_SIZE + WALL_THICKNESS)
        } else {
            Vec3::new(CELL_SIZE + WALL_THICKNESS, WALL_HEIGHT, WALL_THICKNESS)
        }
    }
}

/// Every wall cube the grid currently calls for. Interior walls are emitted
/// once, from the cell that owns the north or east flag; south and west
/// flags only produce geometry along the maze border.
pub fn wall_segments(grid: &MazeGrid) -> Vec<WallSegment> {
    let mut segments = Vec::new();

    for x in 0..grid.width() as i32 {
        for y in 0..grid.height() as i32 {
            let Some(cell) = grid.cell(maze_core::CellPos { x, y }) else {
                continue;
            };
            let base =
                Vec3::new(x as f32 * CELL_SIZE, WALL_HEIGHT * 0.5, y as f32 * CELL_SIZE);

            if cell.wall(Direction::North) {
                let center = Vec3 { z: base.z + CELL_SIZE * 0.5, ..base };
                segments.push(WallSegment { center, rotated: false });
            }
            if cell.wall(Direction::East) {
                let center = Vec3 { x: base.x + CELL_SIZE * 0.5, ..base };
                segments.push(WallSegment { center, rotated: true });
            }
            if y == 0 && cell.wall(Direction::South) {
                let center = Vec3 { z: base.z - CELL_SIZE * 0.5, ..base };
                segments.push(WallSegment { center, rotated: false });
            }
            if x == 0 && cell.wall(Direction::West) {
                let center = Vec3 { x: base.x - CELL_SIZE * 0.5, ..base };
                segments.push(WallSegment { center, rotated: true });
            }
        }
    }

    segments
}

/// First-person camera at the player's eye, looking along the heading.
pub fn camera(player: &Player) -> Camera3D {
    let eye = Vec3 { y: player.position.y + CAMERA_HEIGHT, ..player.position };
    let target = eye + player.heading.forward();
    Camera3D {
        position: render_vec(eye),
        target: render_vec(target),
        up: vec3(0.0, 1.0, 0.0),
        fovy: 60.0,
        ..Default::default()
    }
}

pub fn state_indicator_color(state: NpcState) -> Color {
    match state {
        NpcState::Wander => GRAY,
        NpcState::Chase => YELLOW,
        NpcState::Flee => RED,
        NpcState::Patrol => BLUE,
    }
}

pub fn npc_body_color(index: usize) -> Color {
    NPC_PALETTE[index % NPC_PALETTE.len()]
}

pub fn draw_scene(sim: &Simulation) {
    set_camera(&camera(sim.player()));

    for segment in wall_segments(sim.grid()) {
        let center = render_vec(segment.center);
        let size = render_vec(segment.size());
        draw_cube(center, size, None, DARKGRAY);
        draw_cube_wires(center, size, BLACK);
    }

    let width = sim.grid().width() as f32;
    let height = sim.grid().height() as f32;
    draw_plane(
        vec3(width / 2.0 - 0.5, 0.0, height / 2.0 - 0.5),
        vec2(width, height),
        None,
        DARKGREEN,
    );

    for (index, npc) in sim.npcs().iter().enumerate() {
        let body = render_vec(npc.position);
        draw_sphere(body, NPC_BODY_RADIUS, None, npc_body_color(index));
        draw_sphere_wires(body, NPC_BODY_RADIUS, None, BLACK);

        let indicator = render_vec(npc.position + Vec3::new(0.0, INDICATOR_HEIGHT, 0.0));
        draw_sphere(indicator, INDICATOR_RADIUS, None, state_indicator_color(npc.state));
    }

    set_default_camera();
}

fn render_vec(value: Vec3) -> macroquad::prelude::Vec3 {
    vec3(value.x, value.y, value.z)
}
