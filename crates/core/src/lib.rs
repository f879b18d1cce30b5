pub mod collision;
pub mod maze;
pub mod npc;
pub mod player;
pub mod sim;
pub mod types;

pub use maze::{CELL_SIZE, Cell, MazeGrid, WALL_HEIGHT, WALL_THICKNESS};
pub use npc::{NPC_SPEED, Npc, THINK_INTERVAL};
pub use player::{Heading, MoveIntent, PITCH_LIMIT, PLAYER_SPEED, Player};
pub use sim::{NPC_COUNT, Simulation, TickInput};
pub use types::*;
