//! Cell and grid storage for the wall maze, plus world-space queries.

use rand_chacha::rand_core::Rng;
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{ACTOR_HEIGHT, CellPos, Direction, Vec3};

pub const CELL_SIZE: f32 = 1.0;
pub const WALL_HEIGHT: f32 = 1.5;
pub const WALL_THICKNESS: f32 = 0.1;

/// One grid square: four independent wall flags plus the transient marker
/// used while carving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub(crate) visited: bool,
    pub(crate) walls: [bool; 4],
}

impl Cell {
    fn closed() -> Self {
        Self { visited: false, walls: [true; 4] }
    }

    pub fn wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    fn wall_bits(&self) -> u8 {
        self.walls
            .iter()
            .enumerate()
            .fold(0, |bits, (index, &present)| bits | (u8::from(present) << index))
    }
}

/// Fixed-size cell grid. Allocated once at construction; `reset` and the
/// carver mutate it in place, everything else only reads.
pub struct MazeGrid {
    width: usize,
    height: usize,
    pub(crate) cells: Vec<Cell>,
}

impl MazeGrid {
    /// Dimensions of zero are a programmer error, not a runtime condition.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1, "maze dimensions must be at least 1x1");
        Self { width, height, cells: vec![Cell::closed(); width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Restore the all-walls-closed, all-unvisited state without reallocating.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::closed();
        }
    }

    pub fn in_bounds(&self, pos: CellPos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    pub fn cell(&self, pos: CellPos) -> Option<&Cell> {
        self.in_bounds(pos).then(|| &self.cells[self.index_of(pos)])
    }

    pub(crate) fn index_of(&self, pos: CellPos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }

    pub(crate) fn position_of(&self, index: usize) -> CellPos {
        CellPos { x: (index % self.width) as i32, y: (index / self.width) as i32 }
    }

    /// Uniformly chosen cell center in world coordinates. Callers pass the
    /// spawn stream, never the carve stream.
    pub fn random_spawn_position(&self, rng: &mut impl Rng) -> Vec3 {
        let x = rng.next_u64() as usize % self.width;
        let y = rng.next_u64() as usize % self.height;
        Vec3::new(x as f32 * CELL_SIZE, ACTOR_HEIGHT * 0.5, y as f32 * CELL_SIZE)
    }

    /// Number of open wall-pairs; a carved grid holds exactly `w * h - 1`.
    pub fn open_passage_count(&self) -> usize {
        let mut count = 0;
        for index in 0..self.cells.len() {
            let pos = self.position_of(index);
            if pos.x + 1 < self.width as i32 && !self.cells[index].wall(Direction::East) {
                count += 1;
            }
            if pos.y + 1 < self.height as i32 && !self.cells[index].wall(Direction::North) {
                count += 1;
            }
        }
        count
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(cell.wall_bits());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
