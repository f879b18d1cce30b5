//! Per-tick orchestration of the maze, the player, and the roaming entities.

use std::hash::Hasher;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use xxhash_rust::xxh3::Xxh3;

use crate::maze::MazeGrid;
use crate::npc::Npc;
use crate::player::{MoveIntent, Player};
use crate::types::Vec3;

pub const NPC_COUNT: usize = 10;

const CARVE_STREAM: u64 = 0;
const SPAWN_STREAM: u64 = 1;

/// One tick's worth of host input, already decoded from whatever devices
/// produced it. Look deltas arrive pre-scaled; sensitivity is an input-side
/// concern.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickInput {
    pub movement: MoveIntent,
    pub look_dx: f32,
    pub look_dy: f32,
    pub regenerate: bool,
}

/// Owner of all simulation state. Carving and spawning draw from two
/// independent streams derived from the run seed, so spawn-point draws never
/// perturb which maze a seed produces.
pub struct Simulation {
    seed: u64,
    grid: MazeGrid,
    player: Player,
    npcs: Vec<Npc>,
    carve_rng: ChaCha8Rng,
    spawn_rng: ChaCha8Rng,
}

impl Simulation {
    pub fn new(seed: u64, width: usize, height: usize) -> Self {
        let mut grid = MazeGrid::new(width, height);
        let mut carve_rng = stream_rng(seed, CARVE_STREAM);
        let mut spawn_rng = stream_rng(seed, SPAWN_STREAM);

        grid.generate(&mut carve_rng);

        let player = Player::new(grid.random_spawn_position(&mut spawn_rng));
        let npcs = (0..NPC_COUNT)
            .map(|_| {
                let position = grid.random_spawn_position(&mut spawn_rng);
                let target = grid.random_spawn_position(&mut spawn_rng);
                Npc::spawn(position, target)
            })
            .collect();

        Self { seed, grid, player, npcs, carve_rng, spawn_rng }
    }

    /// Advance one tick. Order is fixed: look, player movement, each NPC's
    /// think-then-update in roster order, and the regenerate trigger last so
    /// a fresh maze is never mixed with stale motion.
    pub fn step(&mut self, input: TickInput, dt: f32) {
        self.player.heading.apply_look(input.look_dx, input.look_dy);
        self.player.walk(&self.grid, input.movement, dt);

        for npc in &mut self.npcs {
            npc.think(&self.grid, self.player.position, &mut self.spawn_rng, dt);
            npc.update(&self.grid, &mut self.spawn_rng, dt);
        }

        if input.regenerate {
            self.regenerate();
        }
    }

    /// Throw the current layout away and carve a fresh one, then drop the
    /// player and every NPC onto it. The roster itself survives regeneration.
    fn regenerate(&mut self) {
        self.grid.reset();
        self.grid.generate(&mut self.carve_rng);

        self.player.position = self.grid.random_spawn_position(&mut self.spawn_rng);
        for npc in &mut self.npcs {
            let position = self.grid.random_spawn_position(&mut self.spawn_rng);
            let target = self.grid.random_spawn_position(&mut self.spawn_rng);
            npc.respawn(position, target);
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.grid.fingerprint());
        write_vec3(&mut hasher, self.player.position);
        hasher.write_u32(self.player.heading.yaw.to_bits());
        hasher.write_u32(self.player.heading.pitch.to_bits());
        for npc in &self.npcs {
            write_vec3(&mut hasher, npc.position);
            write_vec3(&mut hasher, npc.target);
            hasher.write_u8(npc.state as u8);
        }
        hasher.finish()
    }
}

fn write_vec3(hasher: &mut Xxh3, value: Vec3) {
    hasher.write_u32(value.x.to_bits());
    hasher.write_u32(value.y.to_bits());
    hasher.write_u32(value.z.to_bits());
}

fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(mix_seed_stream(seed, stream))
}

fn mix_seed_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}
