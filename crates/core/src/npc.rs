//! Roaming entity behavior: periodic perception and decision, per-tick motion.

use rand_chacha::rand_core::Rng;

use crate::collision;
use crate::maze::MazeGrid;
use crate::types::{ACTOR_RADIUS, NpcState, Vec3};

/// Strictly below the player's speed so a chase can always be outrun.
pub const NPC_SPEED: f32 = 2.0;
/// Seconds between perception passes; motion still runs every tick.
pub const THINK_INTERVAL: f32 = 0.5;

const FLEE_RADIUS: f32 = 3.0;
const CHASE_RADIUS: f32 = 5.0;
const FLEE_RETREAT_DISTANCE: f32 = 2.0;
const WANDER_RETARGET_IN_TEN: u64 = 3;
const TARGET_DEADZONE: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Npc {
    pub position: Vec3,
    pub target: Vec3,
    pub state: NpcState,
    think_timer: f32,
}

impl Npc {
    pub fn spawn(position: Vec3, target: Vec3) -> Self {
        Self { position, target, state: NpcState::Wander, think_timer: 0.0 }
    }

    /// Drop the entity onto a fresh maze; behavior starts over from idle roam.
    pub fn respawn(&mut self, position: Vec3, target: Vec3) {
        *self = Self::spawn(position, target);
    }

    /// Timer-gated perception pass. Distance to the player picks the state:
    /// inside 3.0 retreat, inside 5.0 pursue, otherwise roam with an
    /// occasional re-rolled destination.
    pub fn think(&mut self, grid: &MazeGrid, player_position: Vec3, rng: &mut impl Rng, dt: f32) {
        self.think_timer += dt;
        if self.think_timer <= THINK_INTERVAL {
            return;
        }
        self.think_timer = 0.0;

        let distance = self.position.distance_to(player_position);
        if distance < FLEE_RADIUS {
            self.state = NpcState::Flee;
            let away = (self.position - player_position).normalized();
            self.target = self.position + away.scaled(FLEE_RETREAT_DISTANCE);
        } else if distance < CHASE_RADIUS {
            self.state = NpcState::Chase;
            self.target = player_position;
        } else {
            self.state = NpcState::Wander;
            if rng.next_u64() % 10 < WANDER_RETARGET_IN_TEN {
                self.target = grid.random_spawn_position(rng);
            }
        }
    }

    /// Per-tick motion toward the target through the shared slide. A step
    /// blocked on both axes abandons the target for a fresh one instead of
    /// stalling against the wall until the next think pass.
    pub fn update(&mut self, grid: &MazeGrid, rng: &mut impl Rng, dt: f32) {
        let to_target = self.target - self.position;
        if to_target.length() <= TARGET_DEADZONE {
            return;
        }

        let step = to_target.normalized().scaled(NPC_SPEED * dt);
        let slide = collision::slide(grid, self.position, step, ACTOR_RADIUS);
        if slide.fully_blocked() {
            self.target = grid.random_spawn_position(rng);
        } else {
            self.position = slide.position;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use crate::player::PLAYER_SPEED;

    use super::*;

    struct ScriptedRng {
        draws: VecDeque<u64>,
    }

    impl ScriptedRng {
        fn new(draws: &[u64]) -> Self {
            Self { draws: draws.iter().copied().collect() }
        }
    }

    impl rand_chacha::rand_core::TryRng for ScriptedRng {
        type Error = std::convert::Infallible;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            Ok(self.try_next_u64()? as u32)
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            Ok(self.draws.pop_front().unwrap_or(0))
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Self::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    fn assert_close(actual: Vec3, expected: Vec3) {
        assert!(
            actual.distance_to(expected) < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn npcs_are_slower_than_the_player() {
        assert!(NPC_SPEED < PLAYER_SPEED);
    }

    #[test]
    fn close_player_flips_state_to_flee_with_a_retreat_target() {
        let grid = MazeGrid::new(8, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut npc = Npc::spawn(Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO);

        npc.think(&grid, Vec3::ZERO, &mut rng, 0.6);

        assert_eq!(npc.state, NpcState::Flee);
        assert_close(npc.target, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn mid_band_player_flips_state_to_chase_on_the_player() {
        let grid = MazeGrid::new(8, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let player = Vec3::new(4.0, 0.0, 0.0);
        let mut npc = Npc::spawn(Vec3::ZERO, Vec3::ZERO);

        npc.think(&grid, player, &mut rng, 0.6);

        assert_eq!(npc.state, NpcState::Chase);
        assert_eq!(npc.target, player);
    }

    #[test]
    fn distant_player_leaves_the_npc_wandering() {
        let grid = MazeGrid::new(8, 8);
        let player = Vec3::new(7.0, 0.0, 0.0);
        let kept_target = Vec3::new(1.0, 0.0, 1.0);

        // A roll of 5 keeps the current destination.
        let mut npc = Npc::spawn(Vec3::ZERO, kept_target);
        npc.think(&grid, player, &mut ScriptedRng::new(&[5]), 0.6);
        assert_eq!(npc.state, NpcState::Wander);
        assert_eq!(npc.target, kept_target);

        // A roll under 3 re-draws it from the spawn generator.
        let mut npc = Npc::spawn(Vec3::ZERO, kept_target);
        npc.think(&grid, player, &mut ScriptedRng::new(&[2, 3, 6]), 0.6);
        assert_eq!(npc.state, NpcState::Wander);
        assert_close(npc.target, Vec3::new(3.0, 0.25, 6.0));
    }

    #[test]
    fn perception_waits_for_the_think_interval() {
        let grid = MazeGrid::new(8, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut npc = Npc::spawn(Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO);

        npc.think(&grid, Vec3::ZERO, &mut rng, 0.25);
        npc.think(&grid, Vec3::ZERO, &mut rng, 0.25);
        assert_eq!(npc.state, NpcState::Wander, "timer at the interval must not fire");

        npc.think(&grid, Vec3::ZERO, &mut rng, 0.25);
        assert_eq!(npc.state, NpcState::Flee);
    }

    #[test]
    fn update_moves_toward_the_target_when_clear() {
        let mut grid = MazeGrid::new(1, 3);
        for cell in &mut grid.cells {
            cell.walls = [false; 4];
        }
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut npc = Npc::spawn(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));

        npc.update(&grid, &mut rng, 0.1);

        assert_close(npc.position, Vec3::new(0.0, 0.0, NPC_SPEED * 0.1));
    }

    #[test]
    fn update_inside_the_deadzone_holds_still() {
        let grid = MazeGrid::new(2, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let start = Vec3::ZERO;
        let mut npc = Npc::spawn(start, Vec3::new(0.05, 0.0, 0.0));

        npc.update(&grid, &mut rng, 0.1);

        assert_eq!(npc.position, start);
        assert_eq!(npc.target, Vec3::new(0.05, 0.0, 0.0));
    }

    #[test]
    fn fully_blocked_chase_step_retargets_away_from_the_player() {
        let grid = MazeGrid::new(4, 4);
        let player = Vec3::new(5.0, 0.0, 5.0);
        let mut npc = Npc::spawn(Vec3::ZERO, Vec3::ZERO);
        npc.state = NpcState::Chase;
        npc.target = player;

        npc.update(&grid, &mut ScriptedRng::new(&[1, 2]), 0.3);

        assert_eq!(npc.position, Vec3::ZERO, "blocked on both axes means no motion");
        assert_ne!(npc.target, player);
        assert_close(npc.target, Vec3::new(1.0, 0.25, 2.0));
    }
}
