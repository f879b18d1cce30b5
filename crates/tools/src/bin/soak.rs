use anyhow::{Result, bail};
use clap::Parser;
use maze_core::{ACTOR_RADIUS, MoveIntent, Simulation, TickInput, collision};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u32,
    #[arg(long, default_value_t = 20)]
    width: usize,
    #[arg(long, default_value_t = 20)]
    height: usize,
}

const TICK_DT: f32 = 1.0 / 60.0;

fn synthetic_input(rng: &mut ChaCha8Rng) -> TickInput {
    let bits = rng.next_u64();
    TickInput {
        movement: MoveIntent {
            forward: bits & 1 != 0,
            back: bits & 2 != 0,
            left: bits & 4 != 0,
            right: bits & 8 != 0,
        },
        look_dx: ((bits >> 8) % 200) as f32 / 1000.0 - 0.1,
        look_dy: ((bits >> 16) % 200) as f32 / 1000.0 - 0.1,
        regenerate: bits % 509 == 0,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!(
        "Soaking seed {} for {} ticks on a {}x{} maze...",
        args.seed, args.ticks, args.width, args.height
    );
    let mut sim = Simulation::new(args.seed, args.width, args.height);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for tick in 0..args.ticks {
        sim.step(synthetic_input(&mut rng), TICK_DT);

        if collision::is_blocked(sim.grid(), sim.player().position, ACTOR_RADIUS) {
            bail!("player inside a wall at tick {tick}");
        }
        for (index, npc) in sim.npcs().iter().enumerate() {
            if collision::is_blocked(sim.grid(), npc.position, ACTOR_RADIUS) {
                bail!("npc {index} inside a wall at tick {tick}");
            }
        }
        if sim.grid().open_passage_count() != args.width * args.height - 1 {
            bail!("maze stopped being a spanning tree at tick {tick}");
        }
    }

    println!(
        "Soak completed: maze fingerprint 0x{:016x}, state hash 0x{:016x}",
        sim.grid().fingerprint(),
        sim.snapshot_hash()
    );
    Ok(())
}
