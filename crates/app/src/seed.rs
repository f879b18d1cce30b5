//! Run-seed resolution: an explicit `--seed` flag wins, anything else falls
//! back to an entropy-mixed runtime seed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fresh seed for runs started without `--seed`. Mixes wall-clock nanos, the
/// process id, and a per-process counter so back-to-back launches diverge.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Accepts `--seed 42` and `--seed=42`; any other argument is ignored.
pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<SeedChoice, String> {
    let mut selected_seed = None;
    let mut remaining = args.iter().skip(1);

    while let Some(argument) = remaining.next() {
        let raw_value = if argument == "--seed" {
            match remaining.next() {
                Some(value) => value.as_str(),
                None => return Err("--seed requires a value".to_string()),
            }
        } else {
            match argument.strip_prefix("--seed=") {
                Some(value) => value,
                None => continue,
            }
        };

        if selected_seed.is_some() {
            return Err("--seed given more than once".to_string());
        }
        let parsed = raw_value
            .parse::<u64>()
            .map_err(|_| format!("seed value '{raw_value}' must be a number"))?;
        selected_seed = Some(parsed);
    }

    Ok(match selected_seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    })
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
