//! Minimal demo binary exercising the simulation core as an external consumer would.
//!
//! Not part of the core's contract — a thin driver scoped to this crate's actual surface:
//! construct a simulation, run NO-OP actions for a fixed number of ticks, and print the
//! per-tick trajectory.

use clap::Parser;
use gridcore::SimState;

/// Run a headless grid-defense simulation for a number of NO-OP ticks and print the
/// per-tick `(reward, terminated, truncated)` trajectory.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Deterministic RNG seed. Omit for OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks between automatic enemy spawns; 0 disables spawning.
    #[arg(long, default_value_t = 30)]
    spawn_interval: u32,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 100)]
    ticks: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut sim = SimState::new(args.spawn_interval, args.seed);
    for t in 0..args.ticks {
        let outcome = sim.step(0).expect("NO-OP is always a valid action");
        println!(
            "tick={t} reward={:.1} terminated={} truncated={}",
            outcome.reward, outcome.terminated, outcome.truncated
        );
        if outcome.terminated || outcome.truncated {
            break;
        }
    }
}
