//! Headless, deterministic tick-based simulation core for a grid-defense reinforcement
//! learning environment.
//!
//! An agent places walls on a small grid to intercept enemies descending toward a bottom
//! "core" row; an episode ends when any enemy reaches the core or a tick budget expires. This
//! crate is exactly that per-tick engine — the grid/wall state machine, the enemy lifecycle,
//! the collision pipeline, the cooldown regime, and the strict intra-tick step ordering that
//! makes `(seed, action sequence) -> trajectory` bit-reproducible. Everything else (the
//! learner, observation-flattening shims beyond the informative helper in [`observation`],
//! curriculum schedulers, rendering) lives outside this crate.
//!
//! The core has a single error philosophy: impossible states are unrepresentable or rejected
//! at the boundary, and in-rules failures (an invalid placement, a spawn with no free slot)
//! are silent no-ops observable only through the values `step` returns. See [`error`].

pub mod collision;
pub mod config;
pub mod constants;
pub mod cooldowns;
pub mod enemies;
pub mod enemy_ops;
pub mod error;
pub mod grid;
pub mod observation;
pub mod step;
pub mod walls;

#[cfg(target_arch = "wasm32")]
mod wasm_bindings;
#[cfg(target_arch = "wasm32")]
pub use wasm_bindings::WasmSimState;

pub use config::SimConfig;
pub use enemies::{EnemyKind, EnemyState};
pub use error::ActionError;
pub use grid::GridState;
pub use step::StepOutcome;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The full state of one simulation episode: grid, enemies, tick counter, spawn cadence, and
/// the episode's private RNG.
///
/// `SimState` owns every array it touches — there is no aliasing between two instances, and
/// mutating one never affects another. The RNG is the sole source of randomness anywhere in
/// this crate; no function in this crate consults a process-global generator, which is what
/// keeps two simulations with different seeds fully independent even when run interleaved on
/// the same thread.
pub struct SimState {
    pub grid: GridState,
    pub enemies: EnemyState,
    /// Monotonic tick counter, starts at 0 and increments once per `step` call.
    pub tick: u32,
    /// Ticks between automatic spawns; 0 disables spawning.
    pub spawn_interval: u32,
    rng: StdRng,
}

impl SimState {
    /// Constructs a fresh, zero-initialized simulation. `seed = None` seeds the generator
    /// from OS entropy; `seed = Some(n)` gives a reproducible stream — two simulations built
    /// with the same seed yield byte-identical trajectories for the same action sequence.
    pub fn new(spawn_interval: u32, seed: Option<u64>) -> SimState {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        SimState {
            grid: GridState::new(),
            enemies: EnemyState::new(),
            tick: 0,
            spawn_interval,
            rng,
        }
    }

    /// Constructs a simulation from a [`SimConfig`] bundle.
    pub fn from_config(cfg: SimConfig) -> SimState {
        SimState::new(cfg.spawn_interval, cfg.seed)
    }

    /// Executes one tick for the given action. See [`step::run_step`] for the normative
    /// 12-phase ordering.
    pub fn step(&mut self, action: usize) -> Result<StepOutcome, ActionError> {
        step::run_step(self, action)
    }

    /// Number of currently alive enemy slots (not necessarily contiguous before the
    /// compaction phase that ends every tick, but always contiguous as observed between
    /// `step` calls).
    pub fn alive_enemy_count(&self) -> usize {
        self.enemies.alive_count()
    }
}
