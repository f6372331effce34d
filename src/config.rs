//! Runtime-configurable simulation parameters.
//!
//! Grid size, wall HP, and the reward constants are compile-time constants — only the two
//! knobs that govern episode pacing are runtime-configurable. This struct exists so tools and
//! tests can load scenario configuration from JSON rather than threading two bare arguments
//! through call sites, the way a production simulation crate centralizes its tunables in a
//! `Config` struct.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SPAWN_INTERVAL;

/// The only two constructor knobs `SimState::new` accepts.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Ticks between automatic enemy spawns; 0 disables spawning entirely.
    pub spawn_interval: u32,
    /// Deterministic RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            seed: None,
        }
    }
}
