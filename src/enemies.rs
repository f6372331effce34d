//! Enemy state: fixed-capacity slot pool with position, liveness, kind, and spawn order.
//!
//! All arrays use `(MAX_ENEMIES,)` shape with zero-padding for inactive slots; there is no
//! dynamic resizing anywhere in this module. Spawn, movement, and compaction behavior lives
//! in `enemy_ops`; this module owns only the state and its invariants.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_ENEMIES;

/// Enemy kind discriminant. Only `Drop` is ever constructed by `spawn_enemy`; the remaining
/// variants document the field's full domain for a future extension framework that is out of
/// scope for this engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[repr(u8)]
pub enum EnemyKind {
    Drop = 0,
    Drifter = 1,
    Seeker = 2,
    Flood = 3,
}

/// Dense, struct-of-arrays enemy pool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnemyState {
    pub y_half: [i16; MAX_ENEMIES],
    pub x: [i16; MAX_ENEMIES],
    pub alive: [bool; MAX_ENEMIES],
    pub kind: [u8; MAX_ENEMIES],
    pub spawn_tick: [u32; MAX_ENEMIES],
}

impl Default for EnemyState {
    fn default() -> Self {
        EnemyState {
            y_half: [0; MAX_ENEMIES],
            x: [0; MAX_ENEMIES],
            alive: [false; MAX_ENEMIES],
            kind: [0; MAX_ENEMIES],
            spawn_tick: [0; MAX_ENEMIES],
        }
    }
}

impl EnemyState {
    /// A fresh pool with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently alive slots. Not assumed contiguous until after compaction.
    pub fn alive_count(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    /// Checks the compaction and zero-padding invariants: alive slots form a contiguous
    /// prefix in non-decreasing spawn-tick order, and dead slots are fully zeroed.
    pub fn debug_check_invariants(&self) {
        let mut seen_dead = false;
        let mut last_spawn_tick = 0u32;
        for i in 0..MAX_ENEMIES {
            if self.alive[i] {
                debug_assert!(
                    !seen_dead,
                    "alive slot {i} found after a dead slot; compaction broken"
                );
                debug_assert!(
                    self.spawn_tick[i] >= last_spawn_tick,
                    "spawn_tick not non-decreasing at slot {i}"
                );
                last_spawn_tick = self.spawn_tick[i];
            } else {
                seen_dead = true;
                debug_assert_eq!(self.y_half[i], 0, "dead slot {i} has nonzero y_half");
                debug_assert_eq!(self.x[i], 0, "dead slot {i} has nonzero x");
                debug_assert_eq!(self.kind[i], 0, "dead slot {i} has nonzero kind");
                debug_assert_eq!(self.spawn_tick[i], 0, "dead slot {i} has nonzero spawn_tick");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_pool_is_all_dead_and_zeroed() {
        let e = EnemyState::new();
        assert_eq!(e.alive_count(), 0);
        assert!(e.alive.iter().all(|&a| !a));
        assert!(e.y_half.iter().all(|&v| v == 0));
        assert!(e.x.iter().all(|&v| v == 0));
        assert!(e.spawn_tick.iter().all(|&v| v == 0));
    }

    #[test]
    fn fresh_pool_passes_invariant_check() {
        EnemyState::new().debug_check_invariants();
    }

    #[test]
    fn alive_count_reflects_flags() {
        let mut e = EnemyState::new();
        e.alive[0] = true;
        e.alive[3] = true;
        assert_eq!(e.alive_count(), 2);
    }
}
