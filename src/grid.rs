//! Grid state: per-cell wall content, hit points, arming flags, and cooldowns.
//!
//! All arrays use `[y][x]` indexing over a fixed `H x W` board. This module owns only state
//! and its invariants; wall placement/arming/cooldown *behavior* lives in `walls` and
//! `cooldowns` so the orchestrator in `step` can compose them.

use serde::{Deserialize, Serialize};

use crate::constants::{CELL_CD_FRAMES, GCD_FRAMES, H, W};

/// Dense, struct-of-arrays grid state.
///
/// `grid[y][x] = 1` iff a wall occupies that cell. `wall_hp[y][x] > 0` iff `grid[y][x] = 1`.
/// `wall_armed` and `wall_pending` are always disjoint, and `wall_pending` only ever holds for
/// cells with a wall that has not yet survived an arming phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridState {
    pub grid: [[i8; W]; H],
    pub wall_hp: [[u8; W]; H],
    pub wall_armed: [[bool; W]; H],
    pub wall_pending: [[bool; W]; H],
    pub cell_cd: [[u16; W]; H],
    pub gcd: u16,
}

impl Default for GridState {
    fn default() -> Self {
        GridState {
            grid: [[0; W]; H],
            wall_hp: [[0; W]; H],
            wall_armed: [[false; W]; H],
            wall_pending: [[false; W]; H],
            cell_cd: [[0; W]; H],
            gcd: 0,
        }
    }
}

impl GridState {
    /// A fresh, all-empty grid with no cooldowns active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the four wall-flag equivalences that must hold at the end of every tick.
    /// Compiled out in release builds; a violation here is a programmer error, not a
    /// recoverable runtime condition.
    pub fn debug_check_invariants(&self) {
        for y in 0..H {
            for x in 0..W {
                let has_wall = self.grid[y][x] == 1;
                debug_assert_eq!(
                    self.wall_hp[y][x] > 0,
                    has_wall,
                    "wall_hp/grid mismatch at ({y},{x})"
                );
                if self.wall_armed[y][x] {
                    debug_assert!(has_wall, "armed wall missing grid flag at ({y},{x})");
                }
                if self.wall_pending[y][x] {
                    debug_assert!(has_wall, "pending wall missing grid flag at ({y},{x})");
                    debug_assert!(
                        !self.wall_armed[y][x],
                        "cell pending and armed simultaneously at ({y},{x})"
                    );
                }
                debug_assert!(
                    !(self.wall_armed[y][x] && self.wall_pending[y][x]),
                    "armed/pending not disjoint at ({y},{x})"
                );
            }
        }
        debug_assert!(
            self.gcd <= GCD_FRAMES,
            "gcd {} exceeds the value ever written to it",
            self.gcd
        );
        for row in &self.cell_cd {
            for &cd in row {
                debug_assert!(
                    cd <= CELL_CD_FRAMES,
                    "cell_cd {cd} exceeds the value ever written to it"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_all_zero() {
        let g = GridState::new();
        assert!(g.grid.iter().all(|row| row.iter().all(|&c| c == 0)));
        assert!(g.wall_hp.iter().all(|row| row.iter().all(|&c| c == 0)));
        assert!(g.wall_armed.iter().all(|row| row.iter().all(|&c| !c)));
        assert!(g.wall_pending.iter().all(|row| row.iter().all(|&c| !c)));
        assert!(g.cell_cd.iter().all(|row| row.iter().all(|&c| c == 0)));
        assert_eq!(g.gcd, 0);
    }

    #[test]
    fn two_instances_share_no_buffers() {
        let mut a = GridState::new();
        let b = GridState::new();
        a.grid[0][0] = 1;
        a.wall_hp[0][0] = 1;
        assert_eq!(b.grid[0][0], 0);
        assert_eq!(b.wall_hp[0][0], 0);
    }

    #[test]
    fn fresh_state_passes_invariant_check() {
        GridState::new().debug_check_invariants();
    }
}
