//! Global and per-cell cooldown management.
//!
//! `apply_cooldowns` runs only after a successful placement; `tick_cooldowns` runs at the
//! start of every tick regardless. Decrements saturate at zero — a naive unsigned `-1` on a
//! zero-valued counter would wrap to 65535, so `u16::saturating_sub` is used throughout.

use crate::constants::{CELL_CD_FRAMES, GCD_FRAMES, H, W};
use crate::grid::GridState;

/// Sets the global cooldown and the placed cell's cooldown after a successful placement.
/// Caller is responsible for only invoking this when `place_wall` returned `true`.
pub fn apply_cooldowns(grid: &mut GridState, y: usize, x: usize) {
    grid.gcd = GCD_FRAMES;
    grid.cell_cd[y][x] = CELL_CD_FRAMES;
}

/// Saturating per-tick decrement of the global cooldown and every cell cooldown.
pub fn tick_cooldowns(grid: &mut GridState) {
    grid.gcd = grid.gcd.saturating_sub(1);
    for y in 0..H {
        for x in 0..W {
            grid.cell_cd[y][x] = grid.cell_cd[y][x].saturating_sub(1);
        }
    }
}
