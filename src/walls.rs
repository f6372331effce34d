//! Wall placement and arming: the anti-triviality rule.
//!
//! `place_wall` enforces a strict, ordered set of validity predicates and never mutates state
//! on failure. `arm_pending_walls` is the separate phase that promotes a placed-this-tick
//! wall to lethal the *following* tick — a wall placed on tick *t* cannot kill anything until
//! the arming phase that begins tick *t + 1* runs, which happens before any action on that
//! later tick is applied. This is what forces the agent to predict rather than react.
//!
//! This module does not set cooldowns; see `cooldowns::apply_cooldowns`, called by the
//! orchestrator only when placement succeeds.

use log::debug;

use crate::constants::{DEFAULT_WALL_HP, H, W};
use crate::grid::GridState;

/// Attempts to place a wall at `(y, x)`. Validity checks run in order; the first failing
/// check short-circuits with no state mutation whatsoever.
///
/// Returns `true` on success.
pub fn place_wall(grid: &mut GridState, y: usize, x: usize) -> bool {
    if y >= H || x >= W {
        return false;
    }
    if grid.gcd != 0 {
        return false;
    }
    if grid.cell_cd[y][x] != 0 {
        return false;
    }
    if grid.grid[y][x] == 1 {
        return false;
    }

    grid.grid[y][x] = 1;
    grid.wall_hp[y][x] = DEFAULT_WALL_HP;
    grid.wall_pending[y][x] = true;
    grid.wall_armed[y][x] = false;
    debug!("wall placed at ({y},{x})");
    true
}

/// Promotes every pending wall to armed and clears the pending flag, vectorized over the
/// whole grid. Idempotent when nothing is pending.
pub fn arm_pending_walls(grid: &mut GridState) {
    for y in 0..H {
        for x in 0..W {
            if grid.wall_pending[y][x] {
                grid.wall_armed[y][x] = true;
                grid.wall_pending[y][x] = false;
            }
        }
    }
}
