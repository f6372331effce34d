//! Informative observation flattening for the learner.
//!
//! Nothing in this module is part of the step contract. It assembles a fixed-layout
//! concatenation of the simulation's public fields so a caller doesn't have to re-derive the
//! layout by hand, but `step` re-validates every action independently of whatever observation
//! was last built — an observation taken before a mutation may legitimately disagree with the
//! step's behavior for the same action afterward.

use crate::constants::{H, MAX_ENEMIES, NUM_ACTIONS, OBS_LEN, W};
use crate::SimState;

/// Flattens `sim`'s state into the documented observation layout:
///
/// `grid | wall_hp | wall_armed | cell_cd | gcd | action_mask | enemy(x, y_half) | alive | kind`
///
/// Total length is always [`OBS_LEN`].
pub fn flatten(sim: &SimState) -> [f32; OBS_LEN] {
    let mut out = [0.0f32; OBS_LEN];
    let mut i = 0;

    for y in 0..H {
        for x in 0..W {
            out[i] = sim.grid.grid[y][x] as f32;
            i += 1;
        }
    }
    for y in 0..H {
        for x in 0..W {
            out[i] = sim.grid.wall_hp[y][x] as f32;
            i += 1;
        }
    }
    for y in 0..H {
        for x in 0..W {
            out[i] = sim.grid.wall_armed[y][x] as u8 as f32;
            i += 1;
        }
    }
    for y in 0..H {
        for x in 0..W {
            out[i] = sim.grid.cell_cd[y][x] as f32;
            i += 1;
        }
    }
    out[i] = sim.grid.gcd as f32;
    i += 1;

    out[i] = 1.0; // action mask bit 0: NO-OP is always valid.
    i += 1;
    for y in 0..H {
        for x in 0..W {
            let valid = sim.grid.gcd == 0 && sim.grid.cell_cd[y][x] == 0 && sim.grid.grid[y][x] == 0;
            out[i] = valid as u8 as f32;
            i += 1;
        }
    }
    debug_assert_eq!(i, H * W * 4 + 1 + NUM_ACTIONS);

    for s in 0..MAX_ENEMIES {
        out[i] = sim.enemies.x[s] as f32;
        i += 1;
        out[i] = sim.enemies.y_half[s] as f32;
        i += 1;
    }
    for s in 0..MAX_ENEMIES {
        out[i] = sim.enemies.alive[s] as u8 as f32;
        i += 1;
    }
    for s in 0..MAX_ENEMIES {
        out[i] = sim.enemies.kind[s] as f32;
        i += 1;
    }

    debug_assert_eq!(i, OBS_LEN);
    out
}
