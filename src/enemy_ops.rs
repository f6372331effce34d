//! Enemy lifecycle behavior: spawn, vertical movement, and stable compaction.
//!
//! These functions operate on an `EnemyState` in place. Spawning draws the sole source of
//! randomness in the core from the caller-supplied RNG — no global generator is ever
//! consulted here, which is what keeps two simulations with different seeds independent and
//! two simulations with the same seed byte-identical.

use rand::Rng;

use crate::constants::{ENEMY_SPEED_HALF, MAX_ENEMIES, W};
use crate::enemies::{EnemyKind, EnemyState};

/// Finds the first free slot and spawns a `Drop` enemy at the top of a random column.
/// Returns `false` (no mutation) if the pool is full.
pub fn spawn_enemy<R: Rng + ?Sized>(
    enemies: &mut EnemyState,
    current_tick: u32,
    rng: &mut R,
) -> bool {
    let Some(slot) = enemies.alive.iter().position(|&a| !a) else {
        return false;
    };
    enemies.y_half[slot] = 0;
    enemies.x[slot] = rng.gen_range(0..W as i16);
    enemies.alive[slot] = true;
    enemies.kind[slot] = EnemyKind::Drop as u8;
    enemies.spawn_tick[slot] = current_tick;
    true
}

/// Advances every alive enemy by `ENEMY_SPEED_HALF` half-cells. Dead slots are untouched and
/// no bounds clamping is performed — breach detection interprets an out-of-range position.
pub fn move_enemies(enemies: &mut EnemyState) {
    for i in 0..MAX_ENEMIES {
        if enemies.alive[i] {
            enemies.y_half[i] += ENEMY_SPEED_HALF;
        }
    }
}

/// Stably permutes all five slot arrays so alive slots occupy a contiguous prefix in their
/// original relative order, then zeroes the trailing dead suffix. Returns the alive count.
///
/// The permutation is obtained by sorting slot indices on the key `(is_dead, spawn_tick,
/// original_index)`: alive slots sort before dead ones, ties among alive slots broken by
/// `spawn_tick` (non-decreasing), and any further tie broken by original index so the sort is
/// stable even if two enemies share a spawn tick.
pub fn compact_enemies(enemies: &mut EnemyState) -> usize {
    let mut order: [usize; MAX_ENEMIES] = std::array::from_fn(|i| i);
    order.sort_by_key(|&i| {
        let dead = !enemies.alive[i];
        let spawn_key = if dead { u32::MAX } else { enemies.spawn_tick[i] };
        (dead, spawn_key, i)
    });

    let mut next = EnemyState::new();
    let mut alive_count = 0;
    for (dst, &src) in order.iter().enumerate() {
        if enemies.alive[src] {
            next.y_half[dst] = enemies.y_half[src];
            next.x[dst] = enemies.x[src];
            next.alive[dst] = true;
            next.kind[dst] = enemies.kind[src];
            next.spawn_tick[dst] = enemies.spawn_tick[src];
            alive_count += 1;
        }
        // else: leave `next`'s slot at its zeroed default.
    }
    *enemies = next;
    alive_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_fills_first_free_slot() {
        let mut e = EnemyState::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(spawn_enemy(&mut e, 0, &mut rng));
        assert!(e.alive[0]);
        assert_eq!(e.y_half[0], 0);
        assert!(e.x[0] >= 0 && (e.x[0] as usize) < W);
    }

    #[test]
    fn spawn_fails_when_pool_full() {
        let mut e = EnemyState::new();
        let mut rng = StdRng::seed_from_u64(1);
        for i in 0..MAX_ENEMIES {
            assert!(spawn_enemy(&mut e, i as u32, &mut rng));
        }
        let before = e.clone();
        assert!(!spawn_enemy(&mut e, 99, &mut rng));
        assert_eq!(before.alive, e.alive);
        assert_eq!(before.y_half, e.y_half);
    }

    #[test]
    fn move_advances_only_alive_slots() {
        let mut e = EnemyState::new();
        e.alive[0] = true;
        e.y_half[0] = 4;
        move_enemies(&mut e);
        assert_eq!(e.y_half[0], 5);
        assert_eq!(e.y_half[1], 0);
    }

    #[test]
    fn compaction_moves_alive_slots_to_prefix_preserving_order() {
        let mut e = EnemyState::new();
        e.alive[5] = true;
        e.spawn_tick[5] = 10;
        e.x[5] = 3;
        e.alive[1] = true;
        e.spawn_tick[1] = 2;
        e.x[1] = 7;
        let count = compact_enemies(&mut e);
        assert_eq!(count, 2);
        assert!(e.alive[0] && e.alive[1]);
        assert!(e.alive[2..].iter().all(|&a| !a));
        // spawn_tick 2 (was slot 1) sorts before spawn_tick 10 (was slot 5).
        assert_eq!(e.spawn_tick[0], 2);
        assert_eq!(e.x[0], 7);
        assert_eq!(e.spawn_tick[1], 10);
        assert_eq!(e.x[1], 3);
    }

    #[test]
    fn compaction_zeroes_trailing_dead_slots() {
        let mut e = EnemyState::new();
        e.alive[0] = true;
        e.spawn_tick[0] = 1;
        e.y_half[7] = 12; // dead slot with stray nonzero field
        compact_enemies(&mut e);
        for i in 1..MAX_ENEMIES {
            assert!(!e.alive[i]);
            assert_eq!(e.y_half[i], 0);
            assert_eq!(e.x[i], 0);
            assert_eq!(e.kind[i], 0);
            assert_eq!(e.spawn_tick[i], 0);
        }
    }

    #[test]
    fn compaction_is_stable_for_equal_spawn_ticks() {
        let mut e = EnemyState::new();
        e.alive[3] = true;
        e.spawn_tick[3] = 5;
        e.x[3] = 1;
        e.alive[9] = true;
        e.spawn_tick[9] = 5;
        e.x[9] = 2;
        compact_enemies(&mut e);
        // Original index order preserved among equal spawn_tick values.
        assert_eq!(e.x[0], 1);
        assert_eq!(e.x[1], 2);
    }
}
