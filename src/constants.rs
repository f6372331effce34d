//! Game constants and fixed-size dtype specifications.
//!
//! Single source of truth for every tunable value used throughout the core engine. No magic
//! numbers should exist elsewhere in the crate.

/// Grid width (columns).
pub const W: usize = 13;
/// Grid height (rows).
pub const H: usize = 9;
/// Half-cell vertical extent (two half-cells per row).
pub const HALF_H: i16 = 2 * H as i16;
/// Half-row at which an alive enemy counts as having breached the core.
pub const CORE_Y_HALF: i16 = 16;

/// Fixed-capacity enemy slot pool size.
pub const MAX_ENEMIES: usize = 20;

/// Frames of global cooldown applied after any successful wall placement.
pub const GCD_FRAMES: u16 = 10;
/// Frames of per-cell cooldown applied after a wall is placed on that cell.
pub const CELL_CD_FRAMES: u16 = 150;

/// Hit points a freshly placed wall has.
pub const DEFAULT_WALL_HP: u8 = 1;
/// Default number of ticks between automatic enemy spawns.
pub const DEFAULT_SPAWN_INTERVAL: u32 = 30;
/// Tick budget before an episode is truncated.
pub const MAX_EPISODE_TICKS: u32 = 1000;

/// Half-cells an enemy advances per tick.
pub const ENEMY_SPEED_HALF: i16 = 1;

/// Action 0 is NO-OP; actions `1..=W*H` decode to `(y, x) = divmod(a - 1, W)`.
pub const NUM_ACTIONS: usize = W * H + 1;
/// Reserved action index meaning "do nothing this tick".
pub const NO_OP_ACTION: usize = 0;

/// Reward granted per enemy killed this tick.
pub const REWARD_ENEMY_KILLED: f32 = 1.0;
/// Reward granted simply for surviving a tick (currently zero, kept explicit for tuning).
pub const REWARD_TICK_SURVIVED: f32 = 0.0;
/// Reward (penalty) applied the tick a core breach is detected.
pub const REWARD_CORE_BREACH: f32 = -1.0;

/// Length of the informative flattened observation vector (see `observation::flatten`).
pub const OBS_LEN: usize = H * W            // grid
    + H * W                                  // wall_hp
    + H * W                                  // wall_armed
    + H * W                                  // cell_cd
    + 1                                       // gcd
    + NUM_ACTIONS                            // action validity mask
    + 2 * MAX_ENEMIES                        // enemy x, y_half interleaved
    + MAX_ENEMIES                            // enemy alive
    + MAX_ENEMIES; // enemy kind
