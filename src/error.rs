//! The one error boundary in this crate.
//!
//! Everything inside the simulation rules is a value (a `bool` for placement/spawn success, a
//! count for kills, a flag for termination) — see the crate-level docs. The single exception
//! is a caller contract violation: an action index outside `[0, NUM_ACTIONS)`. That is not a
//! simulation rule failure, it is a programming error on the caller's side, and `step` reports
//! it as a `Result` rather than silently ignoring it or panicking in release builds.

use thiserror::Error;

/// Returned by [`crate::SimState::step`] when the caller passes an action outside the valid
/// range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("action {action} is out of range; valid actions are 0..{num_actions}")]
    OutOfRange { action: usize, num_actions: usize },
}
