//! Intents for the session state machine.

use crate::mvi::Intent;

use super::phase::CycleCount;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Select the cycle count. Ignored outside `Ready`.
    Configure { cycle_count: CycleCount },
    /// Leave `Ready` for the first inhale.
    Start,
    /// Back to `Ready` from anywhere.
    Reset,
    /// Clock ticked without expiring.
    Elapsed { remaining_ms: u64 },
    /// Clock reached zero on the current phase.
    Expired,
}

impl Intent for SessionIntent {}
