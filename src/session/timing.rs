//! Phase durations and clock granularity.

use super::phase::CycleCount;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
pub const DEFAULT_BREATH_MS: u64 = 2000;
pub const DEFAULT_TRANSITION_MS: u64 = 3000;
pub const DEFAULT_HOLD_MS_PER_CYCLE: u64 = 1000;

/// Longest any single phase may last.
pub const MAX_PHASE_MS: u64 = 60 * 60 * 1000;
/// Coarsest clock granularity accepted.
pub const MAX_TICK_INTERVAL_MS: u64 = 60 * 1000;

/// Durations used by the sequencer when entering a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTimings {
    /// Clock polling interval; also the countdown decrement.
    pub tick_interval_ms: u64,
    /// Each inhale and exhale of the breathing loop.
    pub breath_ms: u64,
    /// The transitional inhale and the final exhale.
    pub transition_ms: u64,
    /// Hold length per configured cycle.
    pub hold_ms_per_cycle: u64,
}

impl PhaseTimings {
    /// Saturates instead of overflowing; configuration keeps this within
    /// [`MAX_PHASE_MS`].
    pub fn hold_ms(&self, cycles: CycleCount) -> u64 {
        u64::from(cycles.get()).saturating_mul(self.hold_ms_per_cycle)
    }
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            breath_ms: DEFAULT_BREATH_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            hold_ms_per_cycle: DEFAULT_HOLD_MS_PER_CYCLE,
        }
    }
}

/// Whole seconds covering `ms`, rounded up.
pub fn ceil_seconds(ms: u64) -> u64 {
    ms.div_ceil(1000)
}
