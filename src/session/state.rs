//! Session configuration and the sequencer state snapshot.

use crate::mvi::UiState;

use super::phase::{CycleCount, Phase};

/// Per-session settings. Frozen while a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub cycle_count: CycleCount,
}

impl SessionConfig {
    pub fn new(cycle_count: CycleCount) -> Self {
        Self { cycle_count }
    }
}

/// Everything the display needs to render the current moment of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequencerState {
    pub phase: Phase,
    /// 0 while Ready, otherwise 1-based and never above the cycle count.
    pub cycle_index: u32,
    pub remaining_ms: u64,
    /// Full duration of the current phase, for in-phase progress.
    pub phase_duration_ms: u64,
    pub is_running: bool,
    pub notification: String,
}

impl UiState for SequencerState {}

impl SequencerState {
    /// The idle state every reset returns to.
    pub fn ready() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Fraction of the current phase already elapsed, in `0.0..=1.0`.
    pub fn phase_progress(&self) -> f64 {
        if self.phase_duration_ms == 0 {
            return 0.0;
        }
        let elapsed = self.phase_duration_ms.saturating_sub(self.remaining_ms);
        (elapsed as f64 / self.phase_duration_ms as f64).clamp(0.0, 1.0)
    }
}
