//! Phase transition table.
//!
//! Pure functions only: the controller decides *when* to call them (clock
//! expiry, user start) and owns every side effect.

use super::phase::Phase;
use super::state::{SequencerState, SessionConfig};
use super::timing::{ceil_seconds, PhaseTimings};

pub const MSG_BEGIN: &str = "Begin practice";
pub const MSG_FINAL_CYCLE: &str = "Final cycle";
pub const MSG_BREATH_IN: &str = "Take a breath in";
pub const MSG_RELEASE: &str = "Release breath";
pub const MSG_COMPLETE: &str = "Practice complete";

/// State entered when the user starts a session from `Ready`.
pub fn begin(config: &SessionConfig, timings: &PhaseTimings) -> SequencerState {
    let notification = if config.cycle_count.get() == 1 {
        MSG_FINAL_CYCLE
    } else {
        MSG_BEGIN
    };
    entering(Phase::Inhale, 1, timings.breath_ms, notification.to_string())
}

/// Advance past an expired phase.
///
/// `Ready` and `Completed` are returned unchanged: neither has a clock, so
/// an expiry reaching them is a caller bug and must not move the session.
pub fn next_phase(
    state: SequencerState,
    config: &SessionConfig,
    timings: &PhaseTimings,
) -> SequencerState {
    let cycles = config.cycle_count.get();
    let hold_ms = timings.hold_ms(config.cycle_count);

    match state.phase {
        Phase::Ready | Phase::Completed => state,
        Phase::Inhale => entering(
            Phase::Exhale,
            state.cycle_index,
            timings.breath_ms,
            state.notification,
        ),
        Phase::Exhale if state.cycle_index < cycles => {
            let cycle_index = state.cycle_index + 1;
            let notification = if cycle_index == cycles {
                MSG_FINAL_CYCLE.to_string()
            } else {
                state.notification
            };
            entering(Phase::Inhale, cycle_index, timings.breath_ms, notification)
        }
        Phase::Exhale => entering(
            Phase::HoldOut,
            state.cycle_index,
            hold_ms,
            format!("Hold empty for {}s", ceil_seconds(hold_ms)),
        ),
        Phase::HoldOut => entering(
            Phase::TransitionalInhale,
            state.cycle_index,
            timings.transition_ms,
            MSG_BREATH_IN.to_string(),
        ),
        Phase::TransitionalInhale => entering(
            Phase::HoldIn,
            state.cycle_index,
            hold_ms,
            format!("Hold full for {}s", ceil_seconds(hold_ms)),
        ),
        Phase::HoldIn => entering(
            Phase::FinalExhale,
            state.cycle_index,
            timings.transition_ms,
            MSG_RELEASE.to_string(),
        ),
        Phase::FinalExhale => SequencerState {
            phase: Phase::Completed,
            cycle_index: state.cycle_index,
            remaining_ms: 0,
            phase_duration_ms: 0,
            is_running: false,
            notification: MSG_COMPLETE.to_string(),
        },
    }
}

fn entering(phase: Phase, cycle_index: u32, duration_ms: u64, notification: String) -> SequencerState {
    SequencerState {
        phase,
        cycle_index,
        remaining_ms: duration_ms,
        phase_duration_ms: duration_ms,
        is_running: true,
        notification,
    }
}
