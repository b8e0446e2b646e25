//! Reducer for the session state machine.

use crate::mvi::{Reducer, UiState};

use super::intent::SessionIntent;
use super::phase::Phase;
use super::sequencer;
use super::state::{SequencerState, SessionConfig};
use super::timing::PhaseTimings;

/// Everything the reducer reads and writes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionModel {
    pub config: SessionConfig,
    pub timings: PhaseTimings,
    pub sequencer: SequencerState,
}

impl UiState for SessionModel {}

/// Pure transitions. Clock arming and cancellation happen in the controller
/// around each dispatch.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionModel;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let SessionModel {
            config,
            timings,
            sequencer,
        } = state;

        let (config, sequencer) = match intent {
            SessionIntent::Configure { cycle_count } if sequencer.is_ready() => {
                (SessionConfig::new(cycle_count), sequencer)
            }
            SessionIntent::Configure { .. } => (config, sequencer),
            SessionIntent::Start if sequencer.is_ready() => {
                let started = sequencer::begin(&config, &timings);
                (config, started)
            }
            SessionIntent::Start => (config, sequencer),
            SessionIntent::Reset => (config, SequencerState::ready()),
            SessionIntent::Elapsed { remaining_ms } if sequencer.is_running => {
                let remaining_ms = remaining_ms.min(sequencer.remaining_ms);
                (
                    config,
                    SequencerState {
                        remaining_ms,
                        ..sequencer
                    },
                )
            }
            SessionIntent::Elapsed { .. } => (config, sequencer),
            SessionIntent::Expired if sequencer.is_running => {
                let next = sequencer::next_phase(sequencer, &config, &timings);
                (config, next)
            }
            SessionIntent::Expired => (config, sequencer),
        };

        debug_assert!(sequencer.phase != Phase::Completed || !sequencer.is_running);
        SessionModel {
            config,
            timings,
            sequencer,
        }
    }
}
