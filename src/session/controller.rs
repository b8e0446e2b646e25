//! Session controller: owns the session state, the clock and its scheduler.

use std::time::Duration;

use crate::mvi::Reducer;

use super::clock::{ClockSignal, ClockToken, PhaseClock};
use super::driver::TickScheduler;
use super::error::SessionError;
use super::intent::SessionIntent;
use super::phase::{CycleCount, Phase};
use super::reducer::{SessionModel, SessionReducer};
use super::state::{SequencerState, SessionConfig};
use super::timing::PhaseTimings;

/// Published whenever the session enters a phase, including `Ready` after a
/// stop or reset and the terminal `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseEntered {
    pub phase: Phase,
    pub cycle_index: u32,
    pub duration_ms: u64,
}

pub struct SessionController<S: TickScheduler> {
    model: SessionModel,
    allowed: Vec<CycleCount>,
    clock: PhaseClock,
    scheduler: S,
    events: Vec<PhaseEntered>,
}

impl<S: TickScheduler> SessionController<S> {
    /// `allowed` must contain `initial`; the caller validates configuration.
    pub fn new(
        initial: CycleCount,
        allowed: Vec<CycleCount>,
        timings: PhaseTimings,
        scheduler: S,
    ) -> Self {
        Self {
            model: SessionModel {
                config: SessionConfig::new(initial),
                timings,
                sequencer: SequencerState::ready(),
            },
            allowed,
            clock: PhaseClock::new(timings.tick_interval_ms),
            scheduler,
            events: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> &SequencerState {
        &self.model.sequencer
    }

    pub fn config(&self) -> SessionConfig {
        self.model.config
    }

    pub fn timings(&self) -> PhaseTimings {
        self.model.timings
    }

    pub fn allowed_cycle_counts(&self) -> &[CycleCount] {
        &self.allowed
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Drain phase-entry events published since the last call.
    pub fn take_events(&mut self) -> Vec<PhaseEntered> {
        std::mem::take(&mut self.events)
    }

    pub fn configure(&mut self, requested: u32) -> Result<(), SessionError> {
        let cycle_count = CycleCount::new(requested)
            .filter(|count| self.allowed.contains(count))
            .ok_or_else(|| SessionError::CycleCountNotAllowed {
                requested,
                allowed: self.allowed.clone(),
            })?;
        self.ensure_ready()?;
        self.dispatch(SessionIntent::Configure { cycle_count });
        tracing::debug!(cycles = requested, "Cycle count selected");
        Ok(())
    }

    /// Step through the allowed cycle counts, wrapping at either end.
    pub fn cycle_selection(&mut self, direction: i32) -> Result<(), SessionError> {
        self.ensure_ready()?;
        if self.allowed.is_empty() {
            return Ok(());
        }
        let len = self.allowed.len();
        let current = self
            .allowed
            .iter()
            .position(|count| *count == self.model.config.cycle_count)
            .unwrap_or(0);
        let next = if direction.is_negative() {
            (current + len - 1) % len
        } else {
            (current + 1) % len
        };
        let target = self.allowed[next].get();
        self.configure(target)
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        self.ensure_ready()?;
        self.dispatch(SessionIntent::Start);
        tracing::info!(
            cycles = self.model.config.cycle_count.get(),
            "Session started"
        );
        self.arm_current_phase();
        Ok(())
    }

    /// Stop a running session. Ends in the same state as [`Self::reset`].
    pub fn stop(&mut self) -> Result<(), SessionError> {
        if !self.model.sequencer.is_running {
            return Err(SessionError::NotRunning);
        }
        tracing::info!(phase = %self.model.sequencer.phase, "Session stopped");
        self.reset();
        Ok(())
    }

    /// Always allowed.
    pub fn reset(&mut self) {
        self.disarm();
        let was_ready = self.model.sequencer.is_ready();
        self.dispatch(SessionIntent::Reset);
        if !was_ready {
            self.publish();
        }
    }

    /// Feed one tick from the scheduler.
    pub fn on_clock(&mut self, token: ClockToken) -> ClockSignal {
        let signal = self.clock.tick(token);
        match signal {
            ClockSignal::Stale => {
                tracing::trace!(generation = token.generation(), "Discarding stale clock tick");
            }
            ClockSignal::Tick { remaining_ms } => {
                self.dispatch(SessionIntent::Elapsed { remaining_ms });
            }
            ClockSignal::Expired => {
                self.dispatch(SessionIntent::Elapsed { remaining_ms: 0 });
                self.dispatch(SessionIntent::Expired);
                if self.model.sequencer.is_running {
                    self.arm_current_phase();
                } else {
                    self.disarm();
                    self.publish();
                    tracing::info!("Session complete");
                }
            }
        }
        signal
    }

    fn ensure_ready(&self) -> Result<(), SessionError> {
        let phase = self.model.sequencer.phase;
        if phase == Phase::Ready {
            Ok(())
        } else {
            Err(SessionError::NotReady { phase })
        }
    }

    fn arm_current_phase(&mut self) {
        let token = self.clock.start(self.model.sequencer.remaining_ms);
        self.scheduler
            .schedule(token, Duration::from_millis(self.clock.interval_ms()));
        self.publish();
        tracing::info!(
            phase = %self.model.sequencer.phase,
            cycle = self.model.sequencer.cycle_index,
            duration_ms = self.model.sequencer.phase_duration_ms,
            "Entered phase"
        );
    }

    fn disarm(&mut self) {
        self.clock.cancel();
        self.scheduler.cancel();
    }

    fn publish(&mut self) {
        let state = &self.model.sequencer;
        self.events.push(PhaseEntered {
            phase: state.phase,
            cycle_index: state.cycle_index,
            duration_ms: state.phase_duration_ms,
        });
    }

    fn dispatch(&mut self, intent: SessionIntent) {
        self.model = SessionReducer::reduce(std::mem::take(&mut self.model), intent);
    }
}

impl<S: TickScheduler> Drop for SessionController<S> {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::driver::ManualTicker;

    fn controller() -> SessionController<ManualTicker> {
        SessionController::new(
            CycleCount::BEGINNER,
            vec![
                CycleCount::BEGINNER,
                CycleCount::INTERMEDIATE,
                CycleCount::ADVANCED,
            ],
            PhaseTimings::default(),
            ManualTicker::new(),
        )
    }

    fn live_token(ctl: &SessionController<ManualTicker>) -> ClockToken {
        ctl.scheduler().active().expect("clock scheduled")
    }

    #[test]
    fn start_arms_clock_and_publishes_entry() {
        let mut ctl = controller();
        ctl.start().expect("start from ready");
        assert!(ctl.snapshot().is_running);
        assert_eq!(ctl.scheduler().schedule_count(), 1);
        assert_eq!(
            ctl.take_events(),
            vec![PhaseEntered {
                phase: Phase::Inhale,
                cycle_index: 1,
                duration_ms: 2000,
            }]
        );
        assert!(ctl.take_events().is_empty());
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut ctl = controller();
        ctl.start().expect("start");
        assert_eq!(
            ctl.start(),
            Err(SessionError::NotReady {
                phase: Phase::Inhale
            })
        );
        assert_eq!(ctl.scheduler().schedule_count(), 1);
    }

    #[test]
    fn ticks_count_down_then_transition() {
        let mut ctl = controller();
        ctl.start().expect("start");
        let token = live_token(&ctl);
        for expected in (1..20).rev().map(|n| n * 100) {
            assert_eq!(
                ctl.on_clock(token),
                ClockSignal::Tick {
                    remaining_ms: expected
                }
            );
            assert_eq!(ctl.snapshot().remaining_ms, expected);
        }
        assert_eq!(ctl.on_clock(token), ClockSignal::Expired);
        assert_eq!(ctl.snapshot().phase, Phase::Exhale);
        assert_eq!(ctl.snapshot().remaining_ms, 2000);
        assert_ne!(live_token(&ctl), token);
    }

    #[test]
    fn stop_requires_running_session() {
        let mut ctl = controller();
        assert_eq!(ctl.stop(), Err(SessionError::NotRunning));
        ctl.start().expect("start");
        ctl.stop().expect("stop");
        assert_eq!(ctl.snapshot(), &SequencerState::ready());
        assert!(ctl.scheduler().active().is_none());
    }

    #[test]
    fn tick_after_stop_is_stale() {
        let mut ctl = controller();
        ctl.start().expect("start");
        let token = live_token(&ctl);
        ctl.stop().expect("stop");
        assert_eq!(ctl.on_clock(token), ClockSignal::Stale);
        assert_eq!(ctl.snapshot(), &SequencerState::ready());
    }

    #[test]
    fn configure_rejected_outside_ready() {
        let mut ctl = controller();
        ctl.start().expect("start");
        assert!(matches!(
            ctl.configure(10),
            Err(SessionError::NotReady { .. })
        ));
        assert_eq!(ctl.config().cycle_count, CycleCount::BEGINNER);
    }

    #[test]
    fn configure_rejects_values_outside_allowed_set() {
        let mut ctl = controller();
        assert!(matches!(
            ctl.configure(7),
            Err(SessionError::CycleCountNotAllowed { requested: 7, .. })
        ));
        assert!(ctl.configure(0).is_err());
        assert_eq!(ctl.config().cycle_count, CycleCount::BEGINNER);
        ctl.configure(15).expect("allowed");
        assert_eq!(ctl.config().cycle_count, CycleCount::ADVANCED);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut ctl = controller();
        ctl.cycle_selection(-1).expect("ready");
        assert_eq!(ctl.config().cycle_count, CycleCount::ADVANCED);
        ctl.cycle_selection(1).expect("ready");
        assert_eq!(ctl.config().cycle_count, CycleCount::BEGINNER);
        ctl.cycle_selection(1).expect("ready");
        assert_eq!(ctl.config().cycle_count, CycleCount::INTERMEDIATE);
    }

    #[test]
    fn reset_from_ready_publishes_nothing() {
        let mut ctl = controller();
        ctl.reset();
        assert!(ctl.take_events().is_empty());
        assert_eq!(ctl.snapshot(), &SequencerState::ready());
    }
}
