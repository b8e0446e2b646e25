//! Breathing session core.
//!
//! # Architecture
//!
//! ```text
//! TickScheduler ──token──→ SessionController ──intent──→ SessionReducer
//!                               │                            │
//!                               │  PhaseClock (generation)   └─ sequencer::next_phase
//!                               └──→ PhaseEntered events, SequencerState snapshot
//! ```
//!
//! - `clock.rs` - countdown with stale-tick rejection
//! - `driver.rs` - real-time tick delivery (tokio) and a manual test double
//! - `sequencer.rs` - transition table (pure)
//! - `reducer.rs` / `intent.rs` - MVI wiring for the controller
//! - `controller.rs` - start/stop/reset/configure and clock side effects

mod clock;
mod controller;
mod driver;
mod error;
mod intent;
mod phase;
mod reducer;
mod sequencer;
mod state;
mod timing;

pub use clock::{ClockSignal, ClockToken, PhaseClock};
pub use controller::{PhaseEntered, SessionController};
pub use driver::{TickScheduler, TokioTicker};
pub use error::SessionError;
pub use intent::SessionIntent;
pub use phase::{CycleCount, Phase};
pub use reducer::{SessionModel, SessionReducer};
pub use sequencer::{begin, next_phase};
pub use state::{SequencerState, SessionConfig};
pub use timing::{ceil_seconds, PhaseTimings, MAX_PHASE_MS, MAX_TICK_INTERVAL_MS};

#[cfg(test)]
pub(crate) use driver::ManualTicker;
