use thiserror::Error;

use super::phase::{CycleCount, Phase};

/// Operations refused by the session controller. Never fatal: the state is
/// left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session is not ready (currently {phase})")]
    NotReady { phase: Phase },

    #[error("session is not running")]
    NotRunning,

    #[error("cycle count {requested} is not one of {allowed:?}")]
    CycleCountNotAllowed {
        requested: u32,
        allowed: Vec<CycleCount>,
    },
}
