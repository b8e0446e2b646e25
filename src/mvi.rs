//! Model-View-Intent primitives shared by the session core and the view.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── key press / tick ────┘
//! ```
//!
//! Reducers are the only place state changes. Anything with a side effect
//! (arming a clock, launching confetti) happens around the dispatch, never
//! inside `reduce`.

/// A user action or system event (key press, clock expiry).
pub trait Intent: Send + 'static {}

/// Snapshot type a reducer produces. Cheap to clone and compare.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// `(State, Intent) -> State`, with no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
