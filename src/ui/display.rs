//! Display adapter: maps a session snapshot to everything the view draws.
//!
//! Stateless. Recomputed every frame from the controller's current
//! [`SequencerState`], never mutates it.

use ratatui::style::Color;

use crate::session::{ceil_seconds, Phase, SequencerState, SessionConfig};
use crate::ui::theme::{
    DEEP_BLUE, EMBER_DIM, FLAME_GOLD, FLAME_ORANGE, FLAME_RED, ICE_BLUE,
};

/// Smallest and largest circle scale, relative to the resting size.
pub const SCALE_EMPTY: f64 = 0.75;
pub const SCALE_FULL: f64 = 1.25;

/// How the breathing circle moves during a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStyle {
    Idle,
    Expand,
    Contract,
    HeldEmpty,
    HeldFull,
    Rest,
}

impl AnimationStyle {
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Ready => Self::Idle,
            Phase::Inhale | Phase::TransitionalInhale => Self::Expand,
            Phase::Exhale | Phase::FinalExhale => Self::Contract,
            Phase::HoldOut => Self::HeldEmpty,
            Phase::HoldIn => Self::HeldFull,
            Phase::Completed => Self::Rest,
        }
    }

    /// Circle scale at `progress` (0.0 to 1.0) through the phase.
    pub fn scale(self, progress: f64) -> f64 {
        let progress = progress.clamp(0.0, 1.0);
        match self {
            Self::Idle | Self::Rest => 1.0,
            Self::Expand => SCALE_EMPTY + (SCALE_FULL - SCALE_EMPTY) * ease(progress),
            Self::Contract => SCALE_FULL - (SCALE_FULL - SCALE_EMPTY) * ease(progress),
            Self::HeldEmpty => SCALE_EMPTY,
            Self::HeldFull => SCALE_FULL,
        }
    }
}

/// Two-stop gradient, outer ring to centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub outer: Color,
    pub inner: Color,
}

impl Gradient {
    pub fn for_style(style: AnimationStyle) -> Self {
        let (outer, inner) = match style {
            AnimationStyle::Idle => (EMBER_DIM, FLAME_ORANGE),
            AnimationStyle::Expand => (FLAME_ORANGE, FLAME_GOLD),
            AnimationStyle::Contract => (FLAME_RED, FLAME_ORANGE),
            AnimationStyle::HeldEmpty => (DEEP_BLUE, ICE_BLUE),
            AnimationStyle::HeldFull => (FLAME_RED, FLAME_GOLD),
            AnimationStyle::Rest => (FLAME_ORANGE, FLAME_GOLD),
        };
        Self { outer, inner }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayParams {
    pub animation: AnimationStyle,
    pub gradient: Gradient,
    /// `cycle_index / cycle_count` inside the breathing loop, `None` elsewhere.
    pub progress_ratio: Option<f64>,
    pub scale: f64,
    pub title: &'static str,
    pub description: String,
    pub notification: Option<String>,
    pub cycle_label: Option<String>,
    pub countdown: Option<String>,
    pub show_completion_effect: bool,
}

impl DisplayParams {
    pub fn from_snapshot(state: &SequencerState, config: &SessionConfig) -> Self {
        let animation = AnimationStyle::for_phase(state.phase);
        let cycles = config.cycle_count.get();
        let in_loop = state.phase.is_breathing();

        let progress_ratio = in_loop.then(|| progress_ratio(state.cycle_index, cycles));
        let cycle_label =
            in_loop.then(|| format!("Cycle {} of {}", state.cycle_index, cycles));
        let countdown = (state.phase.is_hold() && state.remaining_ms > 0)
            .then(|| format_countdown(state.remaining_ms));
        let notification =
            (!state.notification.is_empty()).then(|| state.notification.clone());

        Self {
            animation,
            gradient: Gradient::for_style(animation),
            progress_ratio,
            scale: animation.scale(state.phase_progress()),
            title: phase_title(state.phase),
            description: phase_description(state.phase, config),
            notification,
            cycle_label,
            countdown,
            show_completion_effect: state.is_completed(),
        }
    }
}

pub fn progress_ratio(cycle_index: u32, cycle_count: u32) -> f64 {
    if cycle_count == 0 {
        return 0.0;
    }
    (cycle_index as f64 / cycle_count as f64).clamp(0.0, 1.0)
}

/// Whole seconds remaining, rounded up: 2450 ms renders as `3s`.
pub fn format_countdown(remaining_ms: u64) -> String {
    format!("{}s", ceil_seconds(remaining_ms))
}

pub fn phase_title(phase: Phase) -> &'static str {
    match phase {
        Phase::Ready => "Prepare",
        Phase::Inhale | Phase::TransitionalInhale => "Breathe In",
        Phase::Exhale | Phase::FinalExhale => "Breathe Out",
        Phase::HoldOut => "Hold (Empty)",
        Phase::HoldIn => "Hold (Full)",
        Phase::Completed => "Complete",
    }
}

pub fn phase_description(phase: Phase, config: &SessionConfig) -> String {
    let cycles = config.cycle_count.get();
    match phase {
        Phase::Ready => {
            "Prepare yourself for the Tummo breathing practice. Find a comfortable seated position."
                .to_string()
        }
        Phase::Inhale | Phase::Exhale => format!(
            "Follow the breathing pattern: in, then out, for {} cycles.",
            cycles
        ),
        Phase::HoldOut => "Hold your breath out with empty lungs.".to_string(),
        Phase::TransitionalInhale => "Take a deep breath in before the second hold.".to_string(),
        Phase::HoldIn => "Hold your breath in with full lungs.".to_string(),
        Phase::FinalExhale => "Slowly let the breath go.".to_string(),
        Phase::Completed => {
            "Well done! Your inner flame has been kindled. Take a moment to feel the warmth within."
                .to_string()
        }
    }
}

fn ease(t: f64) -> f64 {
    // smoothstep
    t * t * (3.0 - 2.0 * t)
}
