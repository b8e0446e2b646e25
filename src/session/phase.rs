//! Meditation phases and the validated cycle count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named stage of the meditation sequence. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Ready,
    Inhale,
    Exhale,
    /// Breath held with empty lungs.
    HoldOut,
    /// The single breath in between the two holds. Does not count as a cycle.
    TransitionalInhale,
    /// Breath held with full lungs.
    HoldIn,
    FinalExhale,
    Completed,
}

impl Phase {
    /// Part of the repeated inhale/exhale loop.
    pub fn is_breathing(self) -> bool {
        matches!(self, Self::Inhale | Self::Exhale)
    }

    pub fn is_hold(self) -> bool {
        matches!(self, Self::HoldOut | Self::HoldIn)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Inhale => "inhale",
            Self::Exhale => "exhale",
            Self::HoldOut => "hold-out",
            Self::TransitionalInhale => "transitional-inhale",
            Self::HoldIn => "hold-in",
            Self::FinalExhale => "final-exhale",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of inhale/exhale cycles before the holds begin.
///
/// Also drives hold length, so it doubles as the session intensity.
/// Always positive; membership in the allowed set is checked by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CycleCount(u32);

impl CycleCount {
    pub const BEGINNER: Self = Self(5);
    pub const INTERMEDIATE: Self = Self(10);
    pub const ADVANCED: Self = Self(15);

    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for CycleCount {
    fn default() -> Self {
        Self::INTERMEDIATE
    }
}

impl TryFrom<u32> for CycleCount {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "cycle count must be positive".to_string())
    }
}

impl From<CycleCount> for u32 {
    fn from(count: CycleCount) -> Self {
        count.0
    }
}

impl fmt::Display for CycleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
