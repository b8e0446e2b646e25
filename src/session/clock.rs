//! Generation-guarded countdown.
//!
//! The clock itself never touches real time. A driver delivers ticks tagged
//! with the [`ClockToken`] handed out by [`PhaseClock::start`]; ticks from a
//! run that has since been cancelled or replaced come back as
//! [`ClockSignal::Stale`] and must be dropped.

use super::timing::MAX_TICK_INTERVAL_MS;

/// Identifies one armed run of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockToken {
    generation: u64,
}

impl ClockToken {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Outcome of delivering one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSignal {
    Tick { remaining_ms: u64 },
    /// Remaining time reached zero. Delivered once per run.
    Expired,
    Stale,
}

#[derive(Debug)]
pub struct PhaseClock {
    interval_ms: u64,
    generation: u64,
    remaining_ms: u64,
    armed: bool,
}

impl PhaseClock {
    /// `interval_ms` is clamped to `1..=MAX_TICK_INTERVAL_MS`.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.clamp(1, MAX_TICK_INTERVAL_MS),
            generation: 0,
            remaining_ms: 0,
            armed: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Arm a new run, invalidating every earlier token.
    pub fn start(&mut self, duration_ms: u64) -> ClockToken {
        self.generation = self.generation.wrapping_add(1);
        self.remaining_ms = duration_ms;
        self.armed = true;
        ClockToken {
            generation: self.generation,
        }
    }

    /// Disarm. Safe to call any number of times, armed or not.
    pub fn cancel(&mut self) {
        if self.armed {
            self.generation = self.generation.wrapping_add(1);
        }
        self.armed = false;
        self.remaining_ms = 0;
    }

    pub fn accepts(&self, token: ClockToken) -> bool {
        self.armed && token.generation == self.generation
    }

    pub fn tick(&mut self, token: ClockToken) -> ClockSignal {
        if !self.accepts(token) {
            return ClockSignal::Stale;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(self.interval_ms);
        if self.remaining_ms == 0 {
            self.armed = false;
            return ClockSignal::Expired;
        }
        ClockSignal::Tick {
            remaining_ms: self.remaining_ms,
        }
    }
}
