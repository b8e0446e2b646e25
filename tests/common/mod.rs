//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use innerflame::session::{ClockToken, TickScheduler};
use std::time::Duration;

/// Scheduler that records the live token; tests feed ticks by hand.
#[derive(Debug, Default)]
pub struct ManualTicker {
    active: Option<ClockToken>,
    schedules: usize,
    cancels: usize,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ClockToken> {
        self.active
    }

    pub fn schedule_count(&self) -> usize {
        self.schedules
    }

    pub fn cancel_count(&self) -> usize {
        self.cancels
    }
}

impl TickScheduler for ManualTicker {
    fn schedule(&mut self, token: ClockToken, _interval: Duration) {
        self.active = Some(token);
        self.schedules += 1;
    }

    fn cancel(&mut self) {
        self.active = None;
        self.cancels += 1;
    }
}
