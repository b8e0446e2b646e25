//! Real-time scheduling of clock ticks.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::clock::ClockToken;

/// Delivers periodic ticks for the one active clock run.
///
/// At most one schedule is live: `schedule` replaces the previous one and
/// `cancel` stops it before returning.
pub trait TickScheduler: Send {
    fn schedule(&mut self, token: ClockToken, interval: Duration);
    fn cancel(&mut self);
}

/// Tokio-backed scheduler: one interval task per run, ticks sent as tokens.
pub struct TokioTicker {
    tx: UnboundedSender<ClockToken>,
    task: Option<JoinHandle<()>>,
}

impl TokioTicker {
    pub fn new(tx: UnboundedSender<ClockToken>) -> Self {
        Self { tx, task: None }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl TickScheduler for TokioTicker {
    fn schedule(&mut self, token: ClockToken, interval: Duration) {
        self.cancel();
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(token).is_err() {
                    break;
                }
            }
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Scheduler that only records what it was asked to do. Ticks are fed by hand.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualTicker {
    active: Option<ClockToken>,
    schedules: usize,
    cancels: usize,
}

#[cfg(test)]
impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token of the live schedule, if any.
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

#[cfg(test)]
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::clock::PhaseClock;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn ticks_arrive_at_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = TokioTicker::new(tx);
        let mut clock = PhaseClock::new(100);
        let token = clock.start(300);
        ticker.schedule(token, Duration::from_millis(100));

        let start = Instant::now();
        assert_eq!(rx.recv().await, Some(token));
        assert_eq!(start.elapsed(), Duration::from_millis(100));
        assert_eq!(rx.recv().await, Some(token));
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = TokioTicker::new(tx);
        let mut clock = PhaseClock::new(100);
        ticker.schedule(clock.start(1000), Duration::from_millis(100));
        ticker.cancel();
        ticker.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
        assert!(!ticker.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_only_delivers_new_token() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = TokioTicker::new(tx);
        let mut clock = PhaseClock::new(100);
        let old = clock.start(1000);
        ticker.schedule(old, Duration::from_millis(100));
        clock.cancel();
        let new = clock.start(1000);
        ticker.schedule(new, Duration::from_millis(100));

        for _ in 0..5 {
            assert_eq!(rx.recv().await, Some(new));
        }
    }

    #[test]
    fn manual_ticker_tracks_live_schedule() {
        let mut ticker = ManualTicker::new();
        let mut clock = PhaseClock::new(100);
        let token = clock.start(100);
        ticker.schedule(token, Duration::from_millis(100));
        assert_eq!(ticker.active(), Some(token));
        ticker.cancel();
        assert_eq!(ticker.active(), None);
        assert_eq!((ticker.schedule_count(), ticker.cancel_count()), (1, 1));
    }
}
