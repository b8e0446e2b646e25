//! Line-mode front end: one line per phase entry, no raw mode.

use std::io::{self, Write};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::config::Config;
use crate::session::{
    ClockToken, Phase, PhaseEntered, PhaseTimings, SequencerState, SessionConfig,
    SessionController, TickScheduler, TokioTicker,
};
use crate::ui::display::{format_countdown, phase_title};

/// Run one full session, printing to stdout. Ctrl+C stops it early.
pub async fn run(config: &Config) -> io::Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let mut controller = SessionController::new(
        config.session.default_cycles,
        config.session.allowed_cycles.clone(),
        PhaseTimings::from(&config.timing),
        TokioTicker::new(tick_tx),
    );
    let mut stdout = io::stdout();

    let interrupted = tokio::select! {
        result = drive(&mut controller, &mut tick_rx, &mut stdout) => {
            result?;
            false
        }
        _ = tokio::signal::ctrl_c() => true,
    };

    if interrupted {
        let _ = controller.stop();
        writeln!(stdout, "Stopped")?;
    }
    Ok(())
}

/// Start `controller` and feed it ticks until the session completes.
pub async fn drive<S, W>(
    controller: &mut SessionController<S>,
    ticks: &mut UnboundedReceiver<ClockToken>,
    out: &mut W,
) -> io::Result<()>
where
    S: TickScheduler,
    W: Write,
{
    if let Err(err) = controller.start() {
        tracing::warn!(error = %err, "Plain session could not start");
        return Ok(());
    }
    flush_events(controller, out)?;

    while !controller.snapshot().is_completed() {
        let Some(token) = ticks.recv().await else {
            break;
        };
        controller.on_clock(token);
        flush_events(controller, out)?;
    }
    Ok(())
}

fn flush_events<S: TickScheduler, W: Write>(
    controller: &mut SessionController<S>,
    out: &mut W,
) -> io::Result<()> {
    let config = controller.config();
    for entry in controller.take_events() {
        writeln!(out, "{}", describe(&entry, controller.snapshot(), &config))?;
    }
    out.flush()
}

/// One human-readable line for a phase entry.
pub fn describe(entry: &PhaseEntered, snapshot: &SequencerState, config: &SessionConfig) -> String {
    let title = phase_title(entry.phase);
    let mut line = if entry.phase.is_breathing() {
        format!(
            "[cycle {}/{}] {}",
            entry.cycle_index,
            config.cycle_count.get(),
            title
        )
    } else {
        title.to_string()
    };
    if !matches!(entry.phase, Phase::Ready | Phase::Completed) {
        line.push_str(&format!(" ({})", format_countdown(entry.duration_ms)));
    }
    if !snapshot.notification.is_empty() {
        line.push_str(" - ");
        line.push_str(&snapshot.notification);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CycleCount;

    #[test]
    fn describes_breathing_entry_with_cycle() {
        let entry = PhaseEntered {
            phase: Phase::Inhale,
            cycle_index: 2,
            duration_ms: 2000,
        };
        let snapshot = SequencerState {
            phase: Phase::Inhale,
            cycle_index: 2,
            remaining_ms: 2000,
            phase_duration_ms: 2000,
            is_running: true,
            notification: "Begin practice".to_string(),
        };
        let line = describe(&entry, &snapshot, &SessionConfig::new(CycleCount::BEGINNER));
        assert_eq!(line, "[cycle 2/5] Breathe In (2s) - Begin practice");
    }

    #[test]
    fn describes_completion_without_duration() {
        let entry = PhaseEntered {
            phase: Phase::Completed,
            cycle_index: 5,
            duration_ms: 0,
        };
        let snapshot = SequencerState {
            phase: Phase::Completed,
            cycle_index: 5,
            notification: "Practice complete".to_string(),
            ..SequencerState::default()
        };
        let line = describe(&entry, &snapshot, &SessionConfig::new(CycleCount::BEGINNER));
        assert_eq!(line, "Complete - Practice complete");
    }
}
